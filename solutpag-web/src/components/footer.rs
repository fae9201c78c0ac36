//! Landing footer: quick links, services, contact and newsletter.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use shared::scroll::{ScrollOptions, ScrollTarget};

use crate::state::scroll::use_scroll;
use crate::utils::constants::{SUPPORT_EMAIL, SUPPORT_PHONE};

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Início", "#topo"),
    ("Recursos", "#recursos"),
    ("Depoimentos", "#depoimentos"),
    ("Suporte", "#suporte"),
];

const SERVICES: &[&str] = &[
    "Pagamentos PIX",
    "Cartão de Crédito",
    "Boletos Bancários",
    "Criptomoedas",
    "Dashboard Analytics",
];

#[component]
pub fn Footer() -> impl IntoView {
    let scroll = use_scroll();
    let newsletter_email = RwSignal::new(String::new());

    let links = QUICK_LINKS
        .iter()
        .map(|&(label, href)| {
            let scroll = scroll.clone();
            let on_click = move |ev: MouseEvent| {
                if let Some(target) = ScrollTarget::from_href(href) {
                    ev.prevent_default();
                    scroll.scroll_to(target, ScrollOptions::default());
                }
            };
            view! { <li><a href=href on:click=on_click>{label}</a></li> }
        })
        .collect::<Vec<_>>();

    let services = SERVICES
        .iter()
        .map(|service| view! { <li>{*service}</li> })
        .collect::<Vec<_>>();

    // No newsletter backend yet; the address is dropped after a local acknowledgement.
    let on_subscribe = move |ev: SubmitEvent| {
        ev.prevent_default();
        if newsletter_email.with_untracked(String::is_empty) {
            return;
        }
        log::info!("[FOOTER] newsletter sign-up submitted");
        newsletter_email.set(String::new());
    };

    view! {
        <footer id="suporte" class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="brand">
                        <span class="brand-solut">"Solut"</span>
                        <span class="brand-pag">"Pag"</span>
                    </div>
                    <p class="muted">
                        "Pagamentos digitais para quem vende online: PIX, cartão, boleto e cripto."
                    </p>
                </div>

                <div>
                    <h3>"Links Rápidos"</h3>
                    <ul class="footer-list">{links}</ul>
                </div>

                <div>
                    <h3>"Nossos Serviços"</h3>
                    <ul class="footer-list">{services}</ul>
                </div>

                <div>
                    <h3>"Entre em Contato"</h3>
                    <ul class="footer-list">
                        <li>"✉ " <a href=format!("mailto:{}", SUPPORT_EMAIL)>{SUPPORT_EMAIL}</a></li>
                        <li>"☎ " {SUPPORT_PHONE}</li>
                    </ul>
                </div>
            </div>

            <div class="newsletter card">
                <div>
                    <h3>"Fique por dentro das novidades"</h3>
                    <p class="muted">"Receba atualizações exclusivas sobre novos recursos e promoções."</p>
                </div>
                <form class="newsletter-form" on:submit=on_subscribe>
                    <input type="email" placeholder="Seu e-mail" bind:value=newsletter_email/>
                    <button type="submit" class="btn btn-primary">"Inscrever"</button>
                </form>
            </div>

            <div class="footer-bottom">
                <p class="muted">"© 2025 SolutPag. Feito para você!"</p>
                <nav class="footer-legal">
                    <a href="/terms">"Termos de Serviço"</a>
                    <a href="/privacy">"Política de Privacidade"</a>
                    <a href="/cookies">"Cookies"</a>
                </nav>
            </div>
        </footer>
    }
}
