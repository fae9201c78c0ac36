//! Hero section with two endlessly scrolling columns of creator cards.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use shared::routes::Route;
use shared::scroll::{ScrollOptions, ScrollTarget};

use crate::state::scroll::use_scroll;

struct Creator {
    src: &'static str,
    name: &'static str,
    meta: &'static str,
}

const COLUMN_UP: &[Creator] = &[
    Creator { src: "https://images.unsplash.com/photo-1544006659-f0b21884ce1d?q=80&w=900&auto=format&fit=crop", name: "Ava Carter", meta: "3.2M" },
    Creator { src: "https://images.unsplash.com/photo-1548142813-c348350df52b?q=80&w=900&auto=format&fit=crop", name: "Bruno Lee", meta: "1.1M" },
    Creator { src: "https://images.unsplash.com/photo-1527980965255-d3b416303d12?q=80&w=900&auto=format&fit=crop", name: "Nina Gomez", meta: "890K" },
    Creator { src: "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?q=80&w=900&auto=format&fit=crop", name: "Rafa Mendes", meta: "2.0M" },
];

const COLUMN_DOWN: &[Creator] = &[
    Creator { src: "https://images.unsplash.com/photo-1502823403499-6ccfcf4fb453?q=80&w=900&auto=format&fit=crop", name: "Jo Kim", meta: "7.5M" },
    Creator { src: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=900&auto=format&fit=crop", name: "Sofia Martins", meta: "1.4M" },
    Creator { src: "https://images.unsplash.com/photo-1544717305-2782549b5136?q=80&w=900&auto=format&fit=crop", name: "Ian Park", meta: "2.8M" },
    Creator { src: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=900&auto=format&fit=crop", name: "Daniel Costa", meta: "950K" },
];

/// One column. The cards are rendered twice so the CSS loop (translate to -50%) is seamless.
#[component]
fn VerticalMarquee(items: &'static [Creator], upward: bool, duration_s: u32) -> impl IntoView {
    let cards = items
        .iter()
        .chain(items.iter())
        .map(|card| {
            view! {
                <div class="creator-card">
                    <img src=card.src alt=card.name loading="lazy"/>
                    <div class="creator-meta">
                        <span class="creator-name">{card.name}</span>
                        <span class="creator-followers">{card.meta}</span>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="vmarquee">
            <div
                class="vmarquee-track"
                class:down=!upward
                style=format!("animation-duration: {}s;", duration_s)
            >
                {cards}
            </div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let scroll = use_scroll();

    let show_features = move |ev: MouseEvent| {
        ev.prevent_default();
        if let Some(target) = ScrollTarget::from_href("#recursos") {
            scroll.scroll_to(target, ScrollOptions::default());
        }
    };

    view! {
        <section id="topo" class="hero">
            <div class="hero-copy">
                <span class="pill">
                    <span class="pill-dot">"⚡"</span>
                    "Plataforma de Pagamentos Digital"
                </span>

                <h1 class="hero-title">
                    "Receba seus " <span class="gradient-text">"Pagamentos"</span>
                    " com confiança e segurança"
                </h1>

                <p class="hero-lead">
                    "Aceite PIX, cartão, boleto e cripto numa única plataforma. "
                    <strong>"Relatórios em tempo real"</strong> " e " <strong>"saques rápidos"</strong> "."
                </p>

                <div class="hero-actions">
                    <A href=Route::Register.path() attr:class="btn btn-primary">
                        "Começar Agora"
                    </A>
                    <a href="#recursos" class="btn btn-outline" on:click=show_features>
                        "Ver Recursos →"
                    </a>
                </div>

                <ul class="hero-checks">
                    <li>"✓ Pix imediato sem consulta ao CPF"</li>
                    <li>"✓ Integrações API"</li>
                </ul>
            </div>

            <div class="hero-mosaic" aria-hidden="true">
                <VerticalMarquee items=COLUMN_UP upward=true duration_s=22/>
                <VerticalMarquee items=COLUMN_DOWN upward=false duration_s=26/>
            </div>
        </section>
    }
}
