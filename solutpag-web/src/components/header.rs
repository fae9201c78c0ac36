//! Landing header
//!
//! Sticky bar with in-page anchor navigation. Anchor clicks go through the injected scroll
//! controller so the jump is eased and clears the header. The bar slides away when the user
//! scrolls down past a share of the page and comes back on the way up.

use leptos::ev::{self, MouseEvent};
use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use shared::routes::Route;
use shared::scroll::{anchor_offset, scroll_progress, HeaderVisibility, ScrollOptions, ScrollTarget};

use crate::state::scroll::use_scroll;

struct MenuItem {
    label: &'static str,
    href: &'static str,
    submenu: &'static [(&'static str, &'static str)],
}

const MENU: &[MenuItem] = &[
    MenuItem {
        label: "Recursos",
        href: "#recursos",
        submenu: &[
            ("PIX Instantâneo", "#pix"),
            ("Pagamentos com Cartão", "#cartao"),
            ("Boletos Bancários", "#boleto"),
            ("Criptomoedas", "#cripto"),
        ],
    },
    MenuItem {
        label: "Depoimentos",
        href: "#depoimentos",
        submenu: &[],
    },
    MenuItem {
        label: "Suporte",
        href: "#suporte",
        submenu: &[],
    },
];

#[component]
pub fn Header() -> impl IntoView {
    let scroll = use_scroll();
    let header_ref = NodeRef::<html::Header>::new();

    let (menu_open, set_menu_open) = signal(false);
    let (hovered, set_hovered) = signal(None::<usize>);
    let (hidden, set_hidden) = signal(false);
    let visibility = StoredValue::new(HeaderVisibility::new());

    let handle = window_event_listener(ev::scroll, move |_| {
        let window = window();
        let y = window.scroll_y().unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or(0.0);
        let progress = scroll_progress(y, document_height, viewport);
        let menu_open = menu_open.get_untracked();

        if let Some(now_hidden) = visibility.try_update_value(|v| v.observe(y, progress, menu_open)) {
            if now_hidden != hidden.get_untracked() {
                set_hidden.set(now_hidden);
            }
        }
    });
    on_cleanup(move || handle.remove());

    // Anchor navigation: eased jump, offset by the measured header height.
    let go_to = move |ev: MouseEvent, href: &'static str| {
        let Some(target) = ScrollTarget::from_href(href) else {
            return;
        };
        ev.prevent_default();
        let header_height = header_ref.get().map(|el| f64::from(el.offset_height()));
        scroll.scroll_to(
            target,
            ScrollOptions {
                offset: anchor_offset(header_height),
                ..ScrollOptions::default()
            },
        );
        set_menu_open.set(false);
    };

    let desktop_items = MENU
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let go_to = go_to.clone();
            let submenu = (!item.submenu.is_empty()).then(|| {
                let links = item
                    .submenu
                    .iter()
                    .map(|&(label, href)| {
                        let go_to = go_to.clone();
                        view! {
                            <a href=href class="submenu-link" on:click=move |ev| go_to(ev, href)>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="submenu" class:open=move || hovered.get() == Some(index)>
                        {links}
                    </div>
                }
            });
            let has_submenu = !item.submenu.is_empty();
            let href = item.href;

            view! {
                <li
                    class="nav-item"
                    on:mouseenter=move |_| set_hovered.set(Some(index))
                    on:mouseleave=move |_| set_hovered.set(None)
                >
                    <a
                        href=href
                        class="nav-link"
                        aria-haspopup=has_submenu.to_string()
                        aria-expanded=move || (has_submenu && hovered.get() == Some(index)).to_string()
                        on:click=move |ev| go_to(ev, href)
                    >
                        {item.label}
                        {has_submenu.then_some(" ▾")}
                    </a>
                    {submenu}
                </li>
            }
        })
        .collect::<Vec<_>>();

    let mobile_items = MENU
        .iter()
        .map(|item| {
            let go_to = go_to.clone();
            let href = item.href;
            view! {
                <a href=href class="mobile-link" on:click=move |ev| go_to(ev, href)>
                    {item.label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let go_top = go_to.clone();
    let cta = go_to.clone();
    let mobile_cta = go_to;

    view! {
        <header
            node_ref=header_ref
            class="site-header"
            class:is-hidden=move || hidden.get()
            aria-hidden=move || hidden.get().to_string()
            on:mouseenter=move |_| {
                visibility.update_value(|v| v.reveal());
                set_hidden.set(false);
            }
        >
            <div class="header-shell">
                <nav class="header-nav">
                    <a href="#" class="brand" on:click=move |ev| go_top(ev, "#topo")>
                        <span class="brand-solut">"Solut"</span>
                        <span class="brand-pag">"Pag"</span>
                    </a>

                    <div class="nav-desktop">
                        <ul class="nav-list">{desktop_items}</ul>
                        <A href=Route::Login.path() attr:class="btn btn-ghost">
                            "Entrar"
                        </A>
                        <button class="btn btn-primary" on:click=move |ev| cta(ev, "#recursos")>
                            "Começar a Negociar"
                        </button>
                    </div>

                    <button
                        class="menu-toggle"
                        aria-label="Abrir menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </nav>

                <div class="mobile-menu" class:open=move || menu_open.get()>
                    {mobile_items}
                    <A href=Route::Login.path() attr:class="mobile-link">
                        "Entrar"
                    </A>
                    <button class="btn btn-primary btn-block" on:click=move |ev| mobile_cta(ev, "#recursos")>
                        "Começar a Negociar"
                    </button>
                </div>
            </div>
        </header>
    }
}
