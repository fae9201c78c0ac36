//! Partner brands scrolling horizontally in a loop.

use leptos::prelude::*;

use crate::components::reveal::Reveal;

const BRANDS: &[&str] = &["WordPress", "Telegram", "PagHiper", "Facebook", "Google"];

#[component]
pub fn BrandMarquee() -> impl IntoView {
    // Doubled so the loop never shows a gap, even with few brands.
    let slides = BRANDS
        .iter()
        .chain(BRANDS.iter())
        .map(|brand| view! { <li class="brand-slide">{*brand}</li> })
        .collect::<Vec<_>>();

    view! {
        <section class="section brands">
            <Reveal>
                <div class="section-head">
                    <h2>"Parceiros e Integrações"</h2>
                    <p class="muted">"Compatível com as principais plataformas do mercado"</p>
                </div>
            </Reveal>
            <div class="marquee" aria-label="Empresas parceiras e clientes">
                <ul class="marquee-track">{slides}</ul>
            </div>
        </section>
    }
}
