//! Customer testimonials.

use leptos::prelude::*;

use crate::components::reveal::Reveal;

struct Testimonial {
    name: &'static str,
    position: &'static str,
    content: &'static str,
    rating: usize,
    image: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        position: "Gestora de Fundo Crípto",
        content: "As ferramentas de nível institucional do CryptoTrade transformaram nossa estratégia de investimento e aumentaram nossa rentabilidade significativamente.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=400&q=80",
    },
    Testimonial {
        name: "David Wilson",
        position: "Investidor Cripto Inicial",
        content: "O suporte ao cliente é excepcional, e o design intuitivo da plataforma tornou o início na trading de criptomoedas muito mais acessível.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=400&q=80",
    },
    Testimonial {
        name: "Emily Zhang",
        position: "Desenvolvedora DeFi",
        content: "Vimos melhorias notáveis em nossa eficiência de negociação desde que mudamos para a SolutPag. A velocidade de execução é incomparável.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=400&q=80",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    let cards = TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(i, t)| {
            view! {
                <Reveal delay_ms=(i as u32) * 200>
                    <article class="card testimonial">
                        <div class="quote-mark">"“"</div>
                        <div class="stars" aria-label=format!("{} estrelas", t.rating)>
                            {"★".repeat(t.rating)}
                        </div>
                        <p class="testimonial-content">{t.content}</p>
                        <div class="testimonial-author">
                            <img src=t.image alt=t.name loading="lazy"/>
                            <div>
                                <p class="author-name">{t.name}</p>
                                <p class="muted small">{t.position}</p>
                            </div>
                        </div>
                    </article>
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="depoimentos" class="section">
            <Reveal>
                <div class="section-head">
                    <h2>"Confiado por " <span class="gradient-text">"Empresários"</span></h2>
                    <p class="muted">"Junte-se a milhares de Empresários satisfeitos pela SolutPag"</p>
                </div>
            </Reveal>
            <div class="testimonial-grid">{cards}</div>
        </section>
    }
}
