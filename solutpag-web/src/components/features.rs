//! "Recursos" section: feature list on the left, sticky wallet preview on the right.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::money::format_brl;
use shared::routes::Route;

use crate::components::reveal::Reveal;

struct Feature {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    tone: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature { icon: "▣", title: "Aceite múltiplos métodos de pagamento", desc: "PIX, cartão, boleto e criptomoedas em uma única plataforma integrada.", tone: "grad-blue" },
    Feature { icon: "▦", title: "Dashboard em tempo real", desc: "Acompanhe suas transações com analytics, filtros e relatórios detalhados.", tone: "grad-purple" },
    Feature { icon: "⛨", title: "Segurança e Verificação", desc: "KYC, antifraude e monitoramento contínuo para proteger cada operação.", tone: "grad-emerald" },
    Feature { icon: "▥", title: "Análise de Performance", desc: "KPIs claros, score de risco e insights para decisões com mais confiança.", tone: "grad-amber" },
    Feature { icon: "⇅", title: "Integrações rápidas via API", desc: "SDKs prontos, webhooks e checkout em minutos. Menos atrito, mais conversão.", tone: "grad-indigo" },
    Feature { icon: "🔒", title: "Proteção antifraude bancária", desc: "Detecção de padrões suspeitos, listas de risco e bloqueio automático.", tone: "grad-rose" },
    Feature { icon: "▤", title: "Relatórios exportáveis", desc: "Exportação em PDF, CSV e Excel para conciliação e auditorias.", tone: "grad-sky" },
];

/// Payment methods, each an anchor target of the header's "Recursos" submenu.
const METHODS: &[(&str, &str, &str)] = &[
    ("pix", "PIX Instantâneo", "Cobranças por QR Code com confirmação em segundos."),
    ("cartao", "Pagamentos com Cartão", "Crédito e débito com antifraude integrado."),
    ("boleto", "Boletos Bancários", "Emissão e conciliação automáticas."),
    ("cripto", "Criptomoedas", "Receba em cripto e liquide em reais."),
];

/// Balance shown on the preview card, in cents.
const PREVIEW_BALANCE_CENTS: i64 = 1_258_012;

#[component]
pub fn Features() -> impl IntoView {
    let features = FEATURES
        .iter()
        .enumerate()
        .map(|(i, f)| {
            view! {
                <Reveal delay_ms=(i as u32) * 80>
                    <div class="feature">
                        <div class=format!("feature-icon {}", f.tone)>{f.icon}</div>
                        <div>
                            <h3>{f.title}</h3>
                            <p class="muted">{f.desc}</p>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    let methods = METHODS
        .iter()
        .map(|&(id, title, desc)| {
            view! {
                <div id=id class="method card">
                    <h4>{title}</h4>
                    <p class="muted">{desc}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="recursos" class="section">
            <Reveal>
                <div class="section-head">
                    <span class="pill">"Solução Completa"</span>
                    <h2>"Recursos que facilitam seus " <span class="gradient-text">"recebimentos"</span></h2>
                    <p class="muted">
                        "Tecnologia avançada para simplificar seus recebimentos e potencializar seu negócio"
                    </p>
                </div>
            </Reveal>

            <div class="features-grid">
                <div class="feature-list">{features}</div>
                <WalletPreview/>
            </div>

            <div class="methods-grid">{methods}</div>
        </section>
    }
}

#[component]
fn WalletPreview() -> impl IntoView {
    view! {
        <div class="wallet-preview">
            <div class="card wallet-card">
                <div class="wallet-balance">
                    <p class="muted">"Saldo Disponível"</p>
                    <p class="muted small">"Últimos 30 dias"</p>
                    <p class="wallet-amount">{format_brl(PREVIEW_BALANCE_CENTS)}</p>
                    <div class="wallet-trend">
                        <div class="trend-bar"><div class="trend-fill"></div></div>
                        <span class="positive">"+12.5%"</span>
                    </div>
                </div>
                <div class="wallet-profile">
                    <p>"Perfil"</p>
                    <p class="mono muted small">"98e3....c463"</p>
                    <A href=Route::Dashboard.path() attr:class="btn btn-emerald">
                        "Dashboard →"
                    </A>
                </div>
            </div>

            <div class="card wallet-card">
                <div>
                    <p class="wallet-boost">"⚡ Potencialize seus ganhos"</p>
                    <p class="muted">
                        "Use nossa plataforma e aumente em até " <strong class="amber">"100%"</strong>
                        " seus recebimentos com taxas reduzidas e saques instantâneos."
                    </p>
                    <A href=Route::Register.path() attr:class="btn btn-outline">
                        "Experimente Agora →"
                    </A>
                </div>
                <div class="wallet-card-icon">"💳"</div>
            </div>
        </div>
    }
}
