//! Dashboard Page - account overview
//!
//! Renders mock figures immediately; the reconciliation pass swaps in whatever the API
//! answered successfully.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::chart::{area_points, CHART_HEIGHT, CHART_WIDTH};
use shared::money::format_brl;
use shared::reconcile::DashboardState;
use shared::routes::{Route, REPORTS_PATH};

use crate::components::{Kpi, Tone};
use crate::state::dashboard::use_dashboard_state;
use crate::utils::format::{movement_amount, movement_status_class, sale_status_class};

/// Fill and stroke gradients referenced by the chart polylines.
const CHART_GRADIENTS: &str = concat!(
    r##"<linearGradient id="area-gradient" x1="0" x2="0" y1="0" y2="1">"##,
    r##"<stop offset="0%" stop-color="#3B82F6" stop-opacity="0.4"/>"##,
    r##"<stop offset="100%" stop-color="#3B82F6" stop-opacity="0"/>"##,
    r##"</linearGradient>"##,
    r##"<linearGradient id="line-gradient" x1="0" x2="1" y1="0" y2="0">"##,
    r##"<stop offset="0%" stop-color="#3B82F6"/>"##,
    r##"<stop offset="100%" stop-color="#60A5FA"/>"##,
    r##"</linearGradient>"##,
);

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_dashboard_state();

    let summary_field = move |read: fn(&DashboardState) -> String| Signal::derive(move || state.with(read));

    let line_points = move || state.with(DashboardState::chart_points);
    let fill_points = move || area_points(&line_points());

    let sales_rows = move || {
        state.with(|s| {
            s.last_sales
                .iter()
                .cloned()
                .map(|sale| {
                    view! {
                        <tr>
                            <td>{sale.at}</td>
                            <td>{sale.title}</td>
                            <td>{format_brl(sale.amount_cents)}</td>
                            <td>
                                <span class=sale_status_class(&sale.status)>
                                    {sale.status.label().to_string()}
                                </span>
                            </td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let movement_rows = move || {
        state.with(|s| {
            s.movements
                .iter()
                .map(|movement| {
                    let amount = movement_amount(movement);
                    let badge = movement_status_class(movement);
                    let movement = movement.clone();
                    view! {
                        <tr>
                            <td>{movement.at}</td>
                            <td>{movement.kind}</td>
                            <td>{amount}</td>
                            <td><span class=badge>{movement.status}</span></td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <main class="page dashboard">
            <div class="page-inner wide">
                <header class="page-header">
                    <div>
                        <h1>"Dashboard"</h1>
                        <p class="muted">"Visão geral das suas operações financeiras"</p>
                    </div>
                    <A href=Route::Landing.path() attr:class="btn btn-outline">
                        "← Voltar"
                    </A>
                </header>

                <div class="alert alert-danger" role="alert" aria-live="polite">
                    <div class="alert-icon">"⚠"</div>
                    <div class="alert-body">
                        <p class="alert-title">"Verificação necessária"</p>
                        <p class="muted small">
                            "Complete a verificação para liberar todos os recursos da plataforma."
                        </p>
                    </div>
                    <A href=Route::Kyc.path() attr:class="btn btn-danger">
                        "Verificar agora"
                    </A>
                </div>

                <section class="kpi-grid">
                    <Kpi
                        label="Saldo disponível"
                        icon="▣"
                        tone=Tone::Blue
                        value=summary_field(|s| format_brl(s.summary.available_balance_cents))
                        delta=summary_field(|s| s.summary.deltas.available.clone())
                        delta_positive=true
                    />
                    <Kpi
                        label="Saldo bloqueado"
                        icon="🔒"
                        tone=Tone::Red
                        value=summary_field(|s| format_brl(s.summary.locked_balance_cents))
                        delta=summary_field(|s| s.summary.deltas.locked.clone())
                        delta_positive=false
                    />
                    <Kpi
                        label="Vendas (hoje)"
                        icon="↗"
                        tone=Tone::Emerald
                        value=summary_field(|s| format_brl(s.summary.sales_today_cents))
                        delta=summary_field(|s| s.summary.deltas.sales.clone())
                        delta_positive=true
                    />
                    <Kpi
                        label="Transações"
                        icon="🧾"
                        tone=Tone::Purple
                        value=summary_field(|s| s.summary.transactions_count.to_string())
                        delta=summary_field(|s| s.summary.deltas.tx.clone())
                        delta_positive=true
                    />
                </section>

                <section class="chart-grid">
                    <div class="card">
                        <div class="card-head">
                            <div>
                                <h2>"Vendas do dia (R$)"</h2>
                                <p class="muted small">"Atualizado agora"</p>
                            </div>
                            <span class="legend"><span class="legend-dot"></span>"Vendas"</span>
                        </div>
                        <div class="chart">
                            <svg
                                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                                preserveAspectRatio="none"
                                role="img"
                                aria-label="Gráfico de vendas do dia"
                            >
                                <defs inner_html=CHART_GRADIENTS></defs>
                                <polyline
                                    fill="url(#area-gradient)"
                                    stroke="url(#line-gradient)"
                                    stroke-width="3"
                                    stroke-linejoin="round"
                                    points=fill_points
                                />
                                <polyline
                                    fill="none"
                                    stroke="url(#line-gradient)"
                                    stroke-width="3"
                                    stroke-linejoin="round"
                                    points=line_points
                                />
                            </svg>
                        </div>
                    </div>

                    <div class="card">
                        <h2>"Ações rápidas"</h2>
                        <div class="actions">
                            <A href=Route::Sale.path() attr:class="action action-primary">
                                <span>"▦"</span> "Nova venda (PIX)"
                            </A>
                            <A href=Route::Withdrawal.path() attr:class="action tone-emerald">
                                <span>"⇩"</span> "Solicitar saque"
                            </A>
                            <A href=Route::Kyc.path() attr:class="action tone-amber">
                                <span>"▤"</span> "Verificação KYC"
                            </A>
                            <A href=REPORTS_PATH attr:class="action tone-purple">
                                <span>"⤓"</span> "Relatórios"
                            </A>
                        </div>
                    </div>
                </section>

                <section class="table-grid">
                    <div class="card">
                        <div class="card-head">
                            <h2>"Últimas vendas"</h2>
                            <span class="link-muted">"Ver todas"</span>
                        </div>
                        <table class="table">
                            <thead>
                                <tr><th>"Data"</th><th>"Cliente"</th><th>"Valor"</th><th>"Status"</th></tr>
                            </thead>
                            <tbody>{sales_rows}</tbody>
                        </table>
                    </div>

                    <div class="card">
                        <div class="card-head">
                            <h2>"Movimentações"</h2>
                            <span class="link-muted">"Ver histórico"</span>
                        </div>
                        <table class="table">
                            <thead>
                                <tr><th>"Data"</th><th>"Tipo"</th><th>"Valor"</th><th>"Status"</th></tr>
                            </thead>
                            <tbody>{movement_rows}</tbody>
                        </table>
                    </div>
                </section>

                <footer class="page-footer">
                    <p class="muted small">"© 2025 SolutPag · Todos os direitos reservados"</p>
                </footer>
            </div>
        </main>
    }
}
