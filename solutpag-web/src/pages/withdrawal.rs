//! Withdrawal Page - PIX payout
//!
//! Quote math lives in [`WithdrawalQuote`]; this page only wires it to the input and walks the
//! simulated submission through confirm → processing → success.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::forms::{SubmitState, WithdrawalQuote, WITHDRAWAL_DELAY_MS, WITHDRAWAL_FEE_CENTS};
use shared::mock::WITHDRAWAL_AVAILABLE_CENTS;
use shared::money::{format_brl, format_input, parse_cents};
use shared::routes::Route;

use crate::components::{Badge, Kpi, Modal, PageHeader, Row, Tone};

#[component]
pub fn WithdrawalPage() -> impl IntoView {
    let (amount, set_amount) = signal(String::new());
    let (confirm_open, set_confirm_open) = signal(false);
    let submit = RwSignal::new(SubmitState::Idle);

    let quote = Memo::new(move |_| {
        WithdrawalQuote::new(
            parse_cents(&amount.get()),
            WITHDRAWAL_AVAILABLE_CENTS,
            WITHDRAWAL_FEE_CENTS,
        )
    });
    let valid = move || quote.get().valid;
    let out_of_bounds = move || !valid() && !amount.get().is_empty();
    let processing = move || submit.get().is_submitting();

    let requested = Signal::derive(move || format_brl(quote.get().amount));
    let fee = Signal::derive(move || format_brl(quote.get().fee));
    let net = Signal::derive(move || format_brl(quote.get().net));

    let on_confirm = move |_| {
        if submit.try_update(|s| s.begin()) != Some(true) {
            return;
        }
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(WITHDRAWAL_DELAY_MS).await;
            if submit.try_update(|s| s.finish()).is_none() {
                log::debug!("[WITHDRAWAL] page left before the payout finished");
                return;
            }
            set_confirm_open.try_set(false);
            log::info!("[WITHDRAWAL] simulated payout completed");
        });
    };

    let close_confirm = move |_| {
        if !submit.get_untracked().is_submitting() {
            set_confirm_open.set(false);
        }
    };

    view! {
        <main class="page">
            <div class="page-inner">
                <PageHeader
                    icon="💵"
                    title="Saque via PIX"
                    subtitle="Transfira seu saldo para sua conta com segurança"
                    back_href=Route::Dashboard.path()
                    back_label="Voltar para Dashboard"
                />

                <section class="kpi-grid three">
                    <Kpi label="Saldo disponível" icon="💵" tone=Tone::Blue value=format_brl(WITHDRAWAL_AVAILABLE_CENTS)/>
                    <Kpi label="Taxa por saque" icon="ⓘ" tone=Tone::Amber value=format_brl(WITHDRAWAL_FEE_CENTS)/>
                    <Kpi
                        label="Disponível para saque"
                        icon="✓"
                        tone=Tone::Emerald
                        value=Signal::derive(move || format_brl(quote.get().max_payable))
                    />
                </section>

                <section class="card">
                    <div class="alert alert-info">
                        <div class="alert-icon">"ⓘ"</div>
                        <div class="alert-body">
                            <p class="alert-title">"Pagamento automático"</p>
                            <p class="muted small">
                                "O saque será enviado automaticamente para a "
                                <strong>"Chave PIX do CPF"</strong>
                                " cadastrada em sua conta."
                            </p>
                        </div>
                    </div>

                    <div class="form">
                        <div>
                            <label for="valor" class="label">"Valor do saque"</label>
                            <div class="amount-field" class:invalid=out_of_bounds>
                                <span class="amount-icon">"💵"</span>
                                <input
                                    id="valor"
                                    placeholder="R$ 0,00"
                                    inputmode="numeric"
                                    autocomplete="off"
                                    prop:value=move || amount.get()
                                    on:input=move |ev| set_amount.set(format_input(&event_target_value(&ev)))
                                />
                            </div>
                            <Show when=out_of_bounds>
                                <p class="field-error">
                                    "ⓘ Valor deve ser maior que a taxa e dentro do limite disponível"
                                </p>
                            </Show>
                        </div>

                        <div class="summary">
                            <h3>"Resumo da transação"</h3>
                            <Row name="Valor do saque" value=requested/>
                            <Row name="Taxa de serviço" value=fee/>
                            <div class="divider"></div>
                            <Row name="Você receberá" value=net highlight=true/>
                            <Row name="Chave PIX de destino" value="CPF ***.***.***-**".to_string()/>
                        </div>

                        <div class="badges">
                            <Badge icon="⛨" tone=Tone::Blue>"Transferência 100% segura"</Badge>
                            <Badge icon="⚡" tone=Tone::Emerald>"Processamento instantâneo"</Badge>
                            <Badge icon="◷" tone=Tone::Purple>"Disponível em até 2h úteis"</Badge>
                        </div>

                        <button
                            class="btn btn-primary btn-block"
                            disabled=move || !valid()
                            on:click=move |_| set_confirm_open.set(true)
                        >
                            "Confirmar saque →"
                        </button>
                    </div>
                </section>

                <Modal open=confirm_open>
                    <div class="modal-head">
                        <h2>"Confirmar saque"</h2>
                        <button class="icon-btn" aria-label="Fechar" disabled=processing on:click=close_confirm>
                            "✕"
                        </button>
                    </div>
                    <div class="summary">
                        <h3>"Detalhes do saque"</h3>
                        <Row name="Valor solicitado" value=requested/>
                        <Row name="Taxa" value=fee/>
                        <Row name="Total a receber" value=net highlight=true/>
                        <Row name="Destino" value="Chave PIX (CPF)".to_string()/>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-outline" disabled=processing on:click=close_confirm>
                            "Cancelar"
                        </button>
                        <button class="btn btn-primary" disabled=processing on:click=on_confirm>
                            {move || if processing() { "Processando..." } else { "Confirmar saque" }}
                        </button>
                    </div>
                </Modal>

                <Modal open=Signal::derive(move || submit.get().is_success())>
                    <div class="success">
                        <div class="success-icon">"✓"</div>
                        <h2>"Saque realizado!"</h2>
                        <p class="muted">
                            "Seu saque de " <strong class="positive">{move || net.get()}</strong>
                            " foi processado e chegará em até 2 horas."
                        </p>
                        <button class="btn btn-primary btn-block" on:click=move |_| submit.update(SubmitState::reset)>
                            "Fechar"
                        </button>
                    </div>
                </Modal>
            </div>
        </main>
    }
}
