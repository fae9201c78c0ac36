//! Sale Page - PIX charge
//!
//! The amount field re-renders as currency on every keystroke. A valid amount opens a modal
//! with the charge payload, which can be copied to the clipboard.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::forms::{sale_amount_valid, SALE_MAX_CENTS, SALE_MIN_CENTS};
use shared::money::{format_brl, format_input, parse_cents, pix_payload};
use shared::routes::Route;
use wasm_bindgen_futures::JsFuture;

use crate::components::{Badge, Modal, PageHeader, Tone};
use crate::utils::constants::COPIED_RESET_MS;

#[component]
pub fn SalePage() -> impl IntoView {
    let (amount, set_amount) = signal(String::new());
    let (modal_open, set_modal_open) = signal(false);
    let (copied, set_copied) = signal(false);

    let cents = Memo::new(move |_| parse_cents(&amount.get()));
    let valid = Memo::new(move |_| sale_amount_valid(cents.get()));
    let payload = Memo::new(move |_| {
        if valid.get() {
            pix_payload(cents.get())
        } else {
            String::new()
        }
    });
    let out_of_bounds = move || !valid.get() && !amount.get().is_empty();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !valid.get_untracked() {
            return;
        }
        set_modal_open.set(true);
    };

    let copy_payload = move |_| {
        let text = payload.get_untracked();
        if text.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&text);
            match JsFuture::from(promise).await {
                Ok(_) => {
                    set_copied.try_set(true);
                    TimeoutFuture::new(COPIED_RESET_MS).await;
                    set_copied.try_set(false);
                }
                Err(e) => log::warn!("[SALE] clipboard write failed: {:?}", e),
            }
        });
    };

    view! {
        <main class="page">
            <div class="page-inner narrow">
                <PageHeader
                    icon="▦"
                    title="Venda via PIX"
                    subtitle="Receba pagamentos instantâneos"
                    back_href=Route::Dashboard.path()
                    back_label="Dashboard"
                />

                <section class="card">
                    <p class="lead">
                        "Informe o valor da venda entre "
                        <strong class="positive">{format_brl(SALE_MIN_CENTS)}</strong>
                        " e "
                        <strong class="positive">{format_brl(SALE_MAX_CENTS)}</strong>
                    </p>

                    <form class="form" on:submit=on_submit>
                        <div>
                            <label for="valor" class="label">"Valor da venda"</label>
                            <div class="amount-field" class:invalid=out_of_bounds>
                                <span class="amount-icon">"▦"</span>
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
                                <p class="field-error">"ⓘ Valor fora dos limites permitidos"</p>
                            </Show>
                        </div>

                        <div class="badges">
                            <Badge icon="⛨" tone=Tone::Blue>"Transação 100% segura"</Badge>
                            <Badge icon="⚡" tone=Tone::Emerald>"Confirmação instantânea"</Badge>
                            <Badge icon="✓" tone=Tone::Purple>"Sem taxas escondidas"</Badge>
                        </div>

                        <button type="submit" class="btn btn-primary btn-block" disabled=move || !valid.get()>
                            "Gerar QR Code PIX →"
                        </button>
                    </form>
                </section>

                <Modal open=modal_open>
                    <div class="modal-head">
                        <h2>"Pagamento PIX"</h2>
                        <button class="icon-btn" aria-label="Fechar" on:click=move |_| set_modal_open.set(false)>
                            "✕"
                        </button>
                    </div>

                    <div class="qr-box">
                        <div class="qr-placeholder">
                            <span class="qr-glyph">"▦"</span>
                            <p class="small">"QR Code PIX"</p>
                        </div>
                    </div>

                    <div class="center">
                        <p class="modal-amount">{move || amount.get()}</p>
                        <p class="muted small">"Valor para pagamento"</p>
                    </div>

                    <div class="pix-code">
                        <div class="pix-code-head">
                            <span class="muted small">"Código PIX"</span>
                            <button class="btn btn-small" on:click=copy_payload>
                                {move || if copied.get() { "Copiado!" } else { "Copiar" }}
                            </button>
                        </div>
                        <pre>{move || payload.get()}</pre>
                    </div>

                    <div class="modal-actions">
                        <button class="btn btn-outline">"⤓ Download QR"</button>
                        <button class="btn btn-primary" on:click=move |_| set_modal_open.set(false)>
                            "Concluir"
                        </button>
                    </div>
                </Modal>
            </div>
        </main>
    }
}
