//! KYC Page - identity verification upload
//!
//! Each input owns a signal; [`KycForm`] is rebuilt from them to decide whether the form can
//! be sent. Files never leave the browser, only their names are kept.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::{Event, SubmitEvent};
use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::components::A;
use shared::forms::{
    AccountType, AddressFields, CompanyFields, IndividualFields, KycDocuments, KycForm, SubmitState,
    KYC_DELAY_MS,
};
use shared::routes::Route;
use web_sys::HtmlInputElement;

use crate::components::{Badge, Modal, PageHeader, Tone};

#[component]
fn Field(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] icon: &'static str,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    view! {
        <label class="field" class:wide=wide>
            <span class="label">{icon} " " {label}</span>
            <input class="input" placeholder=placeholder bind:value=value/>
        </label>
    }
}

#[component]
fn UploadBox(title: &'static str, icon: &'static str, file: RwSignal<Option<String>>) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();

    let pick = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };
    let on_change = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        file.set(input.files().and_then(|files| files.get(0)).map(|f| f.name()));
    };

    view! {
        <div class="upload card">
            <div class="upload-head">
                <span class="upload-icon">{icon}</span>
                <span class="upload-title">{title}</span>
            </div>
            <div class="upload-drop" class:has-file=move || file.with(Option::is_some) on:click=pick>
                {move || match file.get() {
                    Some(name) => view! {
                        <div class="center">
                            <div class="positive small">"✓ Documento carregado"</div>
                            <div class="muted small truncate">{name}</div>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="center">
                            <div class="upload-glyph">"⤒"</div>
                            <div class="muted small">"Clique para selecionar"</div>
                        </div>
                    }.into_any(),
                }}
            </div>
            <input node_ref=input_ref type="file" accept="image/*" hidden=true on:change=on_change/>
            <button type="button" class="btn btn-outline btn-block btn-small" on:click=pick>
                {move || if file.with(Option::is_some) { "Alterar arquivo" } else { "Selecionar arquivo" }}
            </button>
        </div>
    }
}

#[component]
pub fn KycPage() -> impl IntoView {
    let account_type = RwSignal::new(None::<AccountType>);

    let full_name = RwSignal::new(String::new());
    let cpf = RwSignal::new(String::new());
    let representative_cpf = RwSignal::new(String::new());
    let legal_name = RwSignal::new(String::new());
    let cnpj = RwSignal::new(String::new());

    let cep = RwSignal::new(String::new());
    let street = RwSignal::new(String::new());
    let number = RwSignal::new(String::new());
    let complement = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());

    let front = RwSignal::new(None::<String>);
    let back = RwSignal::new(None::<String>);
    let selfie = RwSignal::new(None::<String>);

    let submit = RwSignal::new(SubmitState::Idle);

    let can_send = Memo::new(move |_| {
        KycForm {
            account_type: account_type.get(),
            individual: IndividualFields {
                full_name: full_name.get(),
                cpf: cpf.get(),
                representative_cpf: representative_cpf.get(),
            },
            company: CompanyFields {
                legal_name: legal_name.get(),
                cnpj: cnpj.get(),
            },
            address: AddressFields {
                cep: cep.get(),
                street: street.get(),
                number: number.get(),
                complement: complement.get(),
                city: city.get(),
                state: state.get(),
            },
            documents: KycDocuments {
                front: front.get(),
                back: back.get(),
                selfie: selfie.get(),
            },
        }
        .can_submit()
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !can_send.get_untracked() || submit.try_update(|s| s.begin()) != Some(true) {
            return;
        }
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(KYC_DELAY_MS).await;
            if submit.try_update(|s| s.finish()).is_none() {
                log::debug!("[KYC] page left before the submission finished");
                return;
            }
            log::info!("[KYC] simulated submission completed");
        });
    };

    let type_button = move |kind: AccountType, icon: &'static str, label: &'static str| {
        view! {
            <button
                type="button"
                class="type-option"
                class:selected=move || account_type.get() == Some(kind)
                on:click=move |_| account_type.set(Some(kind))
            >
                <span class="type-icon">{icon}</span>
                <span>{label}</span>
            </button>
        }
    };

    let branch_fields = move || match account_type.get() {
        Some(AccountType::Individual) => view! {
            <div class="field-grid">
                <Field label="Nome completo" icon="👤" placeholder="Seu nome completo" value=full_name/>
                <Field label="CPF" icon="▤" placeholder="000.000.000-00" value=cpf/>
                <Field label="Repita o CPF" icon="▤" placeholder="000.000.000-00" value=representative_cpf/>
            </div>
        }
        .into_any(),
        Some(AccountType::Company) => view! {
            <div class="field-grid">
                <Field label="Razão social" icon="▤" placeholder="Razão social da empresa" value=legal_name/>
                <Field label="CNPJ" icon="▤" placeholder="00.000.000/0000-00" value=cnpj/>
            </div>
        }
        .into_any(),
        None => ().into_any(),
    };

    view! {
        <main class="page">
            <div class="page-inner">
                <PageHeader
                    icon="⛨"
                    title="Verificação de Conta"
                    subtitle="Complete sua verificação para acessar todos os recursos"
                    back_href=Route::Dashboard.path()
                    back_label="Voltar para Dashboard"
                />

                <section class="card">
                    <div class="alert alert-info">
                        <div class="alert-icon">"ⓘ"</div>
                        <div class="alert-body">
                            <p class="alert-title">"Verificação necessária"</p>
                            <p class="muted small">
                                "Complete a verificação KYC para liberar saques, aumentar limites e acessar todos os recursos da plataforma."
                            </p>
                        </div>
                    </div>

                    <form class="form" on:submit=on_submit>
                        <div>
                            <span class="label">"Tipo de conta"</span>
                            <div class="type-grid">
                                {type_button(AccountType::Individual, "👤", "Pessoa Física")}
                                {type_button(AccountType::Company, "▤", "Pessoa Jurídica")}
                            </div>
                        </div>

                        <Show when=move || account_type.with(Option::is_some)>
                            {branch_fields}

                            <div class="form-block">
                                <h3>"📍 Endereço"</h3>
                                <div class="field-grid">
                                    <Field label="CEP" icon="📍" placeholder="00000-000" value=cep/>
                                    <div class="field-grid three">
                                        <Field label="Número" placeholder="123" value=number/>
                                        <Field label="UF" placeholder="SP" value=state/>
                                        <Field label="Cidade" placeholder="São Paulo" value=city/>
                                    </div>
                                    <Field label="Endereço" icon="📍" placeholder="Rua, Avenida, etc." value=street wide=true/>
                                    <Field label="Complemento" placeholder="Apartamento, bloco, etc." value=complement wide=true/>
                                </div>
                            </div>

                            <div class="form-block">
                                <h3>"⤒ Documentos"</h3>
                                <div class="field-grid three">
                                    <UploadBox title="Documento (frente)" icon="▤" file=front/>
                                    <UploadBox title="Documento (verso)" icon="▤" file=back/>
                                    <UploadBox title="Selfie com documento" icon="📷" file=selfie/>
                                </div>
                            </div>

                            <div class="badges">
                                <Badge icon="⛨" tone=Tone::Blue>"Dados criptografados"</Badge>
                                <Badge icon="✓" tone=Tone::Emerald>"Análise em até 24h"</Badge>
                                <Badge icon="ⓘ" tone=Tone::Purple>"Ambiente seguro"</Badge>
                            </div>

                            <div class="form-actions">
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled=move || !can_send.get() || submit.get().is_submitting()
                                >
                                    {move || if submit.get().is_submitting() { "Enviando..." } else { "Enviar para análise →" }}
                                </button>
                                <A href=Route::Dashboard.path() attr:class="btn btn-outline">
                                    "Cancelar"
                                </A>
                            </div>
                        </Show>
                    </form>
                </section>

                <Modal open=Signal::derive(move || submit.get().is_success())>
                    <div class="success">
                        <div class="success-icon">"✓"</div>
                        <h2>"Verificação enviada!"</h2>
                        <p class="muted">
                            "Sua documentação foi recebida e será analisada em até 24 horas úteis."
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
