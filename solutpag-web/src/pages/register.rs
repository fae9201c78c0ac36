//! Register Page
//!
//! Inline errors come from [`RegisterForm`]; the submission itself is simulated.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use shared::forms::{RegisterForm, SubmitState, REGISTER_DELAY_MS};
use shared::routes::Route;

/// Clear every field once the simulated sign-up finishes. Returns `false` when the page was left
/// during the delay and its signals are already disposed.
fn reset_after_register(
    form: RwSignal<RegisterForm>,
    submit: RwSignal<SubmitState>,
    show_password: WriteSignal<bool>,
    show_confirm: WriteSignal<bool>,
) -> bool {
    if form.try_update(|f| *f = RegisterForm::default()).is_none() {
        return false;
    }
    show_password.try_set(false);
    show_confirm.try_set(false);
    submit
        .try_update(|s| {
            s.finish();
            s.reset();
        })
        .is_some()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let (show_password, set_show_password) = signal(false);
    let (show_confirm, set_show_confirm) = signal(false);
    let submit = RwSignal::new(SubmitState::Idle);

    let password_error = move || form.with(RegisterForm::password_error);
    let confirm_error = move || form.with(RegisterForm::confirm_error);
    let loading = move || submit.get().is_submitting();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(RegisterForm::can_submit) || submit.try_update(|s| s.begin()) != Some(true) {
            return;
        }
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(REGISTER_DELAY_MS).await;

            if let Err(e) = window().alert_with_message("Cadastro realizado com sucesso!") {
                log::debug!("[REGISTER] alert failed: {:?}", e);
            }

            if !reset_after_register(form, submit, set_show_password, set_show_confirm) {
                log::debug!("[REGISTER] page left before the submission finished");
            }
        });
    };

    view! {
        <section class="auth-page">
            <A href=Route::Landing.path() attr:class="btn btn-outline back-button">
                "← Voltar"
            </A>

            <div class="auth-card card">
                <div class="auth-brand">
                    <div class="brand">
                        <span class="brand-solut">"Solut"</span>
                        <span class="brand-pag">"Pag"</span>
                    </div>
                    <h1>"Crie sua conta"</h1>
                    <p class="muted small">"Junte-se a milhares de empresários que confiam na SolutPag"</p>
                </div>

                <form class="form" novalidate=true on:submit=on_submit>
                    <div>
                        <label for="name" class="label">"Nome completo"</label>
                        <div class="input-shell">
                            <span class="input-icon">"👤"</span>
                            <input
                                id="name"
                                placeholder="Seu nome completo"
                                autocomplete="name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div>
                        <label for="email" class="label">"Email"</label>
                        <div class="input-shell">
                            <span class="input-icon">"✉"</span>
                            <input
                                id="email"
                                type="email"
                                placeholder="seu@email.com"
                                autocomplete="email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div>
                        <label for="password" class="label">"Senha"</label>
                        <div class="input-shell" class:invalid=move || password_error().is_some()>
                            <span class="input-icon">"🔒"</span>
                            <input
                                id="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Crie uma senha segura"
                                autocomplete="new-password"
                                aria-describedby="pwd-error"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="icon-btn"
                                aria-label=move || if show_password.get() { "Ocultar senha" } else { "Mostrar senha" }
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        <div id="pwd-error" class="field-error" aria-live="polite">
                            {move || password_error().unwrap_or_default()}
                        </div>
                    </div>

                    <div>
                        <label for="confirm" class="label">"Confirmar senha"</label>
                        <div class="input-shell" class:invalid=move || confirm_error().is_some()>
                            <span class="input-icon">"🔒"</span>
                            <input
                                id="confirm"
                                type=move || if show_confirm.get() { "text" } else { "password" }
                                placeholder="Confirme sua senha"
                                autocomplete="new-password"
                                aria-describedby="confirm-error"
                                prop:value=move || form.with(|f| f.confirm.clone())
                                on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="icon-btn"
                                aria-label=move || if show_confirm.get() { "Ocultar senha" } else { "Mostrar senha" }
                                on:click=move |_| set_show_confirm.update(|v| *v = !*v)
                            >
                                {move || if show_confirm.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        <div id="confirm-error" class="field-error" aria-live="polite">
                            {move || confirm_error().unwrap_or_default()}
                        </div>
                    </div>

                    <label class="terms">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.terms_accepted)
                            on:change=move |ev| form.update(|f| f.terms_accepted = event_target_checked(&ev))
                        />
                        <span class="muted small">
                            "Concordo com os "
                            <a href="/terms" class="link">"Termos de Serviço"</a>
                            " e "
                            <a href="/privacy" class="link">"Política de Privacidade"</a>
                        </span>
                    </label>

                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || !form.with(RegisterForm::can_submit) || loading()
                    >
                        {move || if loading() { "Criando conta..." } else { "Criar conta →" }}
                    </button>
                </form>

                <p class="muted small center">
                    "Já tem uma conta? "
                    <A href=Route::Login.path() attr:class="link">"Entrar"</A>
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitting(
        owner: &Owner,
    ) -> (RwSignal<RegisterForm>, RwSignal<SubmitState>, WriteSignal<bool>, WriteSignal<bool>) {
        owner.with(|| {
            let form = RwSignal::new(RegisterForm {
                name: "Ana Souza".to_string(),
                email: "ana@solutpag.com".to_string(),
                password: "segredo123".to_string(),
                confirm: "segredo123".to_string(),
                terms_accepted: true,
            });
            let submit = RwSignal::new(SubmitState::Submitting);
            let (_, set_show_password) = signal(true);
            let (_, set_show_confirm) = signal(true);
            (form, submit, set_show_password, set_show_confirm)
        })
    }

    #[test]
    fn test_reset_empties_the_form() {
        let owner = Owner::new();
        let (form, submit, set_show_password, set_show_confirm) = submitting(&owner);

        assert!(reset_after_register(form, submit, set_show_password, set_show_confirm));
        assert_eq!(form.get_untracked(), RegisterForm::default());
        assert_eq!(submit.get_untracked(), SubmitState::Idle);
    }

    #[test]
    fn test_reset_after_leaving_the_page_does_not_panic() {
        let owner = Owner::new();
        let (form, submit, set_show_password, set_show_confirm) = submitting(&owner);
        owner.cleanup();

        assert!(!reset_after_register(form, submit, set_show_password, set_show_confirm));
    }
}
