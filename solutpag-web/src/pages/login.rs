//! Login Page
//!
//! No auth backend yet: submitting waits, stores the demo session token according to the
//! remember-me choice, shows an alert and clears the credentials.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use shared::forms::{LoginForm, SubmitState, LOGIN_DELAY_MS, PASSWORD_TOO_SHORT};
use shared::routes::{Route, FORGOT_PASSWORD_PATH};

use crate::utils::storage::{load_remember, persist_session};

/// Post-delay half of a submission: clear the credentials and re-arm the form. Returns `false`
/// when the page was left during the delay and its signals are already disposed.
fn reset_after_login(
    form: RwSignal<LoginForm>,
    submit: RwSignal<SubmitState>,
    show_password: WriteSignal<bool>,
) -> bool {
    if form.try_update(LoginForm::clear_credentials).is_none() {
        return false;
    }
    show_password.try_set(false);
    submit
        .try_update(|s| {
            s.finish();
            s.reset();
        })
        .is_some()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm {
        remember: load_remember(),
        ..LoginForm::default()
    });
    let (show_password, set_show_password) = signal(false);
    let submit = RwSignal::new(SubmitState::Idle);

    let too_short = move || form.with(LoginForm::password_too_short);
    let loading = move || submit.get().is_submitting();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(LoginForm::can_submit) || submit.try_update(|s| s.begin()) != Some(true) {
            return;
        }
        let remember = form.with_untracked(|f| f.remember);
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(LOGIN_DELAY_MS).await;

            persist_session(remember);
            if let Err(e) = window().alert_with_message("Login realizado com sucesso!") {
                log::debug!("[LOGIN] alert failed: {:?}", e);
            }

            if !reset_after_login(form, submit, set_show_password) {
                log::debug!("[LOGIN] page left before the submission finished");
            }
        });
    };

    let go_back = move |_| {
        if let Err(e) = window().history().and_then(|h| h.back()) {
            log::debug!("[LOGIN] history back failed: {:?}", e);
        }
    };

    view! {
        <section class="auth-page">
            <button class="btn btn-outline back-button" aria-label="Voltar" on:click=go_back>
                "← Voltar"
            </button>

            <div class="auth-card card">
                <div class="auth-brand">
                    <div class="brand">
                        <span class="brand-solut">"Solut"</span>
                        <span class="brand-pag">"Pag"</span>
                    </div>
                    <h1>"Bem-vindo de volta"</h1>
                    <p class="muted small">"Acesse sua conta para gerenciar seus recebimentos"</p>
                </div>

                <form class="form" novalidate=true on:submit=on_submit>
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
                        <div class="input-shell" class:invalid=too_short>
                            <span class="input-icon">"🔒"</span>
                            <input
                                id="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Sua senha"
                                autocomplete="current-password"
                                aria-describedby="pwd-error"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="icon-btn"
                                aria-label=move || if show_password.get() { "Ocultar senha" } else { "Mostrar senha" }
                                aria-pressed=move || show_password.get().to_string()
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        <div id="pwd-error" class="field-error" aria-live="polite">
                            {move || if too_short() { PASSWORD_TOO_SHORT } else { "" }}
                        </div>
                    </div>

                    <div class="form-row">
                        <button
                            type="button"
                            class="remember"
                            class:active=move || form.with(|f| f.remember)
                            aria-pressed=move || form.with(|f| f.remember).to_string()
                            title="Permanece logado mesmo após fechar o navegador"
                            on:click=move |_| form.update(|f| f.remember = !f.remember)
                        >
                            <span class="remember-dot"></span>
                            "Manter conectado"
                        </button>
                        <a href=FORGOT_PASSWORD_PATH class="link">"Esqueceu a senha?"</a>
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || !form.with(LoginForm::can_submit) || loading()
                    >
                        {move || if loading() { "Entrando..." } else { "Entrar →" }}
                    </button>
                </form>

                <p class="muted small center">
                    "Não tem uma conta? "
                    <A href=Route::Register.path() attr:class="link">"Criar conta"</A>
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitting(owner: &Owner) -> (RwSignal<LoginForm>, RwSignal<SubmitState>, WriteSignal<bool>) {
        owner.with(|| {
            let form = RwSignal::new(LoginForm {
                email: "ana@solutpag.com".to_string(),
                password: "segredo123".to_string(),
                remember: true,
            });
            let submit = RwSignal::new(SubmitState::Submitting);
            let (_, set_show_password) = signal(true);
            (form, submit, set_show_password)
        })
    }

    #[test]
    fn test_reset_clears_credentials_and_keeps_remember() {
        let owner = Owner::new();
        let (form, submit, set_show_password) = submitting(&owner);

        assert!(reset_after_login(form, submit, set_show_password));
        let form = form.get_untracked();
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert!(form.remember);
        assert_eq!(submit.get_untracked(), SubmitState::Idle);
    }

    #[test]
    fn test_reset_after_leaving_the_page_does_not_panic() {
        let owner = Owner::new();
        let (form, submit, set_show_password) = submitting(&owner);
        owner.cleanup();

        assert!(!reset_after_login(form, submit, set_show_password));
    }
}
