//! Small building blocks shared by the dashboard pages.

use leptos::prelude::*;
use leptos_router::components::A;

/// Accent used by KPI icons and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Red,
    Emerald,
    Amber,
    Purple,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Blue => "tone-blue",
            Tone::Red => "tone-red",
            Tone::Emerald => "tone-emerald",
            Tone::Amber => "tone-amber",
            Tone::Purple => "tone-purple",
        }
    }
}

/// Figure card. The delta caption is optional (the withdrawal page has none).
#[component]
pub fn Kpi(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    icon: &'static str,
    tone: Tone,
    #[prop(optional, into)] delta: Option<Signal<String>>,
    #[prop(optional)] delta_positive: bool,
) -> impl IntoView {
    let delta_view = delta.map(|delta| {
        let arrow = if delta_positive { "↑" } else { "↓" };
        view! {
            <div class=crate::utils::format::delta_class(delta_positive)>
                <span class="kpi-delta-arrow">{arrow}</span>
                {move || delta.get()}
            </div>
        }
    });

    view! {
        <div class="card kpi">
            <div class="kpi-head">
                <div>
                    <div class="kpi-label">{label}</div>
                    <div class="kpi-value">{move || value.get()}</div>
                </div>
                <div class=format!("kpi-icon {}", tone.class())>{icon}</div>
            </div>
            {delta_view}
        </div>
    }
}

#[component]
pub fn Badge(icon: &'static str, tone: Tone, children: Children) -> impl IntoView {
    view! {
        <span class=format!("badge {}", tone.class())>
            <span>{icon}</span>
            {children()}
        </span>
    }
}

/// Label/value line of a summary box.
#[component]
pub fn Row(
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    view! {
        <div class="row" class:row-highlight=highlight>
            <span class="row-name">{name}</span>
            <span class="row-value">{move || value.get()}</span>
        </div>
    }
}

/// Centered dialog over a dimmed backdrop, mounted only while `open`.
#[component]
pub fn Modal(#[prop(into)] open: Signal<bool>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" role="dialog" aria-modal="true">
                <div class="modal card">{children()}</div>
            </div>
        </Show>
    }
}

/// Page title with an icon and a bordered "back" link.
#[component]
pub fn PageHeader(
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    back_href: &'static str,
    back_label: &'static str,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-title">
                <div class="page-icon">{icon}</div>
                <div>
                    <h1>{title}</h1>
                    <p class="muted">{subtitle}</p>
                </div>
            </div>
            <A href=back_href attr:class="btn btn-outline">
                "← " {back_label}
            </A>
        </header>
    }
}
