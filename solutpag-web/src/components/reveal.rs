//! Scroll-triggered reveal
//!
//! Children start faded out and slide in the first time they enter the viewport. Once shown
//! they stay shown; the observer disconnects after the first hit.

use js_sys::Array;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Share of the element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.15;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[component]
pub fn Reveal(
    children: Children,
    /// Stagger, applied as a CSS transition delay.
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move || {
        let Some(element) = node_ref.get() else {
            return;
        };
        if observer.with_value(Option::is_some) {
            return;
        }

        let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let hit = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .any(|entry| entry.is_intersecting());
            if hit {
                set_visible.set(true);
                observer.disconnect();
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(io) => {
                io.observe(&element);
                observer.set_value(Some((io, callback)));
            }
            Err(e) => {
                // Without an observer the content would stay hidden forever.
                log::debug!("[REVEAL] IntersectionObserver unavailable: {:?}", e);
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.try_with_value(|slot| {
            if let Some((io, _)) = slot {
                io.disconnect();
            }
        });
    });

    view! {
        <div
            node_ref=node_ref
            class="reveal"
            class:is-visible=move || visible.get()
            style=format!("transition-delay: {}ms;", delay_ms)
        >
            {children()}
        </div>
    }
}
