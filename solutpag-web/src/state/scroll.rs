//! Smooth scrolling
//!
//! Components never reach for a global scroll handle: [`SmoothScrollProvider`] puts a
//! [`ScrollController`] into context and [`use_scroll`] hands it out.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::scroll::{InertialScroll, ScrollOptions, ScrollTarget, Tween};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, WheelEvent, Window};

use crate::utils::constants::FRAME_MS;

/// Pixels per line when the browser reports wheel deltas in lines.
const LINE_HEIGHT_PX: f64 = 16.0;

pub trait ScrollController: Send + Sync {
    fn scroll_to(&self, target: ScrollTarget, options: ScrollOptions);
}

/// Context handle for the app's scroll controller.
#[derive(Clone)]
pub struct ScrollContext(Arc<dyn ScrollController>);

impl ScrollContext {
    pub fn new(controller: Arc<dyn ScrollController>) -> Self {
        Self(controller)
    }

    pub fn scroll_to(&self, target: ScrollTarget, options: ScrollOptions) {
        self.0.scroll_to(target, options);
    }
}

pub fn use_scroll() -> ScrollContext {
    expect_context::<ScrollContext>()
}

/// Wraps the app: eased anchor jumps plus inertial wheel scrolling.
#[component]
pub fn SmoothScrollProvider(children: Children) -> impl IntoView {
    let scroller = WindowScroller::new();
    scroller.attach_wheel();
    provide_context(ScrollContext::new(Arc::new(scroller)));

    children()
}

struct ScrollerState {
    /// Bumped by every new animation; older loops see the change and stop.
    generation: AtomicU32,
    inertia_running: AtomicBool,
    inertia: Mutex<InertialScroll>,
}

/// [`ScrollController`] backed by `window.scrollTo`.
#[derive(Clone)]
pub struct WindowScroller {
    state: Arc<ScrollerState>,
}

impl WindowScroller {
    pub fn new() -> Self {
        let start = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        Self {
            state: Arc::new(ScrollerState {
                generation: AtomicU32::new(0),
                inertia_running: AtomicBool::new(false),
                inertia: Mutex::new(InertialScroll::new(start)),
            }),
        }
    }

    fn inertia(&self) -> MutexGuard<'_, InertialScroll> {
        match self.state.inertia.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn next_generation(&self) -> u32 {
        self.state.generation.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }

    fn is_current(&self, generation: u32) -> bool {
        self.state.generation.load(Ordering::SeqCst) == generation
    }

    fn attach_wheel(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let scroller = self.clone();
        let handler = Closure::<dyn FnMut(WheelEvent)>::new(move |ev: WheelEvent| {
            // ctrl+wheel is pinch-zoom
            if ev.ctrl_key() {
                return;
            }
            ev.prevent_default();
            let delta = match ev.delta_mode() {
                WheelEvent::DOM_DELTA_LINE => ev.delta_y() * LINE_HEIGHT_PX,
                _ => ev.delta_y(),
            };
            scroller.on_wheel(delta);
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            handler.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("[SCROLL] wheel listener not installed, native scrolling only: {:?}", e);
        }
        // The provider wraps the whole app, so the listener lives as long as the page.
        handler.forget();
    }

    fn on_wheel(&self, delta: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // A wheel turn cancels any anchor animation.
        self.next_generation();

        {
            let mut inertia = self.inertia();
            if !self.state.inertia_running.load(Ordering::SeqCst) {
                inertia.jump(window.scroll_y().unwrap_or(0.0));
            }
            inertia.push(delta, max_scroll(&window));
        }

        if self.state.inertia_running.swap(true, Ordering::SeqCst) {
            return;
        }

        let scroller = self.clone();
        leptos::task::spawn_local(async move {
            loop {
                let (y, settled) = {
                    let mut inertia = scroller.inertia();
                    let y = inertia.step();
                    (y, inertia.is_settled())
                };
                window.scroll_to_with_x_and_y(0.0, y);
                if settled {
                    break;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }
            scroller.state.inertia_running.store(false, Ordering::SeqCst);
        });
    }
}

impl Default for WindowScroller {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollController for WindowScroller {
    fn scroll_to(&self, target: ScrollTarget, options: ScrollOptions) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(destination) = resolve_target(&window, &target, options.offset) else {
            log::debug!("[SCROLL] target {:?} not found", target);
            return;
        };

        let generation = self.next_generation();
        let tween = Tween::new(window.scroll_y().unwrap_or(0.0), destination, &options);
        let scroller = self.clone();

        leptos::task::spawn_local(async move {
            let mut elapsed = 0.0;
            loop {
                if !scroller.is_current(generation) {
                    return;
                }
                window.scroll_to_with_x_and_y(0.0, tween.position(elapsed));
                if tween.is_finished(elapsed) {
                    break;
                }
                TimeoutFuture::new(FRAME_MS).await;
                elapsed += f64::from(FRAME_MS);
            }
            scroller.inertia().jump(destination);
        });
    }
}

fn resolve_target(window: &Window, target: &ScrollTarget, offset: f64) -> Option<f64> {
    match target {
        ScrollTarget::Top(y) => Some(y.max(0.0)),
        ScrollTarget::Anchor(selector) => {
            let element = window.document()?.query_selector(selector).ok().flatten()?;
            let top = element.get_bounding_client_rect().top();
            let y = top + window.scroll_y().unwrap_or(0.0) - offset;
            Some(y.clamp(0.0, max_scroll(window)))
        }
    }
}

/// Largest scroll offset the document allows.
pub fn max_scroll(window: &Window) -> f64 {
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (document_height - viewport_height).max(0.0)
}
