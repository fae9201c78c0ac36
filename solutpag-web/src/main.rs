//! SolutPag Web - Leptos Frontend
//!
//! Landing page, auth screens and the dashboard pages. All testable logic lives in `shared`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] SolutPag starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen shipped in index.html.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[APP] no document available");
        return;
    };

    let Some(loading_element) = document.get_element_by_id("leptos-loading") else {
        log::debug!("[APP] loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("[APP] failed to hide loading screen: {:?}", e);
        }
    }
    // Also set display:none as backup
    loading_element
        .set_attribute("style", "display: none !important;")
        .ok();
}
