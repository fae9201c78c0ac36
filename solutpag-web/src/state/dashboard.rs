//! Dashboard view state
//!
//! Starts from the mock fixtures and makes one reconciliation pass per mount. Leaving the page
//! aborts whatever is still in flight.

use leptos::prelude::*;
use shared::reconcile::{fetch_all_settled, DashboardState};
use web_sys::AbortController;

use crate::services::HttpDashboardSource;
use crate::utils::constants::api_config;

pub fn use_dashboard_state() -> ReadSignal<DashboardState> {
    let (state, set_state) = signal(DashboardState::default());

    let controller = match AbortController::new() {
        Ok(controller) => Some(controller),
        Err(e) => {
            log::warn!("[DASHBOARD] AbortController unavailable, requests cannot be cancelled: {:?}", e);
            None
        }
    };
    let abort_signal = controller.as_ref().map(AbortController::signal);

    let controller = StoredValue::new_local(controller);
    on_cleanup(move || {
        controller.try_with_value(|controller| {
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    });

    leptos::task::spawn_local(async move {
        let source = HttpDashboardSource::new(api_config(), abort_signal);
        let outcomes = fetch_all_settled(&source).await;
        if set_state.try_update(|state| state.apply(outcomes)).is_none() {
            log::debug!("[DASHBOARD] page left before the data arrived");
        }
    });

    state
}
