//! Dashboard API client
//!
//! Implements [`DashboardSource`] over `fetch`. Requests carry credentials and share one
//! [`AbortSignal`], so aborting the owning controller cancels every request still in flight.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use shared::config::ApiConfig;
use shared::reconcile::{DashboardSource, Endpoint, FetchOutcome};
use shared::FetchError;
use web_sys::{AbortSignal, RequestCredentials};

pub struct HttpDashboardSource {
    config: ApiConfig,
    signal: Option<AbortSignal>,
}

impl HttpDashboardSource {
    pub fn new(config: ApiConfig, signal: Option<AbortSignal>) -> Self {
        Self { config, signal }
    }

    fn is_aborted(&self) -> bool {
        self.signal.as_ref().is_some_and(AbortSignal::aborted)
    }
}

#[async_trait(?Send)]
impl DashboardSource for HttpDashboardSource {
    async fn fetch_json(&self, endpoint: Endpoint) -> FetchOutcome<Value> {
        let url = self.config.url(endpoint);
        log::debug!("[DASHBOARD] GET {}", url);

        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(self.signal.as_ref())
            .send()
            .await
            .map_err(|e| {
                if self.is_aborted() {
                    FetchError::Aborted
                } else {
                    FetchError::Network(e.to_string())
                }
            })?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response.json::<Value>().await.map_err(|e| {
            if self.is_aborted() {
                FetchError::Aborted
            } else {
                FetchError::Decode(e.to_string())
            }
        })
    }
}
