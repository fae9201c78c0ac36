//! # Dashboard Reconciliation
//!
//! The dashboard renders mock data immediately, then makes one best-effort pass to replace it
//! with server data:
//!
//! 1. [`fetch_all_settled`] issues the four [`Endpoint`] requests concurrently and waits for
//!    all of them. A failing request never short-circuits the others.
//! 2. Each raw outcome is decoded into its field group, still as a [`FetchOutcome`].
//! 3. [`DashboardState::apply`] replaces every field group whose outcome succeeded and leaves
//!    the others exactly as they were.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn run(source: impl shared::reconcile::DashboardSource) {
//! use shared::reconcile::{fetch_all_settled, DashboardState};
//!
//! let mut state = DashboardState::default(); // mock data
//! let outcomes = fetch_all_settled(&source).await;
//! state.apply(outcomes);
//! # }
//! ```

use async_trait::async_trait;
use serde_json::Value;

use crate::chart;
use crate::dto::{self, AccountSummary, MovementRecord, SaleRecord};
use crate::error::FetchError;
use crate::mock;

/// Success with data, or failure with the reason.
pub type FetchOutcome<T> = Result<T, FetchError>;

/// The four dashboard resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Summary,
    SalesSeries,
    LastSales,
    Movements,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Summary,
        Endpoint::SalesSeries,
        Endpoint::LastSales,
        Endpoint::Movements,
    ];

    /// Path (with query) relative to the API base.
    pub fn path_and_query(&self) -> &'static str {
        match self {
            Endpoint::Summary => "/dashboard/summary",
            Endpoint::SalesSeries => "/dashboard/sales-series?period=today",
            Endpoint::LastSales => "/dashboard/last-sales?limit=10",
            Endpoint::Movements => "/dashboard/movements?limit=10",
        }
    }
}

/// Where dashboard JSON comes from.
///
/// Implementations report transport failures, non-OK statuses, aborts and unparseable bodies
/// as [`FetchError`]s; they never panic. `?Send` so browser futures qualify.
#[async_trait(?Send)]
pub trait DashboardSource {
    async fn fetch_json(&self, endpoint: Endpoint) -> FetchOutcome<Value>;
}

/// Settled, decoded outcome of each request.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOutcomes {
    pub summary: FetchOutcome<AccountSummary>,
    pub series: FetchOutcome<Vec<f64>>,
    pub last_sales: FetchOutcome<Vec<SaleRecord>>,
    pub movements: FetchOutcome<Vec<MovementRecord>>,
}

impl DashboardOutcomes {
    /// Decode raw JSON outcomes into their field groups.
    pub fn decode(
        summary: FetchOutcome<Value>,
        series: FetchOutcome<Value>,
        last_sales: FetchOutcome<Value>,
        movements: FetchOutcome<Value>,
    ) -> Self {
        Self {
            summary: summary.map(|body| dto::decode_summary(&body)),
            series: series.and_then(|body| dto::decode_series(&body)),
            last_sales: last_sales.and_then(|body| dto::decode_sales(&body)),
            movements: movements.and_then(|body| dto::decode_movements(&body)),
        }
    }
}

/// Run the four requests concurrently and wait until every one has settled.
pub async fn fetch_all_settled<S>(source: &S) -> DashboardOutcomes
where
    S: DashboardSource + ?Sized,
{
    let (summary, series, last_sales, movements) = futures::join!(
        source.fetch_json(Endpoint::Summary),
        source.fetch_json(Endpoint::SalesSeries),
        source.fetch_json(Endpoint::LastSales),
        source.fetch_json(Endpoint::Movements),
    );

    DashboardOutcomes::decode(summary, series, last_sales, movements)
}

/// View state of the dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub summary: AccountSummary,
    /// `None` until a server series arrives; the chart then draws the static waveform.
    pub series: Option<Vec<f64>>,
    pub last_sales: Vec<SaleRecord>,
    pub movements: Vec<MovementRecord>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            summary: mock::summary(),
            series: None,
            last_sales: mock::last_sales(),
            movements: mock::movements(),
        }
    }
}

impl DashboardState {
    /// Merge settled outcomes: each field group is replaced wholesale on success and left
    /// untouched on failure.
    pub fn apply(&mut self, outcomes: DashboardOutcomes) {
        merge_if_success(&mut self.summary, outcomes.summary, Endpoint::Summary);
        merge_if_success(&mut self.last_sales, outcomes.last_sales, Endpoint::LastSales);
        merge_if_success(&mut self.movements, outcomes.movements, Endpoint::Movements);

        match outcomes.series {
            Ok(points) => self.series = Some(points),
            Err(err) => log_failure(Endpoint::SalesSeries, &err),
        }
    }

    /// Polyline points for the sales chart.
    pub fn chart_points(&self) -> String {
        chart::chart_points(self.series.as_deref())
    }
}

fn merge_if_success<T>(slot: &mut T, outcome: FetchOutcome<T>, endpoint: Endpoint) {
    match outcome {
        Ok(value) => *slot = value,
        Err(err) => log_failure(endpoint, &err),
    }
}

fn log_failure(endpoint: Endpoint, err: &FetchError) {
    log::debug!(
        "[DASHBOARD] keeping previous data for {}: {}",
        endpoint.path_and_query(),
        err
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    use crate::chart::STATIC_POLYLINE;
    use crate::dto::SaleStatus;

    /// Answers each endpoint from a canned table and records what was requested.
    struct StubSource {
        responses: HashMap<Endpoint, FetchOutcome<Value>>,
        requested: RefCell<Vec<Endpoint>>,
    }

    impl StubSource {
        fn new(responses: Vec<(Endpoint, FetchOutcome<Value>)>) -> Self {
            Self {
                responses: responses.into_iter().collect(),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn healthy() -> Self {
            Self::new(vec![
                (Endpoint::Summary, Ok(json!({ "availableBalanceCents": 125000, "transactionsCount": 4 }))),
                (Endpoint::SalesSeries, Ok(json!({ "points": [0, 10, 5] }))),
                (
                    Endpoint::LastSales,
                    Ok(json!({ "items": [{ "at": "20/09 08:00", "title": "Pedido #2000", "amountCents": 4500, "status": "pending" }] })),
                ),
                (
                    Endpoint::Movements,
                    Ok(json!({ "items": [{ "at": "20/09 07:00", "kind": "Depósito", "amountCents": 9000, "status": "Concluído" }] })),
                ),
            ])
        }

        fn with(mut self, endpoint: Endpoint, outcome: FetchOutcome<Value>) -> Self {
            self.responses.insert(endpoint, outcome);
            self
        }
    }

    #[async_trait(?Send)]
    impl DashboardSource for StubSource {
        async fn fetch_json(&self, endpoint: Endpoint) -> FetchOutcome<Value> {
            self.requested.borrow_mut().push(endpoint);
            self.responses
                .get(&endpoint)
                .cloned()
                .unwrap_or(Err(FetchError::Network("unreachable".into())))
        }
    }

    fn reconcile(source: &StubSource) -> DashboardState {
        let mut state = DashboardState::default();
        state.apply(block_on(fetch_all_settled(source)));
        state
    }

    #[test]
    fn test_initial_state_is_mock() {
        let state = DashboardState::default();
        assert_eq!(state.summary, mock::summary());
        assert_eq!(state.last_sales, mock::last_sales());
        assert_eq!(state.movements, mock::movements());
        assert_eq!(state.chart_points(), STATIC_POLYLINE);
    }

    #[test]
    fn test_all_four_endpoints_are_requested() {
        let source = StubSource::healthy();
        reconcile(&source);
        let mut requested = source.requested.borrow().clone();
        requested.sort_by_key(|e| e.path_and_query());
        let mut expected = Endpoint::ALL.to_vec();
        expected.sort_by_key(|e| e.path_and_query());
        assert_eq!(requested, expected);
    }

    #[test]
    fn test_every_group_updates_on_success() {
        let state = reconcile(&StubSource::healthy());
        assert_eq!(state.summary.available_balance_cents, 125000);
        assert_eq!(state.summary.transactions_count, 4);
        assert_eq!(state.chart_points(), "0,200 360,0 720,100");
        assert_eq!(state.last_sales.len(), 1);
        assert_eq!(state.last_sales[0].status, SaleStatus::Pending);
        assert_eq!(state.movements[0].amount_cents, 9000);
    }

    #[test]
    fn test_series_failure_keeps_fallback_chart_only() {
        let source = StubSource::healthy().with(Endpoint::SalesSeries, Err(FetchError::Status(500)));
        let state = reconcile(&source);

        assert_eq!(state.summary.available_balance_cents, 125000);
        assert_eq!(state.chart_points(), STATIC_POLYLINE);
        assert_eq!(state.last_sales[0].title, "Pedido #2000");
        assert_eq!(state.movements[0].kind, "Depósito");
    }

    #[test]
    fn test_summary_failure_keeps_mock_summary() {
        let source = StubSource::healthy().with(Endpoint::Summary, Err(FetchError::Network("offline".into())));
        let state = reconcile(&source);

        assert_eq!(state.summary, mock::summary());
        assert_eq!(state.chart_points(), "0,200 360,0 720,100");
    }

    #[test]
    fn test_malformed_payloads_never_partially_overwrite() {
        let source = StubSource::healthy()
            .with(Endpoint::LastSales, Ok(json!({ "items": [] })))
            .with(Endpoint::Movements, Ok(json!({ "items": "nope" })))
            .with(Endpoint::SalesSeries, Ok(json!({ "points": [3] })));
        let state = reconcile(&source);

        assert_eq!(state.last_sales, mock::last_sales());
        assert_eq!(state.movements, mock::movements());
        assert_eq!(state.series, None);
    }

    #[test]
    fn test_everything_failing_renders_mocks() {
        let source = StubSource::new(vec![]);
        assert_eq!(reconcile(&source), DashboardState::default());
    }

    #[test]
    fn test_aborted_requests_leave_state_alone() {
        let source = StubSource::new(
            Endpoint::ALL.iter().map(|e| (*e, Err(FetchError::Aborted))).collect(),
        );
        assert_eq!(reconcile(&source), DashboardState::default());
    }

    #[test]
    fn test_apply_keeps_previous_server_data_on_later_failure() {
        let mut state = reconcile(&StubSource::healthy());
        let failing = DashboardOutcomes::decode(
            Err(FetchError::Aborted),
            Err(FetchError::Aborted),
            Err(FetchError::Aborted),
            Err(FetchError::Aborted),
        );
        let before = state.clone();
        state.apply(failing);
        assert_eq!(state, before);
    }
}
