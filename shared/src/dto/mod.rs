//! # Data Transfer Objects (DTOs)
//!
//! Records exchanged with the (future) dashboard API and held as view state by the UI.
//!
//! ## Module Organization
//!
//! - [`dashboard`] - Account summary, sales series, last sales and movements
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (`availableBalanceCents`), snake_case in Rust
//! - **Money**: always integer cents
//! - **Decoding**: lenient. Responses are parsed into [`serde_json::Value`] first and each field
//!   is extracted on its own, falling back to the mock default when absent or mistyped.
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/dashboard/summary
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "availableBalanceCents": 125000,
//!   "lockedBalanceCents": 3000,
//!   "salesTodayCents": 48990,
//!   "transactionsCount": 17,
//!   "deltas": { "available": "+2,1% hoje", "locked": "-0,4% semana", "sales": "+8,0% vs. ontem", "tx": "+3,2% mês" }
//! }
//! ```
//!
//! ```text
//! GET /api/dashboard/last-sales?limit=10
//!
//! { "items": [ { "at": "19/09 10:15", "title": "Pedido #1234", "amountCents": 12000, "status": "paid" } ] }
//! ```

pub mod dashboard;

pub use dashboard::*;
