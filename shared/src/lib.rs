//! # SolutPag Shared Library
//!
//! The platform-independent core of the SolutPag website. Everything with testable semantics
//! lives here so it compiles and tests natively; the Leptos front end (`solutpag-web`) only
//! renders what these modules compute.
//!
//! ## Structure
//!
//! - **[`money`]**: integer-cents parsing and `R$` formatting
//! - **[`chart`]**: SVG polyline points for the sales chart
//! - **[`dto`]**: dashboard records and their lenient JSON decoding
//! - **[`mock`]**: fixtures rendered until the server answers
//! - **[`reconcile`]**: the all-settled fetch pass and the merge-if-success reducer
//! - **[`forms`]**: submit-enabled predicates and the simulated submission state machine
//! - **[`routes`]**: the client-side routing table
//! - **[`scroll`]**: easing, inertial scrolling and the header hide rule
//! - **[`config`]**: API base configuration
//! - **[`error`]**: [`FetchError`]
//!
//! ## Usage
//!
//! ```rust
//! use shared::money::{format_brl, parse_cents};
//! use shared::forms::sale_amount_valid;
//!
//! let cents = parse_cents("R$ 120,00");
//! assert!(sale_amount_valid(cents));
//! assert_eq!(format_brl(cents), "R$ 120,00");
//! ```

pub mod chart;
pub mod config;
pub mod dto;
pub mod error;
pub mod forms;
pub mod mock;
pub mod money;
pub mod reconcile;
pub mod routes;
pub mod scroll;

pub use error::FetchError;
pub use money::Cents;
pub use reconcile::{DashboardSource, DashboardState, Endpoint, FetchOutcome};
