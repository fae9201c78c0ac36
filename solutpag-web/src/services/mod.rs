//! Network services

pub mod api;

pub use api::HttpDashboardSource;
