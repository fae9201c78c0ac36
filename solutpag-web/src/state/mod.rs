//! Page and app state

pub mod dashboard;
pub mod scroll;
