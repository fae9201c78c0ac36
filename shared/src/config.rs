//! # API Configuration
//!
//! The dashboard talks to `{API_BASE}/dashboard/...`. The base is configured at build time;
//! see `solutpag-web/src/utils/constants.rs` for where the UI reads it.

use crate::reconcile::Endpoint;

/// Base path used when none is configured.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl ApiConfig {
    /// Build a config from an optional base; blank values fall back to [`DEFAULT_API_BASE`].
    ///
    /// A trailing `/` is dropped so that `"/api/"` and `"/api"` build the same URLs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shared::config::ApiConfig;
    /// use shared::reconcile::Endpoint;
    ///
    /// let config = ApiConfig::new(Some("https://pay.example.com/api/"));
    /// assert_eq!(config.url(Endpoint::Summary), "https://pay.example.com/api/dashboard/summary");
    /// assert_eq!(ApiConfig::new(None).base(), "/api");
    /// ```
    pub fn new(base: Option<&str>) -> Self {
        let base = base
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        let base = base.strip_suffix('/').unwrap_or(base);
        Self {
            base: base.to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full URL of `endpoint`, including its query string.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base, endpoint.path_and_query())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        let config = ApiConfig::default();
        assert_eq!(config.url(Endpoint::SalesSeries), "/api/dashboard/sales-series?period=today");
        assert_eq!(config.url(Endpoint::LastSales), "/api/dashboard/last-sales?limit=10");
        assert_eq!(config.url(Endpoint::Movements), "/api/dashboard/movements?limit=10");
    }

    #[test]
    fn test_blank_base_uses_default() {
        assert_eq!(ApiConfig::new(Some("   ")).base(), DEFAULT_API_BASE);
        assert_eq!(ApiConfig::new(Some("")).base(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(ApiConfig::new(Some("/backend/")).base(), "/backend");
    }
}
