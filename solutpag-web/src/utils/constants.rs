//! Application constants

use shared::config::ApiConfig;

/// API base baked in at build time (`SOLUTPAG_API_BASE=https://... trunk build`).
pub const API_BASE: Option<&str> = option_env!("SOLUTPAG_API_BASE");

pub fn api_config() -> ApiConfig {
    ApiConfig::new(API_BASE)
}

// Browser storage keys
pub const REMEMBER_KEY: &str = "solutpag.remember";
pub const TOKEN_KEY: &str = "auth:token";
pub const DEMO_TOKEN: &str = "demo-token";

// UI constants
pub const COPIED_RESET_MS: u32 = 2000;
pub const FRAME_MS: u32 = 16;
pub const SUPPORT_EMAIL: &str = "contato@solutpag.com";
pub const SUPPORT_PHONE: &str = "+55 (24) 99999-9999";
