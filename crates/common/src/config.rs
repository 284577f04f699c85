//! Application configuration

use std::env;

use tracing::warn;

const DEV_AUTH_SECRET: &str = "respira-dev-secret";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Key used to sign bearer tokens
    pub auth_secret: String,
    /// Number of tips returned when a random sample is requested without a count
    pub tips_count: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            auth_secret: env::var("AUTH_SECRET").unwrap_or_else(|_| {
                warn!("AUTH_SECRET not set, using the development secret");
                DEV_AUTH_SECRET.to_string()
            }),
            tips_count: env::var("TIPS_COUNT")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(3),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            auth_secret: DEV_AUTH_SECRET.to_string(),
            tips_count: 3,
        }
    }
}
