// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate relay configuration from .env files

use dotenv::dotenv;
use std::env;

/// Default upstream endpoint for the places-search provider
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Relay configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 3000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Places API Key, injected into every upstream call
    pub google_places_api_key: String,

    /// Base URL of the places-search provider
    pub places_base_url: String,

    /// Upper bound for one upstream call, in seconds
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            // The key name is shared with the web client's build environment
            google_places_api_key: env::var("VITE_GOOGLE_PLACES_API_KEY")
                .or_else(|_| env::var("GOOGLE_PLACES_API_KEY"))
                .unwrap_or_default(),

            places_base_url: env::var("PLACES_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PLACES_BASE_URL.to_string()),

            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures the relay can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.places_base_url.is_empty() {
            return Err("PLACES_BASE_URL must not be empty".to_string());
        }

        if self.upstream_timeout_secs == 0 {
            return Err("UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string());
        }

        if self.google_places_api_key.is_empty() {
            log::warn!("VITE_GOOGLE_PLACES_API_KEY not configured - upstream will reject requests");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 3000,
            environment: "test".to_string(),
            log_level: "info".to_string(),
            google_places_api_key: String::new(),
            places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
            upstream_timeout_secs: 10,
        }
    }

    #[test]
    fn test_missing_key_is_only_a_warning() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = sample();
        config.upstream_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let mut config = sample();
        config.places_base_url.clear();
        assert!(config.validate().is_err());
    }
}
