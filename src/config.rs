//! Application configuration loaded from environment variables.
//!
//! The app talks to a single hosted backend project; only the endpoint URL
//! and project identifier are required. Development fallbacks are baked in
//! so the app still starts (and logs a warning) without a configured
//! environment.

use std::env;

/// Development fallback endpoint.
const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";
/// Development placeholder project id, detected by `validate()`.
const DEFAULT_PROJECT_ID: &str = "your-project-id";
/// Where password-recovery links point during development.
const DEFAULT_RECOVERY_URL: &str = "http://localhost:3000/reset";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend service endpoint URL
    pub endpoint: String,
    /// Backend project identifier
    pub project_id: String,
    /// Redirect URL embedded in password-recovery emails
    pub recovery_url: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            project_id: "test-project".to_string(),
            recovery_url: DEFAULT_RECOVERY_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing values fall back to development defaults; misconfiguration
    /// is reported via `tracing::warn!`, never as a hard failure.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let config = Self {
            endpoint: env::var("FITMIND_ENDPOINT")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            project_id: env::var("FITMIND_PROJECT_ID")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| DEFAULT_PROJECT_ID.to_string()),
            recovery_url: env::var("FITMIND_RECOVERY_URL")
                .unwrap_or_else(|_| DEFAULT_RECOVERY_URL.to_string()),
        };

        let missing = config.validate();
        if !missing.is_empty() {
            tracing::warn!(
                missing = ?missing,
                "Backend configuration incomplete, using development fallbacks"
            );
        }

        config
    }

    /// Names of configuration values that are absent or still placeholders.
    pub fn validate(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.endpoint.is_empty() {
            missing.push("FITMIND_ENDPOINT");
        }
        if self.project_id.is_empty() || self.project_id.contains("your-") {
            missing.push("FITMIND_PROJECT_ID");
        }
        missing
    }
}
