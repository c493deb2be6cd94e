// SPDX-License-Identifier: MIT

use fitmind::backend::BackendClient;
use fitmind::config::Config;

/// Check if a live backend is configured via environment variables.
#[allow(dead_code)]
pub fn backend_available() -> bool {
    std::env::var("FITMIND_E2E_ENDPOINT").is_ok() && std::env::var("FITMIND_E2E_PROJECT").is_ok()
}

/// Skip test with message if no live backend is configured.
#[macro_export]
macro_rules! require_backend {
    () => {
        if !crate::common::backend_available() {
            eprintln!("⚠️  Skipping: FITMIND_E2E_ENDPOINT / FITMIND_E2E_PROJECT not set");
            return;
        }
    };
}

/// Build a client against the configured live backend.
#[allow(dead_code)]
pub fn test_client() -> BackendClient {
    let config = Config {
        endpoint: std::env::var("FITMIND_E2E_ENDPOINT").expect("checked by require_backend"),
        project_id: std::env::var("FITMIND_E2E_PROJECT").expect("checked by require_backend"),
        recovery_url: "http://localhost:3000/reset".to_string(),
    };
    BackendClient::new(&config).expect("Failed to build backend client")
}

/// Unique suffix for test isolation across runs.
#[allow(dead_code)]
pub fn unique_suffix() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64
}
