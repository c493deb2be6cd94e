// SPDX-License-Identifier: MIT

//! FitMind: application core for a mental + physical fitness companion
//!
//! This crate provides the backend-facing core of the app: authentication,
//! workout session running, progress persistence, rolling statistics, and
//! progress photo storage against a hosted document/file backend.

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod settings;
pub mod time_utils;

use backend::BackendClient;
use config::Config;
use error::Result;
use services::{AuthService, PhotoService, ProgressService};
use settings::SettingsStore;

/// Shared application state, built once at startup and handed to the UI
/// layer.
pub struct App {
    pub config: Config,
    pub auth: AuthService,
    pub progress: ProgressService,
    pub photos: PhotoService,
    pub settings: SettingsStore,
}

impl App {
    /// Wire up all services against one backend client.
    pub fn new(config: Config, settings_path: impl Into<std::path::PathBuf>) -> Result<Self> {
        let client = BackendClient::new(&config)?;
        Ok(Self {
            auth: AuthService::new(client.clone(), &config),
            progress: ProgressService::new(client.clone()),
            photos: PhotoService::new(client),
            settings: SettingsStore::new(settings_path),
            config,
        })
    }
}

/// Initialize structured logging. `RUST_LOG` overrides the defaults.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitmind=debug".parse().expect("static directive"))
                .add_directive("info".parse().expect("static directive")),
        )
        .with(format)
        .init();
}
