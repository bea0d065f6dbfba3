//! Gîte Pricing
//!
//! Computes vacation-rental prices across seasons and booking platforms from
//! the amounts an owner wants to keep, and estimates the annual revenue split
//! of a concierge (property management) fee model. Served as a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build services over the given repository
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, &config.engine);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
