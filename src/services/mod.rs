//! Business logic services

pub mod concierge;
pub mod export;
pub mod pricing;
pub mod settings;
pub mod sync;

use crate::{config::EngineConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub pricing: pricing::PricingService,
    pub concierge: concierge::ConciergeService,
    pub settings: settings::SettingsService,
    pub sync: sync::SyncService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, engine_config: &EngineConfig) -> Self {
        let settings = settings::SettingsService::new(repository);
        let pricing = pricing::PricingService::new();

        Self {
            concierge: concierge::ConciergeService::new(engine_config),
            sync: sync::SyncService::new(settings.clone(), pricing.clone()),
            pricing,
            settings,
        }
    }
}
