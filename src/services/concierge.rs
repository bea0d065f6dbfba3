//! Concierge service

use crate::{
    config::EngineConfig,
    engine,
    error::AppResult,
    models::{
        AllocationParams, AllocationResult, ConciergeConfig, ConciergeResult, MessageLevel, Seasonal, SeasonProfile,
        StayRates,
    },
};

#[derive(Clone)]
pub struct ConciergeService {
    max_iterations: u32,
}

impl ConciergeService {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
        }
    }

    /// Recompute fees, allocation and revenue from a committed configuration
    pub fn recompute(&self, config: &ConciergeConfig) -> AppResult<ConciergeResult> {
        let result = engine::compute_concierge(config, self.max_iterations).map_err(|e| {
            tracing::warn!("Concierge configuration rejected: {}", e);
            e
        })?;

        for message in result.messages.iter().filter(|m| m.level == MessageLevel::Error) {
            tracing::warn!("Concierge check: {}", message.text);
        }

        tracing::info!(
            property = %config.property_name,
            target = config.target_fill_percent,
            nights = result.allocation.total_nights,
            total = result.revenue.total_revenue,
            manager = result.revenue.manager_revenue,
            "Concierge revenue computed"
        );

        Ok(result)
    }

    /// Run the allocation solver alone
    pub fn allocate(
        &self,
        target_fill_percent: f64,
        profiles: &Seasonal<SeasonProfile>,
        ceilings: StayRates,
    ) -> AppResult<AllocationResult> {
        let params = AllocationParams {
            ceilings,
            max_iterations: self.max_iterations,
        };
        let result = engine::allocate(target_fill_percent, profiles, &params)?;

        tracing::info!(
            target_nights = result.target_nights,
            nights = result.total_nights,
            scale = result.scale_factor,
            "Allocation computed"
        );
        Ok(result)
    }
}
