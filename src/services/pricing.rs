//! Direct pricing service

use crate::{
    engine,
    error::AppResult,
    models::{MessageLevel, Platform, PricingConfig, PricingResult, Season},
};

#[derive(Clone, Default)]
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        Self
    }

    /// Recompute every price from a committed configuration
    pub fn recompute(&self, config: &PricingConfig) -> AppResult<PricingResult> {
        let result = engine::compute_prices(config).map_err(|e| {
            tracing::warn!("Pricing configuration rejected: {}", e);
            e
        })?;

        for message in result.messages.iter().filter(|m| m.level == MessageLevel::Error) {
            tracing::warn!("Pricing check: {}", message.text);
        }

        if let Some(low) = result.prices(Season::Low, Platform::Booking) {
            tracing::info!(
                property = %config.property_name,
                weekend = low.stays.weekend.gross,
                week = low.stays.week.gross,
                "Prices computed"
            );
        }

        Ok(result)
    }
}
