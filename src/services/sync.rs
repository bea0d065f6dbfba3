//! Copy shared inputs between the pricing and concierge tools

use crate::{
    error::AppResult,
    models::{ConciergeConfig, Platform, PricingConfig, PricingResult},
};

use super::{pricing::PricingService, settings::SettingsService};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Concierge settings updated with the owner amounts of the pricing tool.
///
/// Cleaning hours are derived from the pricing cleaning cost at the
/// concierge's current hourly rate, or the factory rate when none is set.
/// The week amount is the Booking week net.
pub fn pricing_to_concierge(
    pricing: &PricingConfig,
    prices: &PricingResult,
    concierge: &ConciergeConfig,
) -> ConciergeConfig {
    let mut target = concierge.clone();
    target.property_name = pricing.property_name.clone();

    if target.cleaning_hourly_rate <= 0.0 {
        target.cleaning_hourly_rate = ConciergeConfig::factory_defaults().cleaning_hourly_rate;
    }
    let hourly_cost = target.cleaning_hourly_rate * (1.0 + target.vat_rate);
    if hourly_cost > 0.0 {
        target.cleaning_hours = round2(pricing.cleaning_cost / hourly_cost);
    }

    for (season, net) in pricing.net_amounts.iter() {
        let amounts = target.net_amounts.get_mut(season);
        amounts.weekend = net.weekend;
        amounts.long_weekend = net.long_weekend;
        amounts.midweek = net.midweek;
        if let Some(booking) = prices.prices(season, Platform::Booking) {
            amounts.week = booking.stays.week.net.round();
        }
    }

    target
}

/// Pricing settings updated with the owner amounts of the concierge tool
pub fn concierge_to_pricing(concierge: &ConciergeConfig, pricing: &PricingConfig) -> PricingConfig {
    let mut target = pricing.clone();
    target.property_name = concierge.property_name.clone();
    target.cleaning_cost = round2(concierge.cleaning_cost());

    for (season, net) in concierge.net_amounts.iter() {
        let amounts = target.net_amounts.get_mut(season);
        amounts.weekend = net.weekend;
        amounts.long_weekend = net.long_weekend;
        amounts.midweek = net.midweek;
    }

    target
}

#[derive(Clone)]
pub struct SyncService {
    settings: SettingsService,
    pricing: PricingService,
}

impl SyncService {
    pub fn new(settings: SettingsService, pricing: PricingService) -> Self {
        Self { settings, pricing }
    }

    /// Push the stored pricing inputs into the stored concierge settings
    pub async fn pricing_to_concierge(&self) -> AppResult<ConciergeConfig> {
        let pricing = self.settings.pricing().await?;
        let prices = self.pricing.recompute(&pricing)?;
        let concierge = self.settings.concierge().await?;

        let updated = pricing_to_concierge(&pricing, &prices, &concierge);
        self.settings.save_concierge(&updated).await?;

        tracing::info!(cleaning_hours = updated.cleaning_hours, "Pricing inputs copied to concierge");
        Ok(updated)
    }

    /// Push the stored concierge inputs into the stored pricing settings
    pub async fn concierge_to_pricing(&self) -> AppResult<PricingConfig> {
        let concierge = self.settings.concierge().await?;
        let pricing = self.settings.pricing().await?;

        let updated = concierge_to_pricing(&concierge, &pricing);
        self.settings.save_pricing(&updated).await?;

        tracing::info!(cleaning_cost = updated.cleaning_cost, "Concierge inputs copied to pricing");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::compute_prices, models::Season};

    #[test]
    fn test_pricing_to_concierge() {
        let mut pricing = PricingConfig::factory_defaults();
        pricing.property_name = "Gîte du Moulin".to_string();
        let prices = compute_prices(&pricing).unwrap();

        let concierge = pricing_to_concierge(&pricing, &prices, &ConciergeConfig::factory_defaults());

        assert_eq!(concierge.property_name, "Gîte du Moulin");
        assert_eq!(concierge.cleaning_hours, 4.72);
        assert_eq!(concierge.net_amounts.low.week, 3136.0);
        assert_eq!(concierge.net_amounts.mid.weekend, 1800.0);
        assert_eq!(concierge.cleaning_hourly_rate, 35.0);
    }

    #[test]
    fn test_zero_hourly_rate_uses_factory_rate() {
        let pricing = PricingConfig::factory_defaults();
        let prices = compute_prices(&pricing).unwrap();
        let mut concierge = ConciergeConfig::factory_defaults();
        concierge.cleaning_hourly_rate = 0.0;

        let updated = pricing_to_concierge(&pricing, &prices, &concierge);
        assert_eq!(updated.cleaning_hourly_rate, 35.0);
        assert_eq!(updated.cleaning_hours, 4.72);
    }

    #[test]
    fn test_concierge_to_pricing() {
        let mut concierge = ConciergeConfig::factory_defaults();
        concierge.net_amounts.high.long_weekend = 2600.0;
        let mut pricing = PricingConfig::factory_defaults();
        pricing.discounts.week = 10.0;

        let updated = concierge_to_pricing(&concierge, &pricing);

        assert_eq!(updated.cleaning_cost, 211.75);
        assert_eq!(updated.net_amounts.get(Season::High).long_weekend, 2600.0);
        assert_eq!(updated.discounts.week, 10.0);
        assert_eq!(updated.commissions, pricing.commissions);
    }
}
