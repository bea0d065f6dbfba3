//! Direct pricing tool models: configuration and per-platform price tables

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    enums::{Platform, Season, StayType},
    season::Seasonal,
    validation::ValidationMessage,
};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Commission percentage (0-100) charged by each platform
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CommissionRates {
    pub booking: f64,
    pub airbnb: f64,
    pub natuurhuisje: f64,
}

impl CommissionRates {
    pub fn get(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Booking => self.booking,
            Platform::Airbnb => self.airbnb,
            Platform::Natuurhuisje => self.natuurhuisje,
        }
    }
}

/// Stay-length discounts, identical for every season
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct StayDiscounts {
    /// Midweek discount percentage
    pub midweek: f64,
    /// Full-week discount percentage
    pub week: f64,
}

/// Amounts the owner wants to keep for one season.
/// The full week is always derived from the nightly prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PricingNetAmounts {
    pub weekend: f64,
    pub long_weekend: f64,
    pub midweek: f64,
}

impl PricingNetAmounts {
    /// Entered amount for a stay type; `None` for the derived full week
    pub fn get(&self, stay: StayType) -> Option<f64> {
        match stay {
            StayType::Weekend => Some(self.weekend),
            StayType::LongWeekend => Some(self.long_weekend),
            StayType::Midweek => Some(self.midweek),
            StayType::Week => None,
        }
    }
}

/// Direct pricing tool configuration.
///
/// Missing numeric fields deserialize to 0; the engine rejects the resulting
/// configuration when a zero is not meaningful (rounding step).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PricingConfig {
    pub property_name: String,
    /// Cleaning cost as displayed to the guest, included in every stay price
    pub cleaning_cost: f64,
    pub commissions: CommissionRates,
    /// Prices are rounded to the nearest multiple of this step
    pub rounding_step: f64,
    pub discounts: StayDiscounts,
    #[schema(value_type = Object)]
    pub net_amounts: Seasonal<PricingNetAmounts>,
}

impl PricingConfig {
    /// Settings a new property starts from
    pub fn factory_defaults() -> Self {
        Self {
            property_name: String::new(),
            cleaning_cost: 200.0,
            commissions: CommissionRates {
                booking: 13.25,
                airbnb: 18.76,
                natuurhuisje: 12.0,
            },
            rounding_step: 5.0,
            discounts: StayDiscounts::default(),
            net_amounts: Seasonal::new(
                PricingNetAmounts { weekend: 1500.0, long_weekend: 1800.0, midweek: 1500.0 },
                PricingNetAmounts { weekend: 1800.0, long_weekend: 2200.0, midweek: 1600.0 },
                PricingNetAmounts { weekend: 2000.0, long_weekend: 2500.0, midweek: 2000.0 },
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Nightly prices displayed on a platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NightlyPrices {
    pub monday_thursday: f64,
    pub friday_saturday: f64,
    pub sunday: f64,
}

/// Displayed and kept amounts for one stay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StayPrice {
    /// Displayed price, cleaning included
    pub gross: f64,
    /// Amount kept after commission
    pub net: f64,
    /// Discount percentage applied to this stay type
    pub discount_percent: f64,
    /// Undiscounted displayed price, kept only when a discount lowers the price
    pub theoretical_gross: Option<f64>,
}

impl StayPrice {
    pub fn undiscounted(gross: f64, net: f64) -> Self {
        Self {
            gross,
            net,
            discount_percent: 0.0,
            theoretical_gross: None,
        }
    }

    pub fn discounted(gross: f64, net: f64, discount_percent: f64, theoretical_gross: f64) -> Self {
        let theoretical_gross =
            (discount_percent > 0.0 && theoretical_gross > gross).then_some(theoretical_gross);
        Self {
            gross,
            net,
            discount_percent,
            theoretical_gross,
        }
    }

    /// Price before the stay discount (equal to `gross` without a discount)
    pub fn full_price(&self) -> f64 {
        self.theoretical_gross.unwrap_or(self.gross)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StayPrices {
    pub weekend: StayPrice,
    pub long_weekend: StayPrice,
    pub midweek: StayPrice,
    pub week: StayPrice,
}

impl StayPrices {
    pub fn get(&self, stay: StayType) -> &StayPrice {
        match stay {
            StayType::Weekend => &self.weekend,
            StayType::LongWeekend => &self.long_weekend,
            StayType::Midweek => &self.midweek,
            StayType::Week => &self.week,
        }
    }
}

/// Price estimate for a short stay outside the standard stay types
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShortStayEstimate {
    pub nights: u32,
    /// Displayed total, cleaning included
    pub gross: f64,
    pub net: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShortStayEstimates {
    pub one_night_weekend: ShortStayEstimate,
    pub one_night_midweek: ShortStayEstimate,
    pub two_nights_midweek: ShortStayEstimate,
    pub three_nights_midweek: ShortStayEstimate,
}

impl ShortStayEstimates {
    /// Estimates with their report labels, in display order
    pub fn labelled(&self) -> [(&'static str, &ShortStayEstimate); 4] {
        [
            ("1 weekend night", &self.one_night_weekend),
            ("1 midweek night", &self.one_night_midweek),
            ("2 midweek nights", &self.two_nights_midweek),
            ("3 midweek nights", &self.three_nights_midweek),
        ]
    }
}

/// Prices for one season on one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlatformPrices {
    pub platform: Platform,
    pub commission_percent: f64,
    pub nightly: NightlyPrices,
    pub stays: StayPrices,
    pub estimates: ShortStayEstimates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeasonPrices {
    pub season: Season,
    pub platforms: Vec<PlatformPrices>,
}

impl SeasonPrices {
    pub fn platform(&self, platform: Platform) -> Option<&PlatformPrices> {
        self.platforms.iter().find(|p| p.platform == platform)
    }
}

/// Full price table with advisory messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricingResult {
    pub seasons: Vec<SeasonPrices>,
    pub messages: Vec<ValidationMessage>,
}

impl PricingResult {
    pub fn season(&self, season: Season) -> Option<&SeasonPrices> {
        self.seasons.iter().find(|s| s.season == season)
    }

    pub fn prices(&self, season: Season, platform: Platform) -> Option<&PlatformPrices> {
        self.season(season).and_then(|s| s.platform(platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_net_amounts_default_to_zero() {
        let config: PricingConfig =
            serde_json::from_str(r#"{"rounding_step":5,"net_amounts":{"low":{"weekend":1500}}}"#).unwrap();

        assert_eq!(config.rounding_step, 5.0);
        assert_eq!(config.net_amounts.low.weekend, 1500.0);
        assert_eq!(config.net_amounts.low.midweek, 0.0);
        assert_eq!(config.net_amounts.mid, PricingNetAmounts::default());
        assert_eq!(config.net_amounts.high, PricingNetAmounts::default());
    }
}
