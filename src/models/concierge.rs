//! Concierge (management fee) tool models

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::{
    allocation::{AllocationResult, SeasonProfile, StayRates},
    enums::{Season, StayType},
    season::{calendar_or_standard, SeasonBudget, Seasonal},
    validation::ValidationMessage,
};

/// Belgian VAT applied on cleaning and management fees
pub const DEFAULT_VAT_RATE: f64 = 0.21;

/// Amounts the owner receives per booking, cleaning included
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ConciergeNetAmounts {
    pub weekend: f64,
    pub long_weekend: f64,
    pub midweek: f64,
    pub week: f64,
}

impl ConciergeNetAmounts {
    pub fn get(&self, stay: StayType) -> f64 {
        match stay {
            StayType::Weekend => self.weekend,
            StayType::LongWeekend => self.long_weekend,
            StayType::Midweek => self.midweek,
            StayType::Week => self.week,
        }
    }
}

/// Concierge tool configuration.
///
/// Owner-entered amounts default to 0 when missing; the calendar, base rates,
/// ceilings and VAT rate default to their standard values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ConciergeConfig {
    pub property_name: String,
    pub cleaning_hours: f64,
    /// Hourly cleaning rate, VAT excluded
    pub cleaning_hourly_rate: f64,
    /// Management fee on the rent, VAT excluded
    pub management_fee_percent: f64,
    pub vat_rate: f64,
    /// Targeted share of the year's days occupied, 0-100
    pub target_fill_percent: f64,
    #[schema(value_type = Object)]
    pub net_amounts: Seasonal<ConciergeNetAmounts>,
    #[serde(deserialize_with = "calendar_or_standard")]
    #[schema(value_type = Object)]
    pub calendar: Seasonal<SeasonBudget>,
    #[serde(deserialize_with = "base_rates_or_standard")]
    #[schema(value_type = Object)]
    pub base_rates: Seasonal<StayRates>,
    pub ceilings: StayRates,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            property_name: String::new(),
            cleaning_hours: 0.0,
            cleaning_hourly_rate: 0.0,
            management_fee_percent: 0.0,
            vat_rate: DEFAULT_VAT_RATE,
            target_fill_percent: 0.0,
            net_amounts: Seasonal::default(),
            calendar: SeasonBudget::standard_calendar(),
            base_rates: standard_base_rates(),
            ceilings: StayRates::uniform(1.0),
        }
    }
}

impl ConciergeConfig {
    /// Settings a new property starts from
    pub fn factory_defaults() -> Self {
        Self {
            cleaning_hours: 5.0,
            cleaning_hourly_rate: 35.0,
            management_fee_percent: 18.0,
            target_fill_percent: 65.0,
            net_amounts: Seasonal::new(
                ConciergeNetAmounts { weekend: 1500.0, long_weekend: 1800.0, midweek: 1500.0, week: 2500.0 },
                ConciergeNetAmounts { weekend: 1800.0, long_weekend: 2200.0, midweek: 1600.0, week: 3000.0 },
                ConciergeNetAmounts { weekend: 2000.0, long_weekend: 2500.0, midweek: 2000.0, week: 3500.0 },
            ),
            ..Self::default()
        }
    }

    /// Cleaning cost per booking, VAT included
    pub fn cleaning_cost(&self) -> f64 {
        self.cleaning_hours * self.cleaning_hourly_rate * (1.0 + self.vat_rate)
    }

    pub fn fee_model(&self) -> FeeModel {
        FeeModel {
            cleaning_cost: self.cleaning_cost(),
            management_fee_fraction: self.management_fee_percent / 100.0,
            vat_rate: self.vat_rate,
        }
    }

    pub fn season_profiles(&self) -> Seasonal<SeasonProfile> {
        self.calendar.map(|season, budget| SeasonProfile {
            budget: *budget,
            base_rates: *self.base_rates.get(season),
        })
    }
}

/// Baseline demand: weekends sell best, full weeks are rare outside high season
pub fn standard_base_rates() -> Seasonal<StayRates> {
    Seasonal::new(
        StayRates { week: 0.05, weekend: 0.70, midweek: 0.20 },
        StayRates { week: 0.15, weekend: 0.80, midweek: 0.30 },
        StayRates { week: 0.15, weekend: 1.00, midweek: 0.80 },
    )
}

/// `deserialize_with` target for base rates: missing seasons keep the standard rates
pub fn base_rates_or_standard<'de, D>(deserializer: D) -> Result<Seasonal<StayRates>, D::Error>
where
    D: Deserializer<'de>,
{
    Seasonal::deserialize_over(deserializer, standard_base_rates())
}

/// Fee parameters shared by the breakdown and the revenue aggregation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeModel {
    /// Cleaning cost per booking, VAT included
    pub cleaning_cost: f64,
    pub management_fee_fraction: f64,
    pub vat_rate: f64,
}

/// Split of one booking between the owner and the concierge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingFees {
    /// Received amount minus cleaning
    pub rent: f64,
    pub cleaning: f64,
    pub received: f64,
    /// Management fee, VAT included
    pub management_fee: f64,
    pub total_fees: f64,
    pub owner_earnings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeasonFees {
    pub season: Season,
    pub weekend: BookingFees,
    pub midweek: BookingFees,
    pub week: BookingFees,
}

impl SeasonFees {
    /// Breakdowns with their stay type, in display order
    pub fn by_stay(&self) -> [(StayType, &BookingFees); 3] {
        [
            (StayType::Weekend, &self.weekend),
            (StayType::Midweek, &self.midweek),
            (StayType::Week, &self.week),
        ]
    }
}

/// Annual revenue split
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RevenueSummary {
    pub owner_revenue: f64,
    pub manager_revenue: f64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConciergeResult {
    /// Cleaning cost per booking, VAT included
    pub cleaning_cost: f64,
    pub fees: Vec<SeasonFees>,
    pub allocation: AllocationResult,
    pub revenue: RevenueSummary,
    pub messages: Vec<ValidationMessage>,
}

impl ConciergeResult {
    pub fn season_fees(&self, season: Season) -> Option<&SeasonFees> {
        self.fees.iter().find(|f| f.season == season)
    }
}
