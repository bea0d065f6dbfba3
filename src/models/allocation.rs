//! Occupancy allocation models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    enums::{Season, StayType},
    season::SeasonBudget,
};

/// Fraction (0-1) of a season's capacity filled per stay type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct StayRates {
    pub week: f64,
    pub weekend: f64,
    pub midweek: f64,
}

impl StayRates {
    pub fn uniform(rate: f64) -> Self {
        Self {
            week: rate,
            weekend: rate,
            midweek: rate,
        }
    }

    pub fn values(&self) -> [f64; 3] {
        [self.week, self.weekend, self.midweek]
    }

    /// Scale every rate by `factor`, capping each at its ceiling
    pub fn scaled(&self, factor: f64, ceilings: &StayRates) -> StayRates {
        StayRates {
            week: (self.week * factor).min(ceilings.week),
            weekend: (self.weekend * factor).min(ceilings.weekend),
            midweek: (self.midweek * factor).min(ceilings.midweek),
        }
    }
}

/// Budgets and baseline demand of one season
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonProfile {
    pub budget: SeasonBudget,
    pub base_rates: StayRates,
}

/// Solver tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationParams {
    /// Upper bound of every scaled rate
    pub ceilings: StayRates,
    pub max_iterations: u32,
}

impl Default for AllocationParams {
    fn default() -> Self {
        Self {
            ceilings: StayRates::uniform(1.0),
            max_iterations: 60,
        }
    }
}

/// Booking counts for one season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeasonAllocation {
    pub season: Season,
    pub weeks: u32,
    pub weekends: u32,
    pub midweeks: u32,
    /// Occupied nights, never above `days`
    pub nights: u32,
    pub days: u32,
    /// Occupied share of the season's days, 0-100
    pub fill_percent: u32,
}

impl SeasonAllocation {
    pub fn bookings(&self, stay: StayType) -> u32 {
        match stay {
            StayType::Week => self.weeks,
            StayType::Weekend => self.weekends,
            StayType::Midweek => self.midweeks,
            StayType::LongWeekend => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllocationResult {
    pub target_fill_percent: f64,
    pub target_nights: u32,
    pub total_days: u32,
    pub total_nights: u32,
    /// Occupied share of the whole year, 0-100
    pub fill_percent: u32,
    /// Factor applied to the base rates for the retained simulation
    pub scale_factor: f64,
    pub seasons: Vec<SeasonAllocation>,
}

impl AllocationResult {
    pub fn season(&self, season: Season) -> Option<&SeasonAllocation> {
        self.seasons.iter().find(|s| s.season == season)
    }

    pub fn total_bookings(&self, stay: StayType) -> u32 {
        self.seasons.iter().map(|s| s.bookings(stay)).sum()
    }
}
