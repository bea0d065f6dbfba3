//! Shared domain enums: seasons, stay types, platforms

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// Pricing season, ordered from cheapest to most expensive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Low,
    Mid,
    High,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Low, Season::Mid, Season::High];

    /// The season directly below this one, if any
    pub fn previous(self) -> Option<Season> {
        match self {
            Season::Low => None,
            Season::Mid => Some(Season::Low),
            Season::High => Some(Season::Mid),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Season::Low => "Low season",
            Season::Mid => "Mid season",
            Season::High => "High season",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// StayType
// ---------------------------------------------------------------------------

/// Bookable stay length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StayType {
    /// Friday and Saturday nights
    Weekend,
    /// Friday to Sunday nights
    LongWeekend,
    /// Monday to Thursday nights
    Midweek,
    /// Seven nights
    Week,
}

impl StayType {
    pub const ALL: [StayType; 4] = [
        StayType::Weekend,
        StayType::LongWeekend,
        StayType::Midweek,
        StayType::Week,
    ];

    /// Stay types handled by the occupancy allocation solver, in booking priority order
    pub const ALLOCATED: [StayType; 3] = [StayType::Week, StayType::Weekend, StayType::Midweek];

    pub fn nights(self) -> u32 {
        match self {
            StayType::Weekend => 2,
            StayType::LongWeekend => 3,
            StayType::Midweek => 4,
            StayType::Week => 7,
        }
    }
}

impl std::fmt::Display for StayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StayType::Weekend => "Weekend",
            StayType::LongWeekend => "Long weekend",
            StayType::Midweek => "Midweek",
            StayType::Week => "Week",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Booking platform the property is listed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Booking,
    Airbnb,
    Natuurhuisje,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Booking, Platform::Airbnb, Platform::Natuurhuisje];
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Platform::Booking => "Booking",
            Platform::Airbnb => "Airbnb",
            Platform::Natuurhuisje => "Natuurhuisje",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// NightCategory
// ---------------------------------------------------------------------------

/// Night categories sharing one nightly price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NightCategory {
    MondayThursday,
    FridaySaturday,
    Sunday,
}

impl std::fmt::Display for NightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NightCategory::MondayThursday => "Monday-Thursday",
            NightCategory::FridaySaturday => "Friday-Saturday",
            NightCategory::Sunday => "Sunday",
        };
        write!(f, "{}", label)
    }
}
