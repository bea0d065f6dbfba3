//! Data models for the pricing and concierge tools

pub mod allocation;
pub mod concierge;
pub mod enums;
pub mod pricing;
pub mod season;
pub mod validation;

// Re-export commonly used types
pub use allocation::{AllocationParams, AllocationResult, SeasonAllocation, SeasonProfile, StayRates};
pub use concierge::{ConciergeConfig, ConciergeNetAmounts, ConciergeResult, FeeModel, RevenueSummary};
pub use enums::{NightCategory, Platform, Season, StayType};
pub use pricing::{PricingConfig, PricingNetAmounts, PricingResult, StayPrice};
pub use season::{SeasonBudget, Seasonal};
pub use validation::{MessageLevel, ValidationMessage};
