//! Pure calculation engine: no I/O, no shared state

pub mod allocation;
pub mod concierge;
pub mod fees;
pub mod pricing;
pub mod rounding;
pub mod validation;

pub use allocation::allocate;
pub use concierge::compute_concierge;
pub use fees::{aggregate_revenue, fee_breakdown, season_fees};
pub use pricing::compute_prices;
