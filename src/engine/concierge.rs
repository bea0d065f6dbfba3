//! Concierge tool pipeline: fee breakdowns, allocation, revenue

use crate::{
    error::AppResult,
    models::{AllocationParams, ConciergeConfig, ConciergeResult},
};

use super::{
    allocation::allocate,
    fees::{aggregate_revenue, season_fees},
    validation::{check_concierge, check_concierge_config},
};

pub fn compute_concierge(config: &ConciergeConfig, max_iterations: u32) -> AppResult<ConciergeResult> {
    check_concierge_config(config)?;

    let model = config.fee_model();
    let params = AllocationParams {
        ceilings: config.ceilings,
        max_iterations,
    };
    let allocation = allocate(config.target_fill_percent, &config.season_profiles(), &params)?;
    let revenue = aggregate_revenue(&allocation, &config.net_amounts, &model);

    Ok(ConciergeResult {
        cleaning_cost: model.cleaning_cost,
        fees: season_fees(&config.net_amounts, &model),
        allocation,
        revenue,
        messages: check_concierge(config),
    })
}
