//! Occupancy allocation solver
//!
//! Finds how many weeks, weekends and midweeks each season must sell to reach
//! a target fill rate. Every season starts from its baseline demand rates; a
//! single scale factor applied to all of them is searched by bisection until
//! the simulated nights match the target.
//!
//! Bookings are placed by priority inside each season: weeks first, then
//! weekends in the remaining weekend slots, then midweeks in the days left.

use crate::{
    error::{AppError, AppResult},
    models::{
        AllocationParams, AllocationResult, Season, SeasonAllocation, SeasonBudget, SeasonProfile,
        Seasonal, StayRates, StayType,
    },
};

use super::validation::{check_rates, check_target_fill, check_total_days};

/// Find the booking counts whose nights come closest to `target_fill_percent`
pub fn allocate(
    target_fill_percent: f64,
    profiles: &Seasonal<SeasonProfile>,
    params: &AllocationParams,
) -> AppResult<AllocationResult> {
    check_target_fill(target_fill_percent)?;
    for (season, profile) in profiles.iter() {
        check_rates(&format!("{} base rate", season), &profile.base_rates)?;
    }
    check_rates("Rate ceiling", &params.ceilings)?;
    if params.max_iterations == 0 {
        return Err(AppError::Configuration(
            "Solver needs at least one iteration".to_string(),
        ));
    }

    let total_days = check_total_days(profiles.iter().map(|(_, p)| &p.budget))?;
    let target_nights = (f64::from(total_days) * target_fill_percent / 100.0).round() as u32;

    let mut lo = 0.0_f64;
    let mut hi = upper_scale_bound(profiles);
    let mut best: Option<(i64, f64, Vec<SeasonAllocation>)> = None;

    for iteration in 0..params.max_iterations {
        let scale = (lo + hi) / 2.0;
        let seasons = simulate(profiles, scale, &params.ceilings);
        let nights = total_nights(&seasons);
        let diff = i64::from(nights) - i64::from(target_nights);

        tracing::debug!(iteration, scale, nights, target_nights, "Allocation step");

        let better = match &best {
            None => true,
            Some((best_diff, _, _)) => {
                diff.abs() < best_diff.abs()
                    || (diff.abs() == best_diff.abs() && diff >= 0 && *best_diff < 0)
            }
        };
        if better {
            best = Some((diff, scale, seasons));
        }

        match diff {
            d if d < 0 => lo = scale,
            d if d > 0 => hi = scale,
            _ => break,
        }
    }

    let (scale_factor, seasons) = match best {
        Some((_, scale, seasons)) => (scale, seasons),
        None => (0.0, simulate(profiles, 0.0, &params.ceilings)),
    };
    let total_nights = total_nights(&seasons);

    Ok(AllocationResult {
        target_fill_percent,
        target_nights,
        total_days,
        total_nights,
        fill_percent: percent(total_nights, total_days),
        scale_factor,
        seasons,
    })
}

/// Scale at which the least demanded stay type reaches saturation, with margin
fn upper_scale_bound(profiles: &Seasonal<SeasonProfile>) -> f64 {
    let min_rate = profiles
        .iter()
        .flat_map(|(_, p)| p.base_rates.values())
        .filter(|rate| *rate > 0.0)
        .fold(None, |min: Option<f64>, rate| Some(min.map_or(rate, |m| m.min(rate))));

    let saturation = min_rate.map_or(1.0, |rate| (1.0 / rate).ceil());
    saturation + 2.0
}

fn simulate(profiles: &Seasonal<SeasonProfile>, scale: f64, ceilings: &StayRates) -> Vec<SeasonAllocation> {
    profiles
        .iter()
        .map(|(season, profile)| {
            simulate_season(season, &profile.budget, &profile.base_rates.scaled(scale, ceilings))
        })
        .collect()
}

fn total_nights(seasons: &[SeasonAllocation]) -> u32 {
    seasons.iter().map(|s| s.nights).sum()
}

fn percent(nights: u32, days: u32) -> u32 {
    if days == 0 {
        return 0;
    }
    (f64::from(nights) / f64::from(days) * 100.0).round() as u32
}

fn round_count(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Place bookings in one season for the given rates
pub fn simulate_season(season: Season, budget: &SeasonBudget, rates: &StayRates) -> SeasonAllocation {
    let days = budget.days;
    let slots = budget.weekend_slots;

    let weeks = round_count(f64::from(slots) * rates.week).min(days / StayType::Week.nights());
    let remaining_slots = slots.saturating_sub(weeks);
    let days_after_weeks = days - weeks * StayType::Week.nights();

    let weekends = round_count(f64::from(remaining_slots) * rates.weekend)
        .min(remaining_slots)
        .min(days_after_weeks / StayType::Weekend.nights());

    let midweek_capacity =
        (days_after_weeks - weekends * StayType::Weekend.nights()) / StayType::Midweek.nights();
    let midweeks = round_count(f64::from(midweek_capacity) * rates.midweek).min(midweek_capacity);

    let nights = weeks * StayType::Week.nights()
        + weekends * StayType::Weekend.nights()
        + midweeks * StayType::Midweek.nights();

    SeasonAllocation {
        season,
        weeks,
        weekends,
        midweeks,
        nights,
        days,
        fill_percent: percent(nights, days).min(100),
    }
}
