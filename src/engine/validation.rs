//! Configuration checks (fatal) and business-rule checks (advisory)

use crate::{
    error::{AppError, AppResult},
    models::{
        ConciergeConfig, Platform, PricingConfig, Season, SeasonBudget, Seasonal, StayRates,
        StayType, ValidationMessage,
    },
};

const CONSISTENT: &str = "All prices are consistent.";

// ---------------------------------------------------------------------------
// Configuration checks
// ---------------------------------------------------------------------------

pub fn check_rounding_step(step: f64) -> AppResult<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(AppError::Configuration(format!(
            "Rounding step must be a positive number, got {}",
            step
        )));
    }
    Ok(())
}

/// Percentages that divide a price must stay strictly below 100
fn check_percent_below_100(name: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || !(0.0..100.0).contains(&value) {
        return Err(AppError::Configuration(format!(
            "{} must be between 0 and 100 (exclusive), got {}",
            name, value
        )));
    }
    Ok(())
}

pub fn check_pricing_config(config: &PricingConfig) -> AppResult<()> {
    check_rounding_step(config.rounding_step)?;
    for platform in Platform::ALL {
        check_percent_below_100(
            &format!("{} commission", platform),
            config.commissions.get(platform),
        )?;
    }
    check_percent_below_100("Midweek discount", config.discounts.midweek)?;
    check_percent_below_100("Week discount", config.discounts.week)?;
    Ok(())
}

pub fn check_target_fill(target_fill_percent: f64) -> AppResult<()> {
    if !target_fill_percent.is_finite() || !(0.0..=100.0).contains(&target_fill_percent) {
        return Err(AppError::Configuration(format!(
            "Target fill rate must be between 0 and 100, got {}",
            target_fill_percent
        )));
    }
    Ok(())
}

pub fn check_rates(name: &str, rates: &StayRates) -> AppResult<()> {
    for (stay, rate) in StayType::ALLOCATED.iter().zip([rates.week, rates.weekend, rates.midweek]) {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(AppError::Configuration(format!(
                "{} for {} must be between 0 and 1, got {}",
                name,
                stay.to_string().to_lowercase(),
                rate
            )));
        }
    }
    Ok(())
}

/// Days of all seasons together; a sum that does not fit a day count is rejected
pub fn check_total_days<'a>(budgets: impl IntoIterator<Item = &'a SeasonBudget>) -> AppResult<u32> {
    budgets
        .into_iter()
        .try_fold(0_u32, |total, budget| total.checked_add(budget.days))
        .ok_or_else(|| {
            AppError::Configuration(format!("Season days add up to more than {}", u32::MAX))
        })
}

pub fn check_concierge_config(config: &ConciergeConfig) -> AppResult<()> {
    if !config.management_fee_percent.is_finite()
        || !(0.0..=100.0).contains(&config.management_fee_percent)
    {
        return Err(AppError::Configuration(format!(
            "Management fee must be between 0 and 100, got {}",
            config.management_fee_percent
        )));
    }
    if !config.vat_rate.is_finite() || config.vat_rate < 0.0 {
        return Err(AppError::Configuration(format!(
            "VAT rate must be a non-negative fraction, got {}",
            config.vat_rate
        )));
    }
    check_target_fill(config.target_fill_percent)?;
    for (season, rates) in config.base_rates.iter() {
        check_rates(&format!("{} base rate", season), rates)?;
    }
    check_rates("Rate ceiling", &config.ceilings)?;
    check_total_days(config.calendar.iter().map(|(_, budget)| budget))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Business-rule checks
// ---------------------------------------------------------------------------

/// Season-over-season amounts must not decrease
fn check_season_progression(
    stay: StayType,
    amount: impl Fn(Season) -> f64,
    messages: &mut Vec<ValidationMessage>,
) {
    for season in [Season::Mid, Season::High] {
        let Some(previous) = season.previous() else {
            continue;
        };
        if amount(season) < amount(previous) {
            messages.push(ValidationMessage::warning(format!(
                "{} price for {} is lower than for {}.",
                stay,
                season.to_string().to_lowercase(),
                previous.to_string().to_lowercase()
            )));
        }
    }
}

pub fn check_pricing(config: &PricingConfig) -> Vec<ValidationMessage> {
    let mut messages = Vec::new();

    for (season, net) in config.net_amounts.iter() {
        if net.weekend <= config.cleaning_cost {
            messages.push(ValidationMessage::error(format!(
                "{}: the weekend price ({} €) must be higher than the cleaning cost ({} €).",
                season, net.weekend, config.cleaning_cost
            )));
        }
    }

    for stay in [StayType::Weekend, StayType::LongWeekend, StayType::Midweek] {
        check_season_progression(
            stay,
            |season| config.net_amounts.get(season).get(stay).unwrap_or_default(),
            &mut messages,
        );
    }

    if messages.is_empty() {
        messages.push(ValidationMessage::success(CONSISTENT));
    }
    messages
}

fn check_calendar(calendar: &Seasonal<SeasonBudget>, messages: &mut Vec<ValidationMessage>) {
    let days: u64 = calendar.iter().map(|(_, b)| u64::from(b.days)).sum();
    let slots: u64 = calendar.iter().map(|(_, b)| u64::from(b.weekend_slots)).sum();
    if days != u64::from(SeasonBudget::YEAR_DAYS) {
        messages.push(ValidationMessage::warning(format!(
            "Season days add up to {} instead of {}.",
            days,
            SeasonBudget::YEAR_DAYS
        )));
    }
    if slots != u64::from(SeasonBudget::YEAR_WEEKENDS) {
        messages.push(ValidationMessage::warning(format!(
            "Season weekends add up to {} instead of {}.",
            slots,
            SeasonBudget::YEAR_WEEKENDS
        )));
    }
}

pub fn check_concierge(config: &ConciergeConfig) -> Vec<ValidationMessage> {
    let mut messages = Vec::new();
    let cleaning = config.cleaning_cost();

    for (season, net) in config.net_amounts.iter() {
        if net.weekend <= cleaning {
            messages.push(ValidationMessage::error(format!(
                "{}: the weekend price ({} €) must be higher than the cleaning cost incl. VAT ({:.2} €).",
                season, net.weekend, cleaning
            )));
        }
    }

    for stay in StayType::ALL {
        check_season_progression(
            stay,
            |season| config.net_amounts.get(season).get(stay),
            &mut messages,
        );
    }

    check_calendar(&config.calendar, &mut messages);

    if messages.is_empty() {
        messages.push(ValidationMessage::success(CONSISTENT));
    }
    messages
}
