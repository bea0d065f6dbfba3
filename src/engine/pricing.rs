//! Direct pricing calculator
//!
//! Derives the displayed prices of every platform from the amounts the owner
//! wants to keep. Nightly prices are worked out from the weekend, long
//! weekend and midweek stays; the full week is then priced from the nights.

use crate::{
    error::AppResult,
    models::{
        pricing::{NightlyPrices, PlatformPrices, SeasonPrices, ShortStayEstimate, ShortStayEstimates, StayPrices},
        Platform, PricingConfig, PricingResult, Season, StayPrice,
    },
};

use super::{
    rounding::{gross_price, net_from_gross, round_to_step},
    validation::{check_pricing, check_pricing_config},
};

/// Compute the price table for every season and platform
pub fn compute_prices(config: &PricingConfig) -> AppResult<PricingResult> {
    check_pricing_config(config)?;

    let seasons = Season::ALL
        .into_iter()
        .map(|season| SeasonPrices {
            season,
            platforms: Platform::ALL
                .into_iter()
                .map(|platform| platform_prices(config, season, platform))
                .collect(),
        })
        .collect();

    Ok(PricingResult {
        seasons,
        messages: check_pricing(config),
    })
}

/// Prices of one season on one platform. The configuration must already be checked.
pub fn platform_prices(config: &PricingConfig, season: Season, platform: Platform) -> PlatformPrices {
    let commission_percent = config.commissions.get(platform);
    let commission = commission_percent / 100.0;
    let step = config.rounding_step;
    let cleaning = config.cleaning_cost;
    let net = config.net_amounts.get(season);
    let round = |value: f64| round_to_step(value, step);

    let weekend_gross = gross_price(net.weekend, commission, step);
    let long_weekend_gross = gross_price(net.long_weekend, commission, step);
    let midweek_gross = gross_price(net.midweek, commission, step);

    let friday_saturday = round((weekend_gross - cleaning) / 2.0);
    let sunday = round(long_weekend_gross - cleaning - 2.0 * friday_saturday);

    // The displayed midweek price is the discounted one; nights carry the full price
    let midweek_discount = config.discounts.midweek;
    let monday_thursday = if midweek_discount > 0.0 {
        round((midweek_gross - cleaning) / (1.0 - midweek_discount / 100.0) / 4.0)
    } else {
        round((midweek_gross - cleaning) / 4.0)
    };
    let midweek_theoretical = 4.0 * monday_thursday + cleaning;

    let week_discount = config.discounts.week;
    let week_nights = 2.0 * friday_saturday + 4.0 * monday_thursday + sunday;
    let discounted_nights = if week_discount > 0.0 {
        round(week_nights * (1.0 - week_discount / 100.0))
    } else {
        week_nights
    };
    let week_gross = discounted_nights + cleaning;
    let week_theoretical = week_nights + cleaning;

    let estimate = |nights: u32, nightly: f64| {
        let gross = nightly * f64::from(nights) + cleaning;
        ShortStayEstimate {
            nights,
            gross,
            net: net_from_gross(gross, commission),
        }
    };

    PlatformPrices {
        platform,
        commission_percent,
        nightly: NightlyPrices {
            monday_thursday,
            friday_saturday,
            sunday,
        },
        stays: StayPrices {
            weekend: StayPrice::undiscounted(weekend_gross, net.weekend),
            long_weekend: StayPrice::undiscounted(long_weekend_gross, net.long_weekend),
            midweek: StayPrice::discounted(midweek_gross, net.midweek, midweek_discount, midweek_theoretical),
            week: StayPrice::discounted(
                week_gross,
                net_from_gross(week_gross, commission),
                week_discount,
                week_theoretical,
            ),
        },
        estimates: ShortStayEstimates {
            one_night_weekend: estimate(1, friday_saturday),
            one_night_midweek: estimate(1, monday_thursday),
            two_nights_midweek: estimate(2, monday_thursday),
            three_nights_midweek: estimate(3, monday_thursday),
        },
    }
}
