//! Text reports and CSV export

use std::fmt::{self, Write};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::{
    models::{
        pricing::{PlatformPrices, SeasonPrices},
        ConciergeConfig, ConciergeResult, NightCategory, Platform, PricingConfig, PricingResult,
        StayType,
    },
};

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid file name pattern"));

const CSV_HEADER: &str =
    "Season;Type;Day/Stay;Discount;Booking;Airbnb;Natuurhuisje;Net Booking;Net Airbnb;Net Natuurhuisje";

/// Whole euros
fn euros(value: f64) -> String {
    format!("{} €", value.round() as i64)
}

fn euros2(value: f64) -> String {
    format!("{:.2} €", value)
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}

fn banner(out: &mut String, property_name: &str) -> fmt::Result {
    let name = property_name.trim();
    if !name.is_empty() {
        writeln!(out, "{}", name.to_uppercase())?;
        writeln!(out, "{}\n", "=".repeat(50))?;
    }
    Ok(())
}

/// Run a writer against a fresh buffer; writing into a `String` never fails
fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    write(&mut out).ok();
    out
}

/// Same value on each platform, in column order
fn per_platform(season: &SeasonPrices, value: impl Fn(&PlatformPrices) -> f64) -> [f64; 3] {
    Platform::ALL.map(|platform| season.platform(platform).map(&value).unwrap_or_default())
}

fn nightly(prices: &PlatformPrices, category: NightCategory) -> f64 {
    match category {
        NightCategory::MondayThursday => prices.nightly.monday_thursday,
        NightCategory::FridaySaturday => prices.nightly.friday_saturday,
        NightCategory::Sunday => prices.nightly.sunday,
    }
}

const NIGHT_CATEGORIES: [NightCategory; 3] = [
    NightCategory::MondayThursday,
    NightCategory::FridaySaturday,
    NightCategory::Sunday,
];

fn stay_discount(config: &PricingConfig, stay: StayType) -> f64 {
    match stay {
        StayType::Midweek => config.discounts.midweek,
        StayType::Week => config.discounts.week,
        StayType::Weekend | StayType::LongWeekend => 0.0,
    }
}

fn platform_columns(values: [f64; 3]) -> String {
    format!(
        "Booking {:>8} | Airbnb {:>8} | Natuur. {:>8}",
        euros(values[0]),
        euros(values[1]),
        euros(values[2])
    )
}

/// Plain-text summary of the price table
pub fn pricing_report(config: &PricingConfig, result: &PricingResult) -> String {
    render(|out| write_pricing_report(out, config, result))
}

fn write_pricing_report(out: &mut String, config: &PricingConfig, result: &PricingResult) -> fmt::Result {
    banner(out, &config.property_name)?;

    writeln!(out, "PRICE SUMMARY")?;
    writeln!(out, "{}\n", "-".repeat(50))?;
    writeln!(out, "Cleaning (included in net amounts): {}", euros(config.cleaning_cost))?;
    writeln!(
        out,
        "Commissions: Booking {}%, Airbnb {}%, Natuurhuisje {}%",
        config.commissions.booking, config.commissions.airbnb, config.commissions.natuurhuisje
    )?;
    writeln!(
        out,
        "Discounts: Midweek {}%, Week {}%\n",
        config.discounts.midweek, config.discounts.week
    )?;

    for season in &result.seasons {
        writeln!(out, "{}", season.season.to_string().to_uppercase())?;
        writeln!(out, "{}", "-".repeat(30))?;

        writeln!(out, "\nNightly prices:")?;
        for category in NIGHT_CATEGORIES {
            let label = format!("{}:", category);
            let values = per_platform(season, |p| nightly(p, category));
            writeln!(out, "  {:<17} {}", label, platform_columns(values))?;
        }

        writeln!(out, "\nStay prices:")?;
        for stay in StayType::ALL {
            let label = format!("{}:", stay);
            let values = per_platform(season, |p| p.stays.get(stay).gross);
            write!(out, "  {:<13} {}", label, platform_columns(values))?;
            if matches!(stay, StayType::Midweek | StayType::Week) {
                write!(out, " (discount: {}%)", stay_discount(config, stay))?;
            }
            out.push('\n');
        }

        writeln!(out, "\nShort stay estimates (cleaning included):")?;
        for (index, label) in ["1 weekend night", "1 midweek night", "2 midweek nights", "3 midweek nights"]
            .into_iter()
            .enumerate()
        {
            write!(out, "  {:<16}", label)?;
            for (column, platform) in Platform::ALL.into_iter().enumerate() {
                let Some(prices) = season.platform(platform) else {
                    continue;
                };
                let estimate = prices.estimates.labelled()[index].1;
                let name = match platform {
                    Platform::Natuurhuisje => "Natuur.".to_string(),
                    other => other.to_string(),
                };
                if column > 0 {
                    out.push_str(" |");
                }
                write!(
                    out,
                    " {} {:>8} (net {:>8})",
                    name,
                    euros(estimate.gross),
                    euros(estimate.net)
                )?;
            }
            out.push('\n');
        }
        out.push('\n');
    }

    Ok(())
}

/// `;`-separated export of the price table
pub fn pricing_csv(config: &PricingConfig, result: &PricingResult, date: NaiveDate) -> String {
    render(|out| write_pricing_csv(out, config, result, date))
}

fn write_pricing_csv(
    out: &mut String,
    config: &PricingConfig,
    result: &PricingResult,
    date: NaiveDate,
) -> fmt::Result {
    let name = config.property_name.trim();
    if !name.is_empty() {
        writeln!(out, "Property;{}", name)?;
    }
    writeln!(out, "Date;{}", date.format("%Y-%m-%d"))?;
    writeln!(out, "Cleaning;{}", config.cleaning_cost)?;
    writeln!(out, "Midweek discount;{}%", config.discounts.midweek)?;
    writeln!(out, "Week discount;{}%\n", config.discounts.week)?;
    writeln!(out, "{}", CSV_HEADER)?;

    for season in &result.seasons {
        let label = season.season;

        for category in NIGHT_CATEGORIES {
            let [b, a, n] = per_platform(season, |p| nightly(p, category));
            writeln!(out, "{};Per night;{};;{};{};{};;;", label, category, b, a, n)?;
        }

        for stay in StayType::ALL {
            let [b, a, n] = per_platform(season, |p| p.stays.get(stay).gross);
            let [nb, na, nn] = per_platform(season, |p| p.stays.get(stay).net);
            writeln!(
                out,
                "{};Stay;{};{}%;{};{};{};{};{};{}",
                label,
                stay,
                stay_discount(config, stay),
                b,
                a,
                n,
                whole(nb),
                whole(na),
                whole(nn)
            )?;
        }

        for index in 0..4 {
            let estimate_label = season
                .platforms
                .first()
                .map(|p| p.estimates.labelled()[index].0)
                .unwrap_or_default();
            let [b, a, n] = per_platform(season, |p| p.estimates.labelled()[index].1.gross);
            let [nb, na, nn] = per_platform(season, |p| p.estimates.labelled()[index].1.net);
            writeln!(
                out,
                "{};Estimate;{};;{};{};{};{};{};{}",
                label,
                estimate_label,
                b,
                a,
                n,
                whole(nb),
                whole(na),
                whole(nn)
            )?;
        }
    }

    Ok(())
}

/// Filesystem-safe form of a property name: accents folded, any other
/// non-alphanumeric character replaced by `-`
pub fn sanitize_name(name: &str) -> String {
    let folded: String = name.nfd().filter(|c| !is_combining_mark(*c)).collect();
    NON_ALPHANUMERIC.replace_all(&folded, "-").into_owned()
}

pub fn csv_filename(property_name: &str, date: NaiveDate) -> String {
    let name = property_name.trim();
    let date = date.format("%Y-%m-%d");
    if name.is_empty() {
        return format!("gite-pricing-{}.csv", date);
    }
    format!("{}-{}.csv", sanitize_name(name), date)
}

/// Plain-text summary of the concierge fees and annual estimate
pub fn concierge_report(config: &ConciergeConfig, result: &ConciergeResult) -> String {
    render(|out| write_concierge_report(out, config, result))
}

fn write_concierge_report(
    out: &mut String,
    config: &ConciergeConfig,
    result: &ConciergeResult,
) -> fmt::Result {
    banner(out, &config.property_name)?;

    writeln!(out, "CONCIERGE SUMMARY")?;
    writeln!(out, "{}\n", "-".repeat(50))?;
    writeln!(
        out,
        "Cleaning: {}h x {} excl. VAT = {} incl. VAT",
        config.cleaning_hours,
        euros2(config.cleaning_hourly_rate),
        euros2(result.cleaning_cost)
    )?;
    writeln!(
        out,
        "Management fee: {}% excl. VAT (VAT {}%)\n",
        config.management_fee_percent,
        config.vat_rate * 100.0
    )?;

    for season in &result.fees {
        writeln!(out, "{}", season.season.to_string().to_uppercase())?;
        writeln!(out, "{}", "-".repeat(30))?;
        for (stay, fees) in season.by_stay() {
            writeln!(
                out,
                "  {:<8} received {:>12} | rent {:>12} | fee {:>10} | fees {:>10} | owner {:>12}",
                stay.to_string(),
                euros2(fees.received),
                euros2(fees.rent),
                euros2(fees.management_fee),
                euros2(fees.total_fees),
                euros2(fees.owner_earnings)
            )?;
        }
        out.push('\n');
    }

    let allocation = &result.allocation;
    writeln!(out, "ANNUAL ESTIMATE")?;
    writeln!(out, "{}", "-".repeat(30))?;
    writeln!(
        out,
        "Fill rate: {}% ({} nights out of {}, target {}%)",
        allocation.fill_percent,
        allocation.total_nights,
        allocation.total_days,
        allocation.target_fill_percent
    )?;
    for season in &allocation.seasons {
        writeln!(
            out,
            "  {:<12} {} weeks, {} weekends, {} midweeks: {} nights ({}%)",
            season.season.to_string(),
            season.weeks,
            season.weekends,
            season.midweeks,
            season.nights,
            season.fill_percent
        )?;
    }
    writeln!(out, "Owner revenue:   {}", euros(result.revenue.owner_revenue))?;
    writeln!(out, "Manager revenue: {}", euros(result.revenue.manager_revenue))?;
    writeln!(out, "Total revenue:   {}", euros(result.revenue.total_revenue))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compute_concierge, compute_prices};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Gîte du Moulin"), "Gite-du-Moulin");
        assert_eq!(sanitize_name("L'Été à Spa!"), "L-Ete-a-Spa-");
    }

    #[test]
    fn test_csv_filename() {
        assert_eq!(csv_filename("Gîte du Moulin", date()), "Gite-du-Moulin-2026-03-14.csv");
        assert_eq!(csv_filename("  ", date()), "gite-pricing-2026-03-14.csv");
    }

    #[test]
    fn test_pricing_csv() {
        let mut config = PricingConfig::factory_defaults();
        config.property_name = "Les Tilleuls".to_string();
        let result = compute_prices(&config).unwrap();
        let csv = pricing_csv(&config, &result, date());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Property;Les Tilleuls");
        assert_eq!(lines[1], "Date;2026-03-14");
        assert!(lines.contains(&CSV_HEADER));
        assert!(lines.contains(&"Low season;Per night;Friday-Saturday;;765;825;755;;;"));
        assert!(lines.contains(&"Low season;Stay;Weekend;0%;1730;1845;1705;1500;1500;1500"));
        assert!(lines.contains(&"Low season;Stay;Week;0%;3615;3855;3545;3136;3132;3120"));
        // 3 seasons x (3 nightly + 4 stays + 4 estimates)
        let rows = lines.iter().filter(|l| l.contains("season;")).count();
        assert_eq!(rows, 33);
    }

    #[test]
    fn test_pricing_report() {
        let mut config = PricingConfig::factory_defaults();
        config.property_name = "Les Tilleuls".to_string();
        let result = compute_prices(&config).unwrap();
        let report = pricing_report(&config, &result);

        assert!(report.starts_with("LES TILLEULS\n"));
        assert!(report.contains("LOW SEASON"));
        assert!(report.contains("Commissions: Booking 13.25%, Airbnb 18.76%, Natuurhuisje 12%"));
        assert!(report.contains("Booking    765 €"));
        assert!(report.contains("(discount: 0%)"));
    }

    #[test]
    fn test_unnamed_report_has_no_banner() {
        let config = PricingConfig::factory_defaults();
        let result = compute_prices(&config).unwrap();
        assert!(pricing_report(&config, &result).starts_with("PRICE SUMMARY"));
    }

    #[test]
    fn test_concierge_report() {
        let config = ConciergeConfig::factory_defaults();
        let result = compute_concierge(&config, 60).unwrap();
        let report = concierge_report(&config, &result);

        assert!(report.contains("211.75 € incl. VAT"));
        assert!(report.contains("Fill rate: 65% (236 nights out of 365, target 65%)"));
        assert!(report.contains("Total revenue:   139700 €"));
        assert!(report.contains("Manager revenue: 42849 €"));
    }
}
