//! Concierge fee breakdown and annual revenue aggregation

use crate::models::{
    concierge::{BookingFees, SeasonFees},
    AllocationResult, ConciergeNetAmounts, FeeModel, RevenueSummary, Seasonal, StayType,
};

/// Split one booking's received amount between cleaning, the management fee
/// and the owner. Fees carry VAT; the rent is the received amount minus cleaning.
pub fn fee_breakdown(received: f64, model: &FeeModel) -> BookingFees {
    let cleaning = model.cleaning_cost;
    let rent = received - cleaning;
    let management_fee = rent * model.management_fee_fraction * (1.0 + model.vat_rate);
    let total_fees = management_fee + cleaning;

    BookingFees {
        rent,
        cleaning,
        received,
        management_fee,
        total_fees,
        owner_earnings: received - total_fees,
    }
}

/// Breakdowns for the weekend, midweek and week stays of every season
pub fn season_fees(net_amounts: &Seasonal<ConciergeNetAmounts>, model: &FeeModel) -> Vec<SeasonFees> {
    net_amounts
        .iter()
        .map(|(season, net)| SeasonFees {
            season,
            weekend: fee_breakdown(net.weekend, model),
            midweek: fee_breakdown(net.midweek, model),
            week: fee_breakdown(net.week, model),
        })
        .collect()
}

/// Sum owner and manager shares over every booking of the allocation
pub fn aggregate_revenue(
    allocation: &AllocationResult,
    net_amounts: &Seasonal<ConciergeNetAmounts>,
    model: &FeeModel,
) -> RevenueSummary {
    let mut summary = RevenueSummary::default();

    for season in &allocation.seasons {
        let net = net_amounts.get(season.season);
        for stay in StayType::ALLOCATED {
            let count = season.bookings(stay);
            if count == 0 {
                continue;
            }
            let n = f64::from(count);
            let fees = fee_breakdown(net.get(stay), model);
            summary.manager_revenue += fees.total_fees * n;
            summary.owner_revenue += fees.owner_earnings * n;
            summary.total_revenue += fees.received * n;
        }
    }

    summary
}
