//! Rounding and commission gross-up primitives

/// Round `value` to the nearest multiple of `step`, ties away from zero.
///
/// `step` must be strictly positive; callers validate it once per configuration.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Price to display so that `net` remains after the platform takes its commission
pub fn gross_price(net: f64, commission_fraction: f64, step: f64) -> f64 {
    round_to_step(gross_up(net, commission_fraction), step)
}

/// Unrounded gross-up of a net amount
pub fn gross_up(net: f64, commission_fraction: f64) -> f64 {
    net / (1.0 - commission_fraction)
}

/// Amount kept from a displayed price after commission. Exact, never rounded.
pub fn net_from_gross(gross: f64, commission_fraction: f64) -> f64 {
    gross * (1.0 - commission_fraction)
}
