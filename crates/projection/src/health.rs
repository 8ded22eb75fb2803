//! Sleep-driven health trajectory.

/// Lower edge of the optimal sleep band (hours).
pub const OPTIMAL_SLEEP_MIN: f64 = 7.0;
/// Upper edge of the optimal sleep band (hours).
pub const OPTIMAL_SLEEP_MAX: f64 = 8.5;
/// Health increase inside the optimal band (percent).
pub const MAX_INCREASE_PERCENT: f64 = 10.0;
/// Percentage points lost per hour of sleep below the band.
pub const DEFICIT_PENALTY_PER_HOUR: f64 = 5.0;
/// Percentage points lost per hour of sleep above the band.
pub const EXCESS_PENALTY_PER_HOUR: f64 = 2.0;

/// Multiplicative health factor (`>= 1.0`) for a given average sleep duration.
///
/// Inside `[7.0, 8.5]` hours the increase is the full 10%. Under-sleeping
/// costs 5 points per missing hour, over-sleeping 2 points per extra hour;
/// the increase never goes below zero.
pub fn health_factor(avg_sleep_hours: f64) -> f64 {
    let increase = if (OPTIMAL_SLEEP_MIN..=OPTIMAL_SLEEP_MAX).contains(&avg_sleep_hours) {
        MAX_INCREASE_PERCENT
    } else if avg_sleep_hours < OPTIMAL_SLEEP_MIN {
        let deficit = OPTIMAL_SLEEP_MIN - avg_sleep_hours;
        (MAX_INCREASE_PERCENT - deficit * DEFICIT_PENALTY_PER_HOUR).max(0.0)
    } else {
        let excess = avg_sleep_hours - OPTIMAL_SLEEP_MAX;
        (MAX_INCREASE_PERCENT - excess * EXCESS_PENALTY_PER_HOUR).max(0.0)
    };

    1.0 + increase / 100.0
}

/// Health increase in percent, rounded to one decimal.
pub fn health_increase_percent(avg_sleep_hours: f64) -> f64 {
    crate::round_to((health_factor(avg_sleep_hours) - 1.0) * 100.0, 1)
}
