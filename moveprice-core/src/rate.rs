//! Hourly rate resolver.
//!
//! Maps `(billing service, crew size)` to an hourly rate. Never fails:
//! an unknown service resolves to `0.0`, and crews beyond the table are
//! extrapolated from the largest defined crew.

use tracing::warn;

use crate::tables::PricingTables;
use crate::types::BillingService;

/// Resolve the hourly rate for `crew` movers under `service`.
///
/// # Contract
///
/// - Exact table hit: the table rate.
/// - `crew` above the largest defined crew `k` (rate `R`):
///   `R + (crew - k) × additional_mover_rate[service]`.
/// - `crew` absent but below `k`: the rate of the next larger defined
///   crew. Extrapolation only runs upward. This deliberately departs from
///   applying `R + (crew - k) × step` with a negative offset: Commercial
///   with 2 movers bills 239 (the 3-mover rate), not 179.
/// - No table for `service`: `0.0`.
pub fn resolve_hourly_rate(tables: &PricingTables, service: BillingService, crew: u32) -> f64 {
    let Some(by_crew) = tables.base_hourly_rates.get(&service) else {
        warn!(service = %service, crew, "no rate table for billing service; rate defaults to 0");
        return 0.0;
    };

    if let Some(rate) = by_crew.get(&crew) {
        return *rate;
    }

    let Some((&max_crew, &max_rate)) = by_crew.last_key_value() else {
        warn!(service = %service, crew, "empty rate table for billing service; rate defaults to 0");
        return 0.0;
    };

    if crew > max_crew {
        let step = match tables.additional_mover_rates.get(&service) {
            Some(step) => *step,
            None => {
                warn!(
                    service = %service,
                    crew,
                    max_crew,
                    "no additional-mover rate; extrapolating with 0 increment"
                );
                0.0
            }
        };
        return max_rate + f64::from(crew - max_crew) * step;
    }

    // Gap inside the table, or below its smallest crew.
    by_crew
        .range(crew..)
        .next()
        .map(|(_, rate)| *rate)
        .unwrap_or(max_rate)
}
