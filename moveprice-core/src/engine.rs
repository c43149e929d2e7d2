//! Pricing pipeline: crew, hours, day split, rate, costs.
//!
//! The engine holds nothing but its injected, immutable tables, so a
//! single instance can be shared across threads and called in parallel.
//! Identical inputs always produce identical breakdowns.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::constants::{MAX_CUBIC_FEET, MAX_DISTANCE_MILES};
use crate::cost::{aggregate_costs, CostInputs};
use crate::crew::{recommend_trucks, resolve_crew_hours};
use crate::day_split::classify_day_split;
use crate::money::round2;
use crate::rate::resolve_hourly_rate;
use crate::tables::{PricingTables, RatesConfig};
use crate::types::{JobInputs, PricingBreakdown};

/// Pricing engine over a fixed set of tables.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    tables: PricingTables,
}

impl PricingEngine {
    pub fn new(tables: PricingTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &PricingTables {
        &self.tables
    }

    /// Price a job against this engine's tables.
    pub fn price(&self, inputs: &JobInputs) -> PricingBreakdown {
        compute(&self.tables, inputs)
    }

    /// Price a job with a per-request rate override layered on top of
    /// this engine's tables. The engine itself is not modified.
    pub fn price_with_rates(
        &self,
        inputs: &JobInputs,
        rates: Option<&RatesConfig>,
    ) -> PricingBreakdown {
        let tables = match rates {
            Some(r) if !r.is_empty() => Cow::Owned(self.tables.with_overrides(r)),
            _ => Cow::Borrowed(&self.tables),
        };
        compute(&tables, inputs)
    }
}

/// Price a job against the default tables, with an optional override.
pub fn price_job(inputs: &JobInputs, rates: Option<&RatesConfig>) -> PricingBreakdown {
    PricingEngine::default().price_with_rates(inputs, rates)
}

/// Dimensions are validated upstream; this only keeps a direct caller's
/// negative, non-finite or oversized value from breaking the output
/// invariants.
fn bounded(field: &'static str, value: f64, max: f64) -> f64 {
    if !(value.is_finite() && value > 0.0) {
        return 0.0;
    }
    if value > max {
        warn!(field, value, max, "dimension above ceiling; clamped");
        return max;
    }
    value
}

fn compute(tables: &PricingTables, inputs: &JobInputs) -> PricingBreakdown {
    let cubic_feet = bounded("cubicFeet", inputs.cubic_feet, MAX_CUBIC_FEET);
    let distance_miles = bounded("distanceMiles", inputs.distance_miles, MAX_DISTANCE_MILES);

    let hours = resolve_crew_hours(
        tables,
        inputs.service_type,
        cubic_feet,
        inputs.movers,
        inputs.handicaps.as_ref(),
    );
    let trucks = recommend_trucks(tables, cubic_feet, inputs.trucks);
    let day_split = classify_day_split(distance_miles, hours.effective_hours);
    let hourly_rate = resolve_hourly_rate(tables, inputs.billing_service, hours.crew);

    debug!(
        service_type = %inputs.service_type,
        billing_service = %inputs.billing_service,
        crew = hours.crew,
        crew_bump = hours.crew_bump,
        trucks,
        effective_hours = hours.effective_hours,
        hourly_rate,
        "resolved crew, hours and rate"
    );

    let costs = aggregate_costs(
        tables,
        &CostInputs {
            effective_hours: hours.effective_hours,
            hourly_rate,
            trucks,
            crew: hours.crew,
            emergency_within_24h: inputs.emergency_within_24h,
            distance_miles,
            specialty_tiers: &inputs.specialty_tiers,
        },
    );

    if !costs.total.is_finite() {
        warn!(
            hourly_cost = costs.hourly_cost,
            mileage_cost = costs.mileage_cost,
            "total overflowed; rate tables are out of range"
        );
    }

    PricingBreakdown {
        recommended_crew: hours.crew,
        recommended_trucks: trucks,
        base_hours_before_handicap: round2(hours.base_hours),
        handicap_percent: round2(hours.handicap_percent),
        effective_hours: round2(hours.effective_hours),
        day_split,
        hourly_rate: round2(hourly_rate),
        truck_surcharge_per_hour: round2(costs.truck_surcharge_per_hour),
        emergency_surcharge_per_hour: round2(costs.emergency_surcharge_per_hour),
        hourly_cost: round2(costs.hourly_cost),
        mileage_cost: round2(costs.mileage_cost),
        fuel_cost: round2(costs.fuel_cost),
        specialty_item_charges: round2(costs.specialty_item_charges),
        specialty_item_count: inputs.specialty_tiers.len() as u32,
        total: round2(costs.total),
    }
}
