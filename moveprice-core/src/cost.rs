//! Cost aggregator.
//!
//! Combines the per-hour charge, distance charges and specialty-item
//! flat fees. All values here are unrounded; the engine rounds once
//! when it builds the breakdown.

use crate::constants::FREE_TRAVEL_RADIUS_MILES;
use crate::tables::PricingTables;
use crate::types::SpecialtyTier;

/// Everything the aggregator needs from earlier stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostInputs<'a> {
    pub effective_hours: f64,
    pub hourly_rate: f64,
    pub trucks: u32,
    pub crew: u32,
    pub emergency_within_24h: bool,
    pub distance_miles: f64,
    pub specialty_tiers: &'a [SpecialtyTier],
}

/// Itemized, unrounded costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub truck_surcharge_per_hour: f64,
    pub emergency_surcharge_per_hour: f64,
    pub hourly_cost: f64,
    pub mileage_cost: f64,
    pub fuel_cost: f64,
    pub specialty_item_charges: f64,
    pub total: f64,
}

/// Per-hour charge for trucks beyond the first.
pub fn truck_surcharge_per_hour(tables: &PricingTables, trucks: u32) -> f64 {
    f64::from(trucks.saturating_sub(1)) * tables.additional_truck_hourly_rate
}

/// Per-hour emergency charge for the whole crew.
pub fn emergency_surcharge_per_hour(tables: &PricingTables, emergency: bool, crew: u32) -> f64 {
    if emergency {
        tables.emergency_rate_per_mover_per_hour * f64::from(crew)
    } else {
        0.0
    }
}

/// `(mileage, fuel)` for a trip. Both zero inside the free-travel radius.
pub fn distance_costs(tables: &PricingTables, distance_miles: f64) -> (f64, f64) {
    if distance_miles <= FREE_TRAVEL_RADIUS_MILES {
        return (0.0, 0.0);
    }
    (
        distance_miles * tables.mileage_rate_per_mile,
        distance_miles * tables.fuel_rate_per_mile,
    )
}

/// Sum of flat prices, one per declared item. Repeated tiers each count.
/// A tier without a configured price contributes nothing.
pub fn specialty_item_charges(tables: &PricingTables, tiers: &[SpecialtyTier]) -> f64 {
    tiers
        .iter()
        .filter_map(|tier| tables.specialty_tier_prices.get(tier))
        .sum()
}

/// Aggregate every cost line and the total.
pub fn aggregate_costs(tables: &PricingTables, inputs: &CostInputs<'_>) -> CostBreakdown {
    let truck_surcharge_per_hour = truck_surcharge_per_hour(tables, inputs.trucks);
    let emergency_surcharge_per_hour =
        emergency_surcharge_per_hour(tables, inputs.emergency_within_24h, inputs.crew);

    let hourly_cost = (inputs.hourly_rate + truck_surcharge_per_hour + emergency_surcharge_per_hour)
        * inputs.effective_hours;
    let (mileage_cost, fuel_cost) = distance_costs(tables, inputs.distance_miles);
    let specialty_item_charges = specialty_item_charges(tables, inputs.specialty_tiers);

    let total = (hourly_cost + mileage_cost + fuel_cost + specialty_item_charges).max(0.0);

    CostBreakdown {
        truck_surcharge_per_hour,
        emergency_surcharge_per_hour,
        hourly_cost,
        mileage_cost,
        fuel_cost,
        specialty_item_charges,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(tiers: &[SpecialtyTier]) -> CostInputs<'_> {
        CostInputs {
            effective_hours: 2.0,
            hourly_rate: 100.0,
            trucks: 1,
            crew: 2,
            emergency_within_24h: false,
            distance_miles: 10.0,
            specialty_tiers: tiers,
        }
    }

    #[test]
    fn plain_hourly_cost() {
        let t = PricingTables::default();
        let c = aggregate_costs(&t, &inputs(&[]));
        assert_eq!(c.hourly_cost, 200.0);
        assert_eq!(c.total, 200.0);
        assert_eq!(c.mileage_cost, 0.0);
        assert_eq!(c.fuel_cost, 0.0);
    }

    #[test]
    fn truck_surcharge_only_beyond_first() {
        let t = PricingTables::default();
        assert_eq!(truck_surcharge_per_hour(&t, 0), 0.0);
        assert_eq!(truck_surcharge_per_hour(&t, 1), 0.0);
        assert_eq!(truck_surcharge_per_hour(&t, 3), 80.0);

        let mut i = inputs(&[]);
        i.trucks = 2;
        let c = aggregate_costs(&t, &i);
        assert_eq!(c.hourly_cost, (100.0 + 40.0) * 2.0);
    }

    #[test]
    fn emergency_scales_with_crew() {
        let t = PricingTables::default();
        assert_eq!(emergency_surcharge_per_hour(&t, false, 4), 0.0);
        assert_eq!(emergency_surcharge_per_hour(&t, true, 4), 100.0);
    }

    #[test]
    fn distance_free_radius() {
        let t = PricingTables::default();
        assert_eq!(distance_costs(&t, 0.0), (0.0, 0.0));
        assert_eq!(distance_costs(&t, 30.0), (0.0, 0.0));
        let (m, f) = distance_costs(&t, 40.0);
        assert!((m - 171.6).abs() < 1e-9);
        assert_eq!(f, 80.0);
    }

    #[test]
    fn specialty_per_item() {
        let t = PricingTables::default();
        use SpecialtyTier::*;
        assert_eq!(specialty_item_charges(&t, &[]), 0.0);
        assert_eq!(specialty_item_charges(&t, &[Tier1, Tier3]), 500.0);
        assert_eq!(specialty_item_charges(&t, &[Tier2, Tier2, Tier2]), 750.0);
    }

    #[test]
    fn total_is_sum_of_components() {
        let t = PricingTables::default();
        let tiers = [SpecialtyTier::Tier1];
        let mut i = inputs(&tiers);
        i.distance_miles = 55.5;
        i.emergency_within_24h = true;
        i.trucks = 2;
        let c = aggregate_costs(&t, &i);
        let sum = c.hourly_cost + c.mileage_cost + c.fuel_cost + c.specialty_item_charges;
        assert_eq!(c.total, sum);
    }
}
