//! Pricing constants: scalar thresholds shared by every stage.
//!
//! Tabular values (rates, bands, throughput) live in [`crate::tables`]
//! so they can be overridden. Values here are structural: changing one
//! changes the meaning of a quote, not its price level.

/// Distance (miles) up to which travel is free and a job is "local".
pub const FREE_TRAVEL_RADIUS_MILES: f64 = 30.0;

/// Upper distance bound (miles, inclusive) of the regional band.
pub const REGIONAL_MAX_MILES: f64 = 120.0;

/// Single-day hour ceiling for local jobs.
pub const LOCAL_DAY_MAX_HOURS: f64 = 9.0;

/// Single-day hour ceiling for regional jobs (driving-hours limit).
pub const REGIONAL_DAY_MAX_HOURS: f64 = 14.0;

/// Handicap percent added per flight of stairs.
pub const STAIRS_PERCENT_PER_FLIGHT: f64 = 0.09;

/// Handicap percent added per full walk-distance unit.
pub const WALK_PERCENT_PER_UNIT: f64 = 0.09;

/// Walk distance (feet) making up one handicap unit.
pub const WALK_UNIT_FEET: u32 = 100;

/// Handicap percent added by the elevator flag.
pub const ELEVATOR_PERCENT: f64 = 0.18;

/// Volume (cu ft) below which handicaps never add crew.
pub const HANDICAP_CREW_MIN_CUBIC_FEET: f64 = 400.0;

/// Maximum extra movers a handicap can add.
pub const MAX_HANDICAP_CREW_BUMP: u32 = 2;

/// Smallest crew or truck count a quote may carry.
pub const MIN_CREW: u32 = 1;

/// Decimal places kept in presented money and hour values.
pub const PRESENTATION_DECIMALS: i32 = 2;

/// Largest volume (cu ft) a request may declare.
///
/// The ceilings below keep every intermediate product finite, even with
/// `u32::MAX` movers, trucks and stairs, so a quote's total always equals
/// the sum of its line items.
pub const MAX_CUBIC_FEET: f64 = 1_000_000.0;

/// Largest distance (miles) a request may declare.
pub const MAX_DISTANCE_MILES: f64 = 10_000.0;

/// Largest value any rate or price in a rates override may take.
pub const MAX_RATE: f64 = 1_000_000.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_pricing_rules() {
        assert_eq!(FREE_TRAVEL_RADIUS_MILES, 30.0);
        assert_eq!(REGIONAL_MAX_MILES, 120.0);
        assert_eq!(LOCAL_DAY_MAX_HOURS, 9.0);
        assert_eq!(REGIONAL_DAY_MAX_HOURS, 14.0);
        assert_eq!(STAIRS_PERCENT_PER_FLIGHT, 0.09);
        assert_eq!(WALK_PERCENT_PER_UNIT, 0.09);
        assert_eq!(WALK_UNIT_FEET, 100);
        assert_eq!(ELEVATOR_PERCENT, 0.18);
        assert_eq!(HANDICAP_CREW_MIN_CUBIC_FEET, 400.0);
        assert_eq!(MAX_HANDICAP_CREW_BUMP, 2);
        assert_eq!(MIN_CREW, 1);
        assert_eq!(PRESENTATION_DECIMALS, 2);
        assert_eq!(MAX_CUBIC_FEET, 1_000_000.0);
        assert_eq!(MAX_DISTANCE_MILES, 10_000.0);
        assert_eq!(MAX_RATE, 1_000_000.0);
    }

    #[test]
    fn ceilings_keep_worst_case_finite() {
        let crew = f64::from(u32::MAX);
        let handicap = STAIRS_PERCENT_PER_FLIGHT * crew
            + WALK_PERCENT_PER_UNIT * crew
            + ELEVATOR_PERCENT;
        // One mover at the slowest plausible throughput.
        let hours = MAX_CUBIC_FEET / 1.0 * (1.0 + handicap);
        let rate = MAX_RATE + crew * MAX_RATE * 3.0;
        let total = rate * hours + 2.0 * MAX_DISTANCE_MILES * MAX_RATE + crew * MAX_RATE;
        assert!(total.is_finite());
    }

    #[test]
    fn regional_band_starts_where_local_ends() {
        assert!(FREE_TRAVEL_RADIUS_MILES < REGIONAL_MAX_MILES);
        assert!(LOCAL_DAY_MAX_HOURS < REGIONAL_DAY_MAX_HOURS);
    }
}
