//! Crew/hours resolver.
//!
//! Derives the crew size from volume, bumps it for hard access, and
//! turns volume into base and handicap-adjusted hours. A caller-supplied
//! mover count always wins and skips every automatic adjustment.

use tracing::warn;

use crate::constants::{
    ELEVATOR_PERCENT, HANDICAP_CREW_MIN_CUBIC_FEET, MAX_HANDICAP_CREW_BUMP, MIN_CREW,
    STAIRS_PERCENT_PER_FLIGHT, WALK_PERCENT_PER_UNIT, WALK_UNIT_FEET,
};
use crate::tables::{resolve_band, PricingTables};
use crate::types::{HandicapParams, ServiceType};

/// Absorbs representation error when a sum of 0.09 units lands exactly
/// on a multiple of a threshold: one flight plus 500 ft of walk sums to
/// 0.54, yet `0.54 / 0.27` evaluates to 1.9999999999999996.
const BUMP_EPSILON: f64 = 1e-9;

/// Resolved crew and hours for one job. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrewHours {
    pub crew: u32,
    /// Extra movers added for handicaps (0 when overridden).
    pub crew_bump: u32,
    pub handicap_percent: f64,
    pub base_hours: f64,
    pub effective_hours: f64,
}

/// Additive access-difficulty percentage. Never negative.
pub fn handicap_percent(handicaps: &HandicapParams) -> f64 {
    let walk_units = handicaps.walk_distance_ft / WALK_UNIT_FEET;
    let elevator = if handicaps.has_elevator { 1.0 } else { 0.0 };
    STAIRS_PERCENT_PER_FLIGHT * f64::from(handicaps.stairs_flights)
        + WALK_PERCENT_PER_UNIT * f64::from(walk_units)
        + ELEVATOR_PERCENT * elevator
}

/// Crew size for a volume from the banded table.
///
/// Volumes above every band get the largest defined crew.
pub fn base_crew_for_volume(tables: &PricingTables, cubic_feet: f64) -> u32 {
    resolve_band(&tables.crew_bands, cubic_feet)
        .or_else(|| tables.max_band_crew())
        .unwrap_or(MIN_CREW)
        .max(MIN_CREW)
}

/// Extra movers warranted by `handicap_percent` at this volume.
///
/// Small jobs (under 400 cu ft) never get a bump; otherwise one mover
/// per full threshold, capped at [`MAX_HANDICAP_CREW_BUMP`].
pub fn handicap_crew_bump(tables: &PricingTables, cubic_feet: f64, handicap_percent: f64) -> u32 {
    if cubic_feet < HANDICAP_CREW_MIN_CUBIC_FEET {
        return 0;
    }
    let Some(threshold) = resolve_band(&tables.handicap_thresholds, cubic_feet) else {
        return 0;
    };
    if threshold <= 0.0 || handicap_percent <= 0.0 {
        return 0;
    }
    let steps = (handicap_percent / threshold + BUMP_EPSILON).floor();
    (steps as u32).min(MAX_HANDICAP_CREW_BUMP)
}

/// Base hours for a crew: `cubic_feet / (crew × throughput)`.
///
/// Zero volume yields zero hours. An unconfigured throughput also yields
/// zero hours rather than dividing by zero.
pub fn base_hours(tables: &PricingTables, service: ServiceType, cubic_feet: f64, crew: u32) -> f64 {
    if cubic_feet <= 0.0 {
        return 0.0;
    }
    let throughput = tables.throughput_for(service);
    if throughput <= 0.0 {
        warn!(service = %service, "no throughput configured; hours default to 0");
        return 0.0;
    }
    cubic_feet / (f64::from(crew.max(MIN_CREW)) * throughput)
}

/// Resolve crew size and hours for a job.
pub fn resolve_crew_hours(
    tables: &PricingTables,
    service: ServiceType,
    cubic_feet: f64,
    movers: Option<u32>,
    handicaps: Option<&HandicapParams>,
) -> CrewHours {
    let handicap_percent = handicaps.map(handicap_percent).unwrap_or(0.0);

    let (crew, crew_bump) = match movers {
        Some(m) => (m.max(MIN_CREW), 0),
        None => {
            let base = base_crew_for_volume(tables, cubic_feet);
            let bump = handicap_crew_bump(tables, cubic_feet, handicap_percent);
            (base + bump, bump)
        }
    };

    let base_hours = base_hours(tables, service, cubic_feet, crew);
    let effective_hours = base_hours * (1.0 + handicap_percent);

    CrewHours {
        crew,
        crew_bump,
        handicap_percent,
        base_hours,
        effective_hours,
    }
}

/// Truck count: the override if given, else enough trucks for the volume.
pub fn recommend_trucks(tables: &PricingTables, cubic_feet: f64, trucks: Option<u32>) -> u32 {
    if let Some(t) = trucks {
        return t.max(MIN_CREW);
    }
    if tables.truck_capacity_cubic_feet <= 0.0 || cubic_feet <= 0.0 {
        return MIN_CREW;
    }
    // Request volumes are capped well below u32 range; a direct caller
    // with a tiny capacity saturates rather than wraps.
    let needed = (cubic_feet / tables.truck_capacity_cubic_feet).ceil();
    (needed.min(f64::from(u32::MAX)) as u32).max(MIN_CREW)
}
