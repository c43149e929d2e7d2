//! Day-split classifier.
//!
//! Bands are exclusive and checked in order: local, regional, unknown.
//! A distance of exactly 30 miles satisfies both the local and regional
//! range checks; local is checked first and wins.

use crate::constants::{
    FREE_TRAVEL_RADIUS_MILES, LOCAL_DAY_MAX_HOURS, REGIONAL_DAY_MAX_HOURS, REGIONAL_MAX_MILES,
};
use crate::types::{DaySplit, DaySplitKind};

/// Classify whether a job of `effective_hours` over `distance_miles`
/// fits a single working day. Pure; no failure modes.
///
/// `effective_hours` is the unrounded value; the breakdown presents it
/// rounded, so the flag can disagree with the displayed hours when the
/// two differ by less than 0.005 h.
pub fn classify_day_split(distance_miles: f64, effective_hours: f64) -> DaySplit {
    let (kind, threshold) = if distance_miles <= FREE_TRAVEL_RADIUS_MILES {
        (DaySplitKind::Local, Some(LOCAL_DAY_MAX_HOURS))
    } else if distance_miles <= REGIONAL_MAX_MILES {
        (DaySplitKind::Regional, Some(REGIONAL_DAY_MAX_HOURS))
    } else {
        (DaySplitKind::Unknown, None)
    };

    DaySplit {
        kind,
        threshold_hours: threshold,
        single_day_possible: threshold.is_some_and(|max| effective_hours <= max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_boundary() {
        let d = classify_day_split(30.0, 9.0);
        assert_eq!(d.kind, DaySplitKind::Local);
        assert_eq!(d.threshold_hours, Some(9.0));
        assert!(d.single_day_possible);

        let d = classify_day_split(30.0, 9.01);
        assert_eq!(d.kind, DaySplitKind::Local);
        assert!(!d.single_day_possible);
    }

    #[test]
    fn zero_distance_is_local() {
        assert_eq!(classify_day_split(0.0, 0.0).kind, DaySplitKind::Local);
    }

    #[test]
    fn regional_band() {
        let d = classify_day_split(30.5, 14.0);
        assert_eq!(d.kind, DaySplitKind::Regional);
        assert_eq!(d.threshold_hours, Some(14.0));
        assert!(d.single_day_possible);

        let d = classify_day_split(120.0, 14.5);
        assert_eq!(d.kind, DaySplitKind::Regional);
        assert!(!d.single_day_possible);
    }

    #[test]
    fn unknown_beyond_regional() {
        for hours in [0.0, 1.0, 9.0, 100.0] {
            let d = classify_day_split(150.0, hours);
            assert_eq!(d.kind, DaySplitKind::Unknown);
            assert_eq!(d.threshold_hours, None);
            assert!(!d.single_day_possible);
        }
        assert_eq!(classify_day_split(120.01, 1.0).kind, DaySplitKind::Unknown);
    }
}
