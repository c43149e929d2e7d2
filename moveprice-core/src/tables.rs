//! Rate and threshold tables.
//!
//! [`PricingTables`] is the complete, immutable configuration a pricing
//! call reads. It is injected into the engine rather than held in a
//! global, so tests and tenants substitute tables without shared state.
//! [`RatesConfig`] is the partial, serde-facing override that callers
//! send; [`PricingTables::with_overrides`] folds it onto a base.
//!
//! Banded thresholds (crew by volume, handicap bump thresholds) are
//! ordered `Band` slices resolved by the one [`resolve_band`] helper.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{BillingService, ServiceType, SpecialtyTier};

/// One step of an ascending threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    /// Upper bound of the band.
    pub upper: f64,
    /// Whether `x == upper` still falls in this band.
    pub inclusive: bool,
    pub value: T,
}

impl<T> Band<T> {
    /// Band covering `x <= upper`.
    pub const fn up_to(upper: f64, value: T) -> Self {
        Self {
            upper,
            inclusive: true,
            value,
        }
    }

    /// Band covering `x < upper`.
    pub const fn below(upper: f64, value: T) -> Self {
        Self {
            upper,
            inclusive: false,
            value,
        }
    }

    fn contains(&self, x: f64) -> bool {
        if self.inclusive {
            x <= self.upper
        } else {
            x < self.upper
        }
    }
}

/// Value of the first band that fits `x`, scanning in table order.
///
/// Returns `None` when `x` lies above every band; callers decide the
/// overflow value.
pub fn resolve_band<T: Copy>(bands: &[Band<T>], x: f64) -> Option<T> {
    bands.iter().find(|band| band.contains(x)).map(|band| band.value)
}

/// Complete pricing configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTables {
    /// Cubic feet moved per hour per crew member.
    pub throughput: BTreeMap<ServiceType, f64>,
    /// Crew size by job volume (cu ft), ascending.
    pub crew_bands: Vec<Band<u32>>,
    /// Handicap percent needed per extra mover, by job volume, ascending.
    pub handicap_thresholds: Vec<Band<f64>>,
    /// Hourly rate by billing service, then crew size.
    pub base_hourly_rates: BTreeMap<BillingService, BTreeMap<u32, f64>>,
    /// Per-hour increment for each mover beyond a service's largest crew.
    pub additional_mover_rates: BTreeMap<BillingService, f64>,
    pub additional_truck_hourly_rate: f64,
    pub emergency_rate_per_mover_per_hour: f64,
    pub mileage_rate_per_mile: f64,
    pub fuel_rate_per_mile: f64,
    pub specialty_tier_prices: BTreeMap<SpecialtyTier, f64>,
    /// Volume one truck carries; drives the truck recommendation.
    pub truck_capacity_cubic_feet: f64,
}

impl Default for PricingTables {
    fn default() -> Self {
        use BillingService::*;

        let throughput = BTreeMap::from([
            (ServiceType::GrabAndGo, 150.0),
            (ServiceType::FullService, 100.0),
            (ServiceType::WhiteGlove, 70.0),
            (ServiceType::LaborOnly, 120.0),
        ]);

        let crew_bands = vec![
            Band::up_to(300.0, 2),
            Band::up_to(750.0, 3),
            Band::up_to(1200.0, 4),
            Band::up_to(1800.0, 5),
            Band::up_to(2500.0, 6),
        ];

        // The <300 band sits behind the 400 cu ft guard and never fires,
        // but keeps the table total over all volumes.
        let handicap_thresholds = vec![
            Band::below(300.0, 0.36),
            Band::below(600.0, 0.27),
            Band::up_to(f64::INFINITY, 0.18),
        ];

        let base_hourly_rates = BTreeMap::from([
            (
                Moving,
                BTreeMap::from([(2, 149.0), (3, 199.0), (4, 249.0), (5, 299.0), (6, 349.0)]),
            ),
            (Packing, BTreeMap::from([(2, 129.0), (3, 179.0), (4, 229.0)])),
            (
                WhiteGlove,
                BTreeMap::from([(2, 199.0), (3, 269.0), (4, 339.0), (5, 409.0)]),
            ),
            (
                Commercial,
                BTreeMap::from([(3, 239.0), (4, 299.0), (5, 359.0), (6, 419.0)]),
            ),
        ]);

        let additional_mover_rates = BTreeMap::from([
            (Moving, 50.0),
            (Packing, 45.0),
            (WhiteGlove, 70.0),
            (Commercial, 60.0),
        ]);

        let specialty_tier_prices = BTreeMap::from([
            (SpecialtyTier::Tier1, 150.0),
            (SpecialtyTier::Tier2, 250.0),
            (SpecialtyTier::Tier3, 350.0),
        ]);

        Self {
            throughput,
            crew_bands,
            handicap_thresholds,
            base_hourly_rates,
            additional_mover_rates,
            additional_truck_hourly_rate: 40.0,
            emergency_rate_per_mover_per_hour: 25.0,
            mileage_rate_per_mile: 4.29,
            fuel_rate_per_mile: 2.0,
            specialty_tier_prices,
            truck_capacity_cubic_feet: 1700.0,
        }
    }
}

impl PricingTables {
    /// Copy of `self` with every field named in `rates` replaced.
    ///
    /// Map overrides replace the entry for each service or tier they
    /// name; services and tiers they omit keep the base values.
    pub fn with_overrides(&self, rates: &RatesConfig) -> Self {
        let mut tables = self.clone();

        if let Some(base) = &rates.base_hourly_rates {
            for (service, by_crew) in base {
                tables.base_hourly_rates.insert(*service, by_crew.clone());
            }
        }
        if let Some(additional) = &rates.additional_mover_rates {
            tables.additional_mover_rates.extend(additional);
        }
        if let Some(prices) = &rates.specialty_tier_prices {
            tables.specialty_tier_prices.extend(prices);
        }
        if let Some(v) = rates.additional_truck_hourly_rate {
            tables.additional_truck_hourly_rate = v;
        }
        if let Some(v) = rates.emergency_rate_per_mover_per_hour {
            tables.emergency_rate_per_mover_per_hour = v;
        }
        if let Some(v) = rates.mileage_rate_per_mile {
            tables.mileage_rate_per_mile = v;
        }
        if let Some(v) = rates.fuel_rate_per_mile {
            tables.fuel_rate_per_mile = v;
        }

        tables
    }

    /// Crew throughput for a service type; `0.0` if unconfigured.
    pub fn throughput_for(&self, service: ServiceType) -> f64 {
        self.throughput.get(&service).copied().unwrap_or(0.0)
    }

    /// Largest crew size any volume band can produce.
    pub fn max_band_crew(&self) -> Option<u32> {
        self.crew_bands.iter().map(|band| band.value).max()
    }
}

/// Partial override of the rate tables, as sent by callers.
///
/// Absent fields fall through to the base tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RatesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_hourly_rates: Option<BTreeMap<BillingService, BTreeMap<u32, f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_mover_rates: Option<BTreeMap<BillingService, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_truck_hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_rate_per_mover_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_rate_per_mile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_rate_per_mile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty_tier_prices: Option<BTreeMap<SpecialtyTier, f64>>,
}

impl RatesConfig {
    /// Layer `over` on top of `self`. Fields set in `over` win; map
    /// fields merge per key.
    pub fn layered(mut self, over: RatesConfig) -> RatesConfig {
        fn merge_map<K: Ord, V>(
            base: Option<BTreeMap<K, V>>,
            over: Option<BTreeMap<K, V>>,
        ) -> Option<BTreeMap<K, V>> {
            match (base, over) {
                (Some(mut b), Some(o)) => {
                    b.extend(o);
                    Some(b)
                }
                (b, o) => o.or(b),
            }
        }

        self.base_hourly_rates = merge_map(self.base_hourly_rates, over.base_hourly_rates);
        self.additional_mover_rates =
            merge_map(self.additional_mover_rates, over.additional_mover_rates);
        self.specialty_tier_prices =
            merge_map(self.specialty_tier_prices, over.specialty_tier_prices);
        self.additional_truck_hourly_rate = over
            .additional_truck_hourly_rate
            .or(self.additional_truck_hourly_rate);
        self.emergency_rate_per_mover_per_hour = over
            .emergency_rate_per_mover_per_hour
            .or(self.emergency_rate_per_mover_per_hour);
        self.mileage_rate_per_mile = over.mileage_rate_per_mile.or(self.mileage_rate_per_mile);
        self.fuel_rate_per_mile = over.fuel_rate_per_mile.or(self.fuel_rate_per_mile);
        self
    }

    /// Whether this override changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == RatesConfig::default()
    }
}
