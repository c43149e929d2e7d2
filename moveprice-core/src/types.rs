//! Pricing value types.
//!
//! Everything here is a plain value: no identity, no lifecycle beyond a
//! single pricing call. Types serialize with camelCase field names and
//! the display names used by quote forms (`"Full Service"`, `"Moving"`),
//! which is the shape external callers exchange.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Move complexity class. Determines crew throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Grab-n-Go")]
    GrabAndGo,
    #[serde(rename = "Full Service")]
    FullService,
    #[serde(rename = "White Glove")]
    WhiteGlove,
    #[serde(rename = "Labor Only")]
    LaborOnly,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::GrabAndGo,
        ServiceType::FullService,
        ServiceType::WhiteGlove,
        ServiceType::LaborOnly,
    ];

    /// Display name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::GrabAndGo => "Grab-n-Go",
            ServiceType::FullService => "Full Service",
            ServiceType::WhiteGlove => "White Glove",
            ServiceType::LaborOnly => "Labor Only",
        }
    }

    /// Parse a wire name. Exact match only.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rate-table category. Independent of [`ServiceType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BillingService {
    Moving,
    Packing,
    #[serde(rename = "White Glove")]
    WhiteGlove,
    Commercial,
}

impl BillingService {
    pub const ALL: [BillingService; 4] = [
        BillingService::Moving,
        BillingService::Packing,
        BillingService::WhiteGlove,
        BillingService::Commercial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BillingService::Moving => "Moving",
            BillingService::Packing => "Packing",
            BillingService::WhiteGlove => "White Glove",
            BillingService::Commercial => "Commercial",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for BillingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat-fee class for items needing extra handling (pianos, safes).
///
/// Serialized as the bare integer `1`, `2` or `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SpecialtyTier {
    Tier1,
    Tier2,
    Tier3,
}

impl SpecialtyTier {
    pub fn number(self) -> u8 {
        match self {
            SpecialtyTier::Tier1 => 1,
            SpecialtyTier::Tier2 => 2,
            SpecialtyTier::Tier3 => 3,
        }
    }
}

impl TryFrom<u8> for SpecialtyTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SpecialtyTier::Tier1),
            2 => Ok(SpecialtyTier::Tier2),
            3 => Ok(SpecialtyTier::Tier3),
            other => Err(format!("specialty tier must be 1, 2 or 3, got {other}")),
        }
    }
}

impl From<SpecialtyTier> for u8 {
    fn from(tier: SpecialtyTier) -> u8 {
        tier.number()
    }
}

/// Physical access difficulty at a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandicapParams {
    /// Flights of stairs to carry through.
    pub stairs_flights: u32,
    /// Walk distance from truck to door, in feet.
    pub walk_distance_ft: u32,
    pub has_elevator: bool,
}

/// Validated input to a single pricing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInputs {
    pub service_type: ServiceType,
    pub billing_service: BillingService,
    /// Trip distance in miles, `>= 0`.
    pub distance_miles: f64,
    /// Job volume in cubic feet, `>= 0`.
    pub cubic_feet: f64,
    /// Manual crew override. Used verbatim when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movers: Option<u32>,
    /// Manual truck override. Used verbatim when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trucks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicaps: Option<HandicapParams>,
    #[serde(default)]
    pub emergency_within_24h: bool,
    #[serde(default)]
    pub specialty_tiers: Vec<SpecialtyTier>,
}

impl JobInputs {
    /// Minimal inputs with no overrides, handicaps or surcharges.
    pub fn new(
        service_type: ServiceType,
        billing_service: BillingService,
        distance_miles: f64,
        cubic_feet: f64,
    ) -> Self {
        Self {
            service_type,
            billing_service,
            distance_miles,
            cubic_feet,
            movers: None,
            trucks: None,
            handicaps: None,
            emergency_within_24h: false,
            specialty_tiers: Vec::new(),
        }
    }
}

/// Distance band a job falls into for day-split purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaySplitKind {
    Local,
    Regional,
    Unknown,
}

/// Whether a job fits in one working day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySplit {
    pub kind: DaySplitKind,
    /// Hour ceiling applied; `None` for [`DaySplitKind::Unknown`].
    pub threshold_hours: Option<f64>,
    /// Compared against unrounded effective hours, so a job presented as
    /// exactly `9.0` hours may still be `false` (e.g. 9.0006 h).
    pub single_day_possible: bool,
}

/// The sole output of the engine. Always fully populated.
///
/// Money and hour fields are rounded to two decimals. `total` is
/// computed from unrounded components and rounded once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub recommended_crew: u32,
    pub recommended_trucks: u32,
    pub base_hours_before_handicap: f64,
    pub handicap_percent: f64,
    pub effective_hours: f64,
    pub day_split: DaySplit,
    pub hourly_rate: f64,
    pub truck_surcharge_per_hour: f64,
    pub emergency_surcharge_per_hour: f64,
    pub hourly_cost: f64,
    pub mileage_cost: f64,
    pub fuel_cost: f64,
    pub specialty_item_charges: f64,
    pub specialty_item_count: u32,
    pub total: f64,
}
