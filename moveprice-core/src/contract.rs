//! Request/response contract.
//!
//! Quote forms submit loosely typed JSON: numbers may arrive as strings,
//! booleans as `"true"` or `1`. [`validate_request`] coerces such values
//! into a strict [`JobInputs`], collecting every field-level problem
//! before giving up. An invalid request never reaches the engine.
//!
//! Coercion runs before range checks: `"-5"` is first parsed to `-5.0`
//! and then rejected as negative.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{MAX_CUBIC_FEET, MAX_DISTANCE_MILES, MAX_RATE};
use crate::engine::PricingEngine;
use crate::errors::{
    PricingError, ValidationIssue, INVALID_RATES, INVALID_TIER, NEGATIVE, NOT_AN_ARRAY,
    NOT_AN_OBJECT, NOT_A_BOOLEAN, NOT_A_NUMBER, NOT_NON_NEGATIVE_INTEGER, NOT_POSITIVE_INTEGER,
    REQUIRED, TOO_LARGE, UNKNOWN_ENUM,
};
use crate::tables::RatesConfig;
use crate::types::{
    BillingService, HandicapParams, JobInputs, PricingBreakdown, ServiceType, SpecialtyTier,
};

/// A validated request: engine inputs plus an optional rate override.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRequest {
    pub inputs: JobInputs,
    pub rates: Option<RatesConfig>,
}

/// External response shape, tagged by `status`.
///
/// ```json
/// {"status": "quote", "recommendedCrew": 4, ...}
/// {"status": "invalid", "errors": [{"path": "cubicFeet", "message": "is required"}]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PricingResponse {
    Quote(PricingBreakdown),
    Invalid { errors: Vec<ValidationIssue> },
}

impl PricingResponse {
    pub fn breakdown(&self) -> Option<&PricingBreakdown> {
        match self {
            PricingResponse::Quote(b) => Some(b),
            PricingResponse::Invalid { .. } => None,
        }
    }

    pub fn errors(&self) -> &[ValidationIssue] {
        match self {
            PricingResponse::Quote(_) => &[],
            PricingResponse::Invalid { errors } => errors,
        }
    }
}

/// Validate a request and, if valid, price it.
pub fn quote(engine: &PricingEngine, request: &Value) -> PricingResponse {
    match validate_request(request) {
        Ok(req) => {
            PricingResponse::Quote(engine.price_with_rates(&req.inputs, req.rates.as_ref()))
        }
        Err(errors) => PricingResponse::Invalid { errors },
    }
}

/// Parse raw JSON text and validate it.
///
/// # Errors
/// `PricingError::Json` for malformed text, `PricingError::Validation`
/// for field-level failures.
pub fn validate_request_json(text: &str) -> Result<PricingRequest, PricingError> {
    let value: Value = serde_json::from_str(text)?;
    validate_request(&value).map_err(PricingError::Validation)
}

/// Validate and coerce a request object.
///
/// # Errors
/// Every invalid field, in field order. Empty on success.
pub fn validate_request(request: &Value) -> Result<PricingRequest, Vec<ValidationIssue>> {
    let Some(obj) = request.as_object() else {
        return Err(vec![ValidationIssue::new("", NOT_AN_OBJECT)]);
    };

    let mut v = Validator::default();

    let service_type = v.required(obj, "serviceType", |v, path, value| {
        v.enumerated(
            path,
            value,
            ServiceType::from_name,
            &ServiceType::ALL.map(ServiceType::as_str),
        )
    });
    let billing_service = v.required(obj, "billingService", |v, path, value| {
        v.enumerated(
            path,
            value,
            BillingService::from_name,
            &BillingService::ALL.map(BillingService::as_str),
        )
    });
    let distance_miles = v.required(obj, "distanceMiles", |v, path, value| {
        v.bounded_number(path, value, MAX_DISTANCE_MILES)
    });
    let cubic_feet = v.required(obj, "cubicFeet", |v, path, value| {
        v.bounded_number(path, value, MAX_CUBIC_FEET)
    });
    let movers = v.optional(obj, "movers", Validator::positive_count);
    let trucks = v.optional(obj, "trucks", Validator::positive_count);
    let handicaps = v.optional(obj, "handicaps", Validator::handicaps);
    let emergency = v.optional(obj, "emergencyWithin24h", Validator::boolean);
    let tiers = v.optional(obj, "specialtyTiers", Validator::specialty_tiers);
    let rates = v.optional(obj, "rates", Validator::rates);

    if !v.issues.is_empty() {
        return Err(v.issues);
    }

    // Every required field produced a value or an issue; no issues means
    // all are present.
    let (Some(service_type), Some(billing_service), Some(distance_miles), Some(cubic_feet)) =
        (service_type, billing_service, distance_miles, cubic_feet)
    else {
        return Err(vec![ValidationIssue::new("", REQUIRED)]);
    };

    Ok(PricingRequest {
        inputs: JobInputs {
            service_type,
            billing_service,
            distance_miles,
            cubic_feet,
            movers,
            trucks,
            handicaps,
            emergency_within_24h: emergency.unwrap_or(false),
            specialty_tiers: tiers.unwrap_or_default(),
        },
        rates,
    })
}

/// Validate a standalone rates override document.
///
/// Issue paths are rooted at `rates`, matching the inline request field.
pub fn validate_rates(value: &Value) -> Result<RatesConfig, Vec<ValidationIssue>> {
    let mut v = Validator::default();
    match v.rates("rates", value) {
        Some(rates) if v.issues.is_empty() => Ok(rates),
        _ => Err(v.issues),
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

#[derive(Default)]
struct Validator {
    issues: Vec<ValidationIssue>,
}

impl Validator {
    fn fail<T>(&mut self, path: &str, message: impl Into<String>) -> Option<T> {
        self.issues.push(ValidationIssue::new(path, message));
        None
    }

    fn required<T>(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        check: impl FnOnce(&mut Self, &str, &Value) -> Option<T>,
    ) -> Option<T> {
        match obj.get(key) {
            None | Some(Value::Null) => self.fail(key, REQUIRED),
            Some(value) => check(self, key, value),
        }
    }

    fn optional<T>(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        check: impl FnOnce(&mut Self, &str, &Value) -> Option<T>,
    ) -> Option<T> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => check(self, key, value),
        }
    }

    fn enumerated<T>(
        &mut self,
        path: &str,
        value: &Value,
        parse: fn(&str) -> Option<T>,
        names: &[&str],
    ) -> Option<T> {
        match value.as_str().and_then(|s| parse(s.trim())) {
            Some(parsed) => Some(parsed),
            None => self.fail(path, format!("{UNKNOWN_ENUM}: {}", names.join(", "))),
        }
    }

    fn number(&mut self, path: &str, value: &Value) -> Option<f64> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed.filter(|n| n.is_finite()) {
            Some(n) => Some(n),
            None => self.fail(path, NOT_A_NUMBER),
        }
    }

    /// A number in `0..=max`.
    fn bounded_number(&mut self, path: &str, value: &Value, max: f64) -> Option<f64> {
        let n = self.number(path, value)?;
        if n < 0.0 {
            return self.fail(path, NEGATIVE);
        }
        if n > max {
            return self.fail(path, format!("{TOO_LARGE} {max}"));
        }
        Some(n)
    }

    /// Range check for an already-parsed rate.
    fn rate(&mut self, path: &str, rate: f64) {
        if !rate.is_finite() || rate < 0.0 {
            self.fail::<()>(path, NEGATIVE);
        } else if rate > MAX_RATE {
            self.fail::<()>(path, format!("{TOO_LARGE} {MAX_RATE}"));
        }
    }

    fn count(&mut self, path: &str, value: &Value, min: u32, message: &str) -> Option<u32> {
        let n = self.number(path, value)?;
        if n.fract() != 0.0 || n < f64::from(min) || n > f64::from(u32::MAX) {
            return self.fail(path, message);
        }
        Some(n as u32)
    }

    fn positive_count(&mut self, path: &str, value: &Value) -> Option<u32> {
        self.count(path, value, 1, NOT_POSITIVE_INTEGER)
    }

    fn non_negative_count(&mut self, path: &str, value: &Value) -> Option<u32> {
        self.count(path, value, 0, NOT_NON_NEGATIVE_INTEGER)
    }

    fn boolean(&mut self, path: &str, value: &Value) -> Option<bool> {
        let parsed = match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_f64() {
                Some(x) if x == 1.0 => Some(true),
                Some(x) if x == 0.0 => Some(false),
                _ => None,
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        };
        match parsed {
            Some(b) => Some(b),
            None => self.fail(path, NOT_A_BOOLEAN),
        }
    }

    fn handicaps(&mut self, path: &str, value: &Value) -> Option<HandicapParams> {
        let Some(obj) = value.as_object() else {
            return self.fail(path, NOT_AN_OBJECT);
        };
        let before = self.issues.len();
        let stairs = self.optional(obj, "stairsFlights", |v, key, val| {
            v.non_negative_count(&join(path, key), val)
        });
        let walk = self.optional(obj, "walkDistanceFt", |v, key, val| {
            v.non_negative_count(&join(path, key), val)
        });
        let elevator = self.optional(obj, "hasElevator", |v, key, val| {
            v.boolean(&join(path, key), val)
        });
        if self.issues.len() > before {
            return None;
        }
        Some(HandicapParams {
            stairs_flights: stairs.unwrap_or(0),
            walk_distance_ft: walk.unwrap_or(0),
            has_elevator: elevator.unwrap_or(false),
        })
    }

    fn specialty_tiers(&mut self, path: &str, value: &Value) -> Option<Vec<SpecialtyTier>> {
        let Some(items) = value.as_array() else {
            return self.fail(path, NOT_AN_ARRAY);
        };
        let before = self.issues.len();
        let mut tiers = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_path = format!("{path}[{i}]");
            let Some(n) = self.number(&item_path, item) else {
                continue;
            };
            let tier = (n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&n))
                .then(|| SpecialtyTier::try_from(n as u8).ok())
                .flatten();
            match tier {
                Some(t) => tiers.push(t),
                None => {
                    self.fail::<()>(&item_path, INVALID_TIER);
                }
            }
        }
        (self.issues.len() == before).then_some(tiers)
    }

    fn rates(&mut self, path: &str, value: &Value) -> Option<RatesConfig> {
        if !value.is_object() {
            return self.fail(path, NOT_AN_OBJECT);
        }
        let rates: RatesConfig = match serde_json::from_value(value.clone()) {
            Ok(r) => r,
            Err(e) => return self.fail(path, format!("{INVALID_RATES}: {e}")),
        };

        let before = self.issues.len();
        let scalars = [
            ("additionalTruckHourlyRate", rates.additional_truck_hourly_rate),
            ("emergencyRatePerMoverPerHour", rates.emergency_rate_per_mover_per_hour),
            ("mileageRatePerMile", rates.mileage_rate_per_mile),
            ("fuelRatePerMile", rates.fuel_rate_per_mile),
        ];
        for (key, rate) in scalars {
            if let Some(rate) = rate {
                self.rate(&join(path, key), rate);
            }
        }
        if let Some(base) = &rates.base_hourly_rates {
            for (service, by_crew) in base {
                for (crew, rate) in by_crew {
                    self.rate(&format!("{path}.baseHourlyRates.{service}.{crew}"), *rate);
                }
            }
        }
        if let Some(additional) = &rates.additional_mover_rates {
            for (service, rate) in additional {
                self.rate(&format!("{path}.additionalMoverRates.{service}"), *rate);
            }
        }
        if let Some(prices) = &rates.specialty_tier_prices {
            for (tier, price) in prices {
                self.rate(&format!("{path}.specialtyTierPrices.{}", tier.number()), *price);
            }
        }
        (self.issues.len() == before).then_some(rates)
    }
}
