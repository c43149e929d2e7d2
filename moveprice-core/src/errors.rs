//! Error types for moveprice-core.
//!
//! Only the contract layer produces errors. The engine itself returns a
//! breakdown unconditionally; configuration gaps degrade to zero or
//! extrapolated rates instead of failing the quote.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unified error type for request handling.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// Request failed field validation. No breakdown was computed.
    #[error("Validation error: {} invalid field(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    /// Request or rates document is not well-formed JSON.
    #[error("JSON error: {0}")]
    Json(String),
}

impl PricingError {
    /// Field-level issues, if this is a validation failure.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            PricingError::Validation(issues) => issues,
            PricingError::Json(_) => &[],
        }
    }
}

impl From<serde_json::Error> for PricingError {
    fn from(e: serde_json::Error) -> Self {
        PricingError::Json(e.to_string())
    }
}

/// One rejected request field.
///
/// `path` uses dotted object keys and bracketed array indices, e.g.
/// `handicaps.stairsFlights` or `specialtyTiers[2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

// ── Validation message registry ─────────────────────────────────────

/// Required field absent or `null`.
pub const REQUIRED: &str = "is required";
/// Value is neither a number nor a numeric string.
pub const NOT_A_NUMBER: &str = "must be a number";
/// Numeric value below zero.
pub const NEGATIVE: &str = "must be greater than or equal to 0";
/// Numeric value above its ceiling; the ceiling follows the stem.
pub const TOO_LARGE: &str = "must be less than or equal to";
/// Count field that is not a whole number `>= 1`.
pub const NOT_POSITIVE_INTEGER: &str = "must be a positive integer";
/// Count field that is not a whole number `>= 0`.
pub const NOT_NON_NEGATIVE_INTEGER: &str = "must be a non-negative integer";
/// String outside an enumerated set.
pub const UNKNOWN_ENUM: &str = "must be one of";
/// Value is neither a boolean nor a boolean-like string.
pub const NOT_A_BOOLEAN: &str = "must be a boolean";
/// Specialty tier outside `1..=3`.
pub const INVALID_TIER: &str = "must be 1, 2 or 3";
pub const NOT_AN_OBJECT: &str = "must be an object";
pub const NOT_AN_ARRAY: &str = "must be an array";
/// Rates override failed to deserialize.
pub const INVALID_RATES: &str = "is not a valid rates configuration";

/// Every message stem the contract may emit.
pub const VALIDATION_MESSAGES: [&str; 12] = [
    REQUIRED,
    NOT_A_NUMBER,
    NEGATIVE,
    TOO_LARGE,
    NOT_POSITIVE_INTEGER,
    NOT_NON_NEGATIVE_INTEGER,
    UNKNOWN_ENUM,
    NOT_A_BOOLEAN,
    INVALID_TIER,
    NOT_AN_OBJECT,
    NOT_AN_ARRAY,
    INVALID_RATES,
];

/// Returns `true` if `message` starts with a registered stem.
pub fn is_registered_message(message: &str) -> bool {
    VALIDATION_MESSAGES
        .iter()
        .any(|stem| message.starts_with(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_format() {
        let err = PricingError::Validation(vec![
            ValidationIssue::new("cubicFeet", NEGATIVE),
            ValidationIssue::new("serviceType", REQUIRED),
        ]);
        assert_eq!(err.to_string(), "Validation error: 2 invalid field(s)");
        assert_eq!(err.issues().len(), 2);

        let err = PricingError::Json("expected value at line 1 column 1".into());
        assert_eq!(
            err.to_string(),
            "JSON error: expected value at line 1 column 1"
        );
        assert!(err.issues().is_empty());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
    }

    #[test]
    fn issue_display() {
        let issue = ValidationIssue::new("handicaps.stairsFlights", NOT_NON_NEGATIVE_INTEGER);
        assert_eq!(
            issue.to_string(),
            "handicaps.stairsFlights: must be a non-negative integer"
        );
        assert_eq!(ValidationIssue::new("", "bad").to_string(), "bad");
    }

    #[test]
    fn issue_wire_shape() {
        let issue = ValidationIssue::new("distanceMiles", NEGATIVE);
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"path": "distanceMiles", "message": NEGATIVE})
        );
    }

    #[test]
    fn registry_all_unique() {
        let mut seen = std::collections::HashSet::new();
        for msg in &VALIDATION_MESSAGES {
            assert!(seen.insert(msg), "duplicate validation message: {msg}");
        }
    }

    #[test]
    fn registry_matches_stems() {
        assert!(is_registered_message("must be one of: Moving, Packing"));
        assert!(is_registered_message(REQUIRED));
        assert!(is_registered_message("must be less than or equal to 10000"));
        assert!(!is_registered_message("something else"));
    }
}
