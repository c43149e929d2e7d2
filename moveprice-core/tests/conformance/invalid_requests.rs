//! Conformance: contract rejections.
//!
//! An invalid request yields the full issue list and no breakdown.

use moveprice_core::{quote, validate_request, PricingEngine, PricingResponse, ValidationIssue};
use serde::Deserialize;
use serde_json::Value;

use crate::load_vectors;

#[derive(Deserialize)]
struct InvalidVectors {
    #[allow(dead_code)]
    description: String,
    cases: Vec<InvalidCase>,
}

#[derive(Deserialize)]
struct InvalidCase {
    name: String,
    request: Value,
    errors: Vec<ValidationIssue>,
}

fn cases() -> Vec<InvalidCase> {
    load_vectors::<InvalidVectors>("invalid-requests.vectors.json").cases
}

#[test]
fn invalid_requests_report_exact_issues() {
    for case in cases() {
        let errs = validate_request(&case.request)
            .err()
            .unwrap_or_else(|| panic!("{} was accepted", case.name));
        assert_eq!(errs, case.errors, "{}", case.name);
    }
}

#[test]
fn invalid_requests_never_quote() {
    let engine = PricingEngine::default();
    for case in cases() {
        match quote(&engine, &case.request) {
            PricingResponse::Invalid { errors } => assert!(!errors.is_empty(), "{}", case.name),
            PricingResponse::Quote(_) => panic!("{} produced a quote", case.name),
        }
    }
}

#[test]
fn invalid_response_wire_shape() {
    let case = cases().into_iter().next().unwrap();
    let response = quote(&PricingEngine::default(), &case.request);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["status"], "invalid");
    assert_eq!(json["errors"].as_array().unwrap().len(), case.errors.len());
    assert!(json.get("total").is_none());
}
