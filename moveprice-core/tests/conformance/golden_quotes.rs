//! Conformance: golden quote scenarios.
//!
//! Each case is a raw request (possibly stringified, possibly carrying
//! an inline rates override) and the exact presented breakdown the
//! default engine must return for it.

use moveprice_core::{quote, validate_request, PricingBreakdown, PricingEngine, PricingResponse};
use serde::Deserialize;
use serde_json::Value;

use crate::load_vectors;

#[derive(Deserialize)]
struct QuoteVectors {
    #[allow(dead_code)]
    description: String,
    cases: Vec<QuoteCase>,
}

#[derive(Deserialize)]
struct QuoteCase {
    name: String,
    request: Value,
    expected: PricingBreakdown,
}

fn cases() -> Vec<QuoteCase> {
    load_vectors::<QuoteVectors>("quote-scenarios.vectors.json").cases
}

#[test]
fn golden_vectors_present() {
    assert!(cases().len() >= 5, "golden quote vectors went missing");
}

#[test]
fn golden_quotes_match() {
    let engine = PricingEngine::default();
    for case in cases() {
        match quote(&engine, &case.request) {
            PricingResponse::Quote(b) => {
                assert_eq!(b, case.expected, "DRIFT: {}", case.name);
            }
            PricingResponse::Invalid { errors } => {
                panic!("{} rejected: {errors:?}", case.name);
            }
        }
    }
}

#[test]
fn golden_quotes_total_covers_components() {
    for case in cases() {
        let e = &case.expected;
        let sum = e.hourly_cost + e.mileage_cost + e.fuel_cost + e.specialty_item_charges;
        assert!(
            (e.total - sum).abs() <= 0.02 + 1e-9,
            "{}: total {} vs components {sum}",
            case.name,
            e.total
        );
    }
}

#[test]
fn golden_requests_reparse_identically() {
    // Validated inputs serialize to the strict shape and price the same
    // when fed back through the contract.
    let engine = PricingEngine::default();
    for case in cases() {
        let req = validate_request(&case.request).unwrap();
        let mut strict = serde_json::to_value(&req.inputs).unwrap();
        if let Some(rates) = &req.rates {
            strict["rates"] = serde_json::to_value(rates).unwrap();
        }
        let again = quote(&engine, &strict);
        assert_eq!(again.breakdown(), Some(&case.expected), "{}", case.name);
    }
}

#[test]
fn golden_breakdowns_survive_json_round_trip() {
    for case in cases() {
        let text = serde_json::to_string(&PricingResponse::Quote(case.expected.clone())).unwrap();
        let back: PricingResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(back.breakdown(), Some(&case.expected), "{}", case.name);
    }
}
