//! Conformance: every emitted validation message uses a registered stem.

use moveprice_core::errors::{is_registered_message, VALIDATION_MESSAGES};
use moveprice_core::validate_request;
use serde_json::json;

#[test]
fn registry_size() {
    assert_eq!(VALIDATION_MESSAGES.len(), 12);
}

#[test]
fn emitted_messages_are_registered() {
    let requests = [
        json!({}),
        json!(42),
        json!({
            "serviceType": "Rocket",
            "billingService": 7,
            "distanceMiles": "far",
            "cubicFeet": -3,
            "movers": 0,
            "trucks": "1.5",
            "handicaps": "steep",
            "emergencyWithin24h": [],
            "specialtyTiers": {"1": true},
            "rates": 3
        }),
        json!({
            "serviceType": "Full Service",
            "billingService": "Moving",
            "distanceMiles": 1,
            "cubicFeet": 1,
            "handicaps": {"stairsFlights": "x", "hasElevator": 2},
            "specialtyTiers": [9],
            "rates": {"bogus": 1}
        }),
        json!({
            "serviceType": "Full Service",
            "billingService": "Moving",
            "distanceMiles": 1e9,
            "cubicFeet": "2e6",
            "rates": {"additionalTruckHourlyRate": 1e12}
        }),
    ];
    let mut seen = 0;
    for req in &requests {
        for issue in validate_request(req).unwrap_err() {
            assert!(
                is_registered_message(&issue.message),
                "unregistered message at {}: {}",
                issue.path,
                issue.message
            );
            seen += 1;
        }
    }
    assert!(seen >= 18);
}
