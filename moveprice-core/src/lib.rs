//! Moveprice Core: deterministic moving-job pricing engine.
//!
//! Given a service type, billing category, job volume, distance, access
//! handicaps and optional overrides, the engine produces a single
//! [`PricingBreakdown`]: recommended crew and trucks, base and
//! handicap-adjusted hours, day-split feasibility, hourly rate and an
//! itemized cost total.
//!
//! Every exported function is pure. No IO, no clocks, no global mutable
//! state. Rate tables are injected as immutable [`PricingTables`] so that
//! tenant- or scenario-specific pricing is resolved *before* the call.
//!
//! # Module Map
//!
//! | Module | Role | Status |
//! |--------|------|--------|
//! | [`constants`] | Scalar thresholds and unit percentages | Complete |
//! | [`errors`] | Contract errors and validation issues | Complete |
//! | [`money`] | Presentation rounding | Complete |
//! | [`tables`] | Banded lookups, default tables, rate overrides | Complete |
//! | [`types`] | Value types shared by every stage | Complete |
//! | [`crew`] | Crew size, truck count, base/effective hours | Complete |
//! | [`day_split`] | Local / regional / unknown feasibility | Complete |
//! | [`rate`] | Hourly rate lookup with extrapolation | Complete |
//! | [`cost`] | Hourly, distance and specialty costs | Complete |
//! | [`engine`] | Pipeline entrypoint | Complete |
//! | [`contract`] | Request validation/coercion, response shape | Complete |
//!
//! # Failure Policy
//!
//! Only the contract layer can fail. Once a request is valid the engine
//! always returns a fully populated breakdown; configuration gaps degrade
//! to zero or extrapolated rates and are reported through `tracing`.

/// Scalar pricing constants: radii, hour ceilings, handicap units.
pub mod constants;

/// Error types for contract validation.
pub mod errors;

/// Two-decimal presentation rounding.
pub mod money;

/// Rate and threshold tables, plus the shared band resolver.
pub mod tables;

/// Value types: inputs, day split, breakdown.
pub mod types;

/// Crew/hours resolver.
pub mod crew;

/// Day-split classifier.
pub mod day_split;

/// Hourly rate resolver.
pub mod rate;

/// Cost aggregator.
pub mod cost;

/// Pricing pipeline.
pub mod engine;

/// Request/response contract.
pub mod contract;

pub use contract::{
    quote, validate_rates, validate_request, validate_request_json, PricingRequest,
    PricingResponse,
};
pub use engine::{price_job, PricingEngine};
pub use errors::{PricingError, ValidationIssue};
pub use tables::{PricingTables, RatesConfig};
pub use types::{
    BillingService, DaySplit, DaySplitKind, HandicapParams, JobInputs, PricingBreakdown,
    ServiceType, SpecialtyTier,
};
