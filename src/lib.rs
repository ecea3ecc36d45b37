//! Moderation engine for the aircraft marketplace.
//!
//! Everything submitted to the platform (a listing, a trader account, a KYC
//! document, a buyer compliance request) is a reviewable entity with a fixed
//! state machine. This crate owns those state machines: which operator
//! actions are legal from which state, how automated risk signals are
//! computed at submission time, and how triage queues are derived from the
//! entity store. Routing, forms, transport, and auth live in the host
//! applications; they hand the engine already-validated field data and render
//! whatever it returns.

pub mod config;
pub mod moderation;
pub mod telemetry;

pub use config::{ConfigError, ModerationConfig, TelemetryConfig};
pub use moderation::{
    EntityRef, Moderated, ModerationAction, ModerationService, ModerationStore, RiskAssessor,
    RiskPolicy, ServiceError, StoreError, TransitionError, ValidationError,
};
pub use telemetry::TelemetryError;
