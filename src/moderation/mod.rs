//! The reviewable-entity moderation engine.
//!
//! Listings, trader accounts, KYC documents, and buyer compliance requests
//! all move through fixed per-kind state machines. This module owns the
//! transition tables, the automated risk signals, the derived triage queues,
//! and the service facade the marketplace and admin console call into.

pub mod compliance;
pub mod domain;
pub mod queue;
pub mod risk;
pub mod store;
pub mod transition;

pub mod service;

#[cfg(test)]
mod tests;

pub use compliance::{ChecklistItem, ComplianceRequestWorkflow, ValidationError};
pub use domain::{
    AccountDraft, AccountId, AircraftSpecs, CheckOutcome, CheckResults, Checklist,
    ComplianceDraft, ComplianceRequest, Document, DocumentDraft, DocumentId, DocumentStatus,
    KycStatus, Listing, ListingDraft, ListingFlags, ListingId, ListingStatus, ModerationAction,
    RequestId, RequestStatus, UserAccount, VerificationStatus,
};
pub use queue::{AccountQueues, DocumentQueues, ListingQueues, QueueSummary, RequestQueues};
pub use risk::{
    AccountSignals, ListingAssessment, ListingContext, ListingFingerprint, RiskAssessor,
    RiskPolicy, HIGH_RISK_THRESHOLD,
};
pub use service::{EntityRef, Moderated, ModerationService, ServiceError};
pub use store::{ModerationStore, StoreError};
pub use transition::{TransitionError, FLAG_RISK_FLOOR};
