//! Automated risk signals: listing auto-checks and the account risk score.
//!
//! Everything here is referentially transparent. The assessor owns only its
//! policy; given the same draft and context it always produces the same
//! assessment, so it can be re-run freely from tests or concurrent callers.

mod config;
mod rules;

pub use config::RiskPolicy;

use serde::{Deserialize, Serialize};

use super::domain::{CheckResults, ListingDraft, ListingFlags};

/// Scores at or above this value are treated as high risk everywhere a
/// risk score is displayed or queued.
pub const HIGH_RISK_THRESHOLD: u8 = 70;

/// Marketplace context the listing checks compare a draft against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingContext {
    /// Market reference price for the airframe, when one is known.
    pub reference_price: Option<u64>,
    /// Fingerprints of listings already on the platform.
    pub existing: Vec<ListingFingerprint>,
}

/// Just enough of an existing listing to detect duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingFingerprint {
    pub title: String,
    pub manufacturer: String,
    pub model: String,
    pub price: u64,
}

/// Signals feeding the account risk composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSignals {
    pub documents_uploaded: u8,
    pub total_documents: u8,
    pub account_age_days: i64,
    pub previously_flagged: bool,
}

/// Assessment attached to a listing at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingAssessment {
    pub checks: CheckResults,
    pub flags: ListingFlags,
    /// True when any check failed; the console surfaces these for flagging.
    pub auto_flag_candidate: bool,
}

/// Stateless evaluator applying the risk policy to entity attributes.
#[derive(Debug, Clone)]
pub struct RiskAssessor {
    policy: RiskPolicy,
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::new(RiskPolicy::default())
    }
}

impl RiskAssessor {
    pub fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    pub fn assess_listing(&self, draft: &ListingDraft, context: &ListingContext) -> ListingAssessment {
        let checks = rules::listing_checks(draft, context, &self.policy);
        let flags = rules::flags_for(&checks);
        ListingAssessment {
            auto_flag_candidate: checks.any_failed(),
            checks,
            flags,
        }
    }

    /// Weighted composite over document completeness, account age, and any
    /// prior manual flag. Always lands in `[0, 100]`.
    pub fn assess_account(&self, signals: &AccountSignals) -> u8 {
        rules::account_risk(signals, &self.policy)
    }
}

/// High-risk accounts surface in the flagged queue regardless of status.
pub fn is_high_risk(risk_score: u8) -> bool {
    risk_score >= HIGH_RISK_THRESHOLD
}
