use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for marketplace listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// Identifier wrapper for trader accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

/// Identifier wrapper for uploaded verification documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// Identifier wrapper for buyer compliance requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

/// Operator actions accepted by the transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    Approve,
    Reject,
    Flag,
}

impl ModerationAction {
    pub const fn label(self) -> &'static str {
        match self {
            ModerationAction::Approve => "approve",
            ModerationAction::Reject => "reject",
            ModerationAction::Flag => "flag",
        }
    }
}

/// Review status for a marketplace listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
    Flagged,
}

impl ListingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ListingStatus::Pending => "pending",
            ListingStatus::Approved => "approved",
            ListingStatus::Rejected => "rejected",
            ListingStatus::Flagged => "flagged",
        }
    }

    /// Approved and rejected listings leave the moderation pipeline for good.
    pub const fn is_terminal(self) -> bool {
        matches!(self, ListingStatus::Approved | ListingStatus::Rejected)
    }
}

/// Account verification status driven by operator review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
    UnderReview,
}

impl VerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
            VerificationStatus::UnderReview => "under_review",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, VerificationStatus::Verified | VerificationStatus::Rejected)
    }
}

/// KYC document-set status; cycles independently of `VerificationStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    Submitted,
    Verified,
    Rejected,
}

impl KycStatus {
    pub const fn label(self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::Submitted => "submitted",
            KycStatus::Verified => "verified",
            KycStatus::Rejected => "rejected",
        }
    }
}

/// Review status for a single uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, DocumentStatus::Approved | DocumentStatus::Rejected)
    }
}

/// Status of a buyer compliance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    InReview,
}

impl RequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::InReview => "in_review",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Approved | RequestStatus::Rejected)
    }
}

/// Outcome of one automated listing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    Pass,
    Warning,
    Fail,
}

/// Automated check results computed at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResults {
    pub price: CheckOutcome,
    pub duplicate: CheckOutcome,
    pub quality: CheckOutcome,
    pub completeness: CheckOutcome,
}

impl CheckResults {
    pub fn all_pass(&self) -> bool {
        [self.price, self.duplicate, self.quality, self.completeness]
            .iter()
            .all(|outcome| *outcome == CheckOutcome::Pass)
    }

    pub fn any_failed(&self) -> bool {
        [self.price, self.duplicate, self.quality, self.completeness]
            .iter()
            .any(|outcome| *outcome == CheckOutcome::Fail)
    }
}

/// Boolean badges implied by check failures; kept consistent with `CheckResults`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFlags {
    pub suspicious_price: bool,
    pub duplicate_content: bool,
    pub poor_quality: bool,
    pub missing_info: bool,
}

impl ListingFlags {
    pub fn any(&self) -> bool {
        self.suspicious_price || self.duplicate_content || self.poor_quality || self.missing_info
    }
}

/// Airframe basics shown on moderation cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftSpecs {
    pub year: u16,
    pub flight_hours: u32,
    pub seats: u16,
}

/// A listing under moderation, as stored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub manufacturer: String,
    pub model: String,
    pub price: u64,
    pub currency: String,
    pub seller_name: String,
    pub seller_verified: bool,
    pub description: String,
    pub specs: AircraftSpecs,
    pub status: ListingStatus,
    pub checks: CheckResults,
    pub flags: ListingFlags,
    pub moderation_note: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Already-validated listing form fields, before assessment and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub manufacturer: String,
    pub model: String,
    pub price: u64,
    pub currency: String,
    pub seller_name: String,
    pub seller_verified: bool,
    pub description: String,
    pub specs: AircraftSpecs,
}

/// A trader account subject to verification and KYC review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: AccountId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub business_type: String,
    pub country: String,
    pub registered_at: DateTime<Utc>,
    pub verification_status: VerificationStatus,
    pub kyc_status: KycStatus,
    pub documents_uploaded: u8,
    pub total_documents: u8,
    /// 0-100, higher means more scrutiny warranted.
    pub risk_score: u8,
    pub flag_reason: Option<String>,
    pub rejection_reason: Option<String>,
    pub last_activity: DateTime<Utc>,
}

/// Registration form fields for a new trader account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub business_type: String,
    pub country: String,
    pub registered_at: DateTime<Utc>,
    pub documents_uploaded: u8,
    pub total_documents: u8,
}

/// An uploaded verification document awaiting review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub owner: AccountId,
    pub doc_type: String,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub status: DocumentStatus,
    pub reviewer: Option<String>,
    pub comments: Option<String>,
}

/// Upload metadata for a new verification document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub owner: AccountId,
    pub doc_type: String,
    pub file_name: String,
}

/// Attestations a buyer affirms before a compliance request may be submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub cash_available: bool,
    pub financing: bool,
    pub proof_of_funds: bool,
    pub letter_of_intent: bool,
    pub nda: bool,
    pub terms: bool,
    pub inspection: bool,
}

/// A buyer compliance request tied to one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRequest {
    pub id: RequestId,
    pub listing: ListingId,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub company: Option<String>,
    pub broker_license: Option<String>,
    pub timeline: Option<String>,
    pub checklist: Checklist,
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewer_notes: Option<String>,
}

/// Compliance form fields collected from the buyer, pre-gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceDraft {
    pub listing: ListingId,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub company: Option<String>,
    pub broker_license: Option<String>,
    pub timeline: Option<String>,
    pub checklist: Checklist,
}
