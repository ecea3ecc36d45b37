//! Per-kind transition tables for the moderation state machine.
//!
//! Every function here is pure: it inspects a status snapshot and produces
//! either the change to apply or a typed refusal. Callers apply the change
//! under the entity lock so an action lands atomically or not at all.

use thiserror::Error;

use super::domain::{
    DocumentStatus, KycStatus, ListingStatus, ModerationAction, RequestStatus, UserAccount,
    VerificationStatus,
};

/// Flagging an account floors its risk score at this value.
pub const FLAG_RISK_FLOOR: u8 = 75;

/// Why a requested action was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a non-empty reason is required for this action")]
    ReasonRequired,
    #[error("no further actions accepted from terminal status '{status}'")]
    Terminal { status: &'static str },
    #[error("prerequisite step missing: {requirement}")]
    PrereqNotMet { requirement: String },
}

fn require_reason(reason: Option<&str>) -> Result<String, TransitionError> {
    match reason {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(TransitionError::ReasonRequired),
    }
}

/// Status update for a listing, plus the note recorded alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingChange {
    pub status: ListingStatus,
    pub note: Option<String>,
}

pub fn listing_transition(
    current: ListingStatus,
    action: ModerationAction,
    reason: Option<&str>,
) -> Result<ListingChange, TransitionError> {
    if current.is_terminal() {
        return Err(TransitionError::Terminal {
            status: current.label(),
        });
    }

    match action {
        ModerationAction::Approve => Ok(ListingChange {
            status: ListingStatus::Approved,
            note: None,
        }),
        ModerationAction::Reject => {
            let note = require_reason(reason)?;
            Ok(ListingChange {
                status: ListingStatus::Rejected,
                note: Some(note),
            })
        }
        ModerationAction::Flag => {
            if current == ListingStatus::Flagged {
                return Err(TransitionError::PrereqNotMet {
                    requirement: "listing is already flagged".to_string(),
                });
            }
            let note = require_reason(reason)?;
            Ok(ListingChange {
                status: ListingStatus::Flagged,
                note: Some(note),
            })
        }
    }
}

/// Field updates produced by an account action.
///
/// Flagging is a side-channel annotation: it never moves
/// `verification_status`, it only records the reason and floors the risk
/// score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountChange {
    pub verification: Option<VerificationStatus>,
    pub kyc: Option<KycStatus>,
    pub flag_reason: Option<String>,
    pub rejection_reason: Option<String>,
    pub risk_floor: Option<u8>,
}

pub fn account_transition(
    account: &UserAccount,
    action: ModerationAction,
    reason: Option<&str>,
) -> Result<AccountChange, TransitionError> {
    let current = account.verification_status;
    if current.is_terminal() {
        return Err(TransitionError::Terminal {
            status: current.label(),
        });
    }

    match action {
        ModerationAction::Approve => {
            // Operator approval verifies the KYC packet as well, so the
            // packet must have been submitted first.
            if !matches!(account.kyc_status, KycStatus::Submitted | KycStatus::Verified) {
                return Err(TransitionError::PrereqNotMet {
                    requirement: "KYC documents must be submitted before verification"
                        .to_string(),
                });
            }
            Ok(AccountChange {
                verification: Some(VerificationStatus::Verified),
                kyc: Some(KycStatus::Verified),
                ..AccountChange::default()
            })
        }
        ModerationAction::Reject => {
            let rejection = require_reason(reason)?;
            Ok(AccountChange {
                verification: Some(VerificationStatus::Rejected),
                rejection_reason: Some(rejection),
                ..AccountChange::default()
            })
        }
        ModerationAction::Flag => {
            if current != VerificationStatus::Pending {
                return Err(TransitionError::PrereqNotMet {
                    requirement: "accounts can only be flagged while verification is pending"
                        .to_string(),
                });
            }
            let flag = require_reason(reason)?;
            Ok(AccountChange {
                flag_reason: Some(flag),
                risk_floor: Some(FLAG_RISK_FLOOR),
                ..AccountChange::default()
            })
        }
    }
}

/// Operator takes a pending account into detailed review.
pub fn verification_review_started(
    current: VerificationStatus,
) -> Result<VerificationStatus, TransitionError> {
    match current {
        VerificationStatus::Pending => Ok(VerificationStatus::UnderReview),
        VerificationStatus::UnderReview => Err(TransitionError::PrereqNotMet {
            requirement: "account is already under review".to_string(),
        }),
        VerificationStatus::Verified | VerificationStatus::Rejected => {
            Err(TransitionError::Terminal {
                status: current.label(),
            })
        }
    }
}

/// The user-side KYC step: hand the packet over for review.
///
/// Resubmission after a rejection is allowed; a verified packet is final.
pub fn kyc_submission(current: KycStatus) -> Result<KycStatus, TransitionError> {
    match current {
        KycStatus::Pending | KycStatus::Rejected => Ok(KycStatus::Submitted),
        KycStatus::Submitted => Err(TransitionError::PrereqNotMet {
            requirement: "KYC packet is already awaiting review".to_string(),
        }),
        KycStatus::Verified => Err(TransitionError::Terminal {
            status: KycStatus::Verified.label(),
        }),
    }
}

/// Status update for a document, plus reviewer comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentChange {
    pub status: DocumentStatus,
    pub comments: Option<String>,
}

pub fn document_transition(
    current: DocumentStatus,
    action: ModerationAction,
    reason: Option<&str>,
) -> Result<DocumentChange, TransitionError> {
    if current.is_terminal() {
        return Err(TransitionError::Terminal {
            status: current.label(),
        });
    }

    match action {
        ModerationAction::Approve => Ok(DocumentChange {
            status: DocumentStatus::Approved,
            comments: reason.map(str::to_string),
        }),
        ModerationAction::Reject => {
            let comments = require_reason(reason)?;
            Ok(DocumentChange {
                status: DocumentStatus::Rejected,
                comments: Some(comments),
            })
        }
        ModerationAction::Flag => Err(TransitionError::PrereqNotMet {
            requirement: "documents do not support flagging".to_string(),
        }),
    }
}

/// Status update for a compliance request, plus reviewer notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestChange {
    pub status: RequestStatus,
    pub notes: Option<String>,
}

pub fn request_transition(
    current: RequestStatus,
    action: ModerationAction,
    reason: Option<&str>,
) -> Result<RequestChange, TransitionError> {
    if current.is_terminal() {
        return Err(TransitionError::Terminal {
            status: current.label(),
        });
    }

    match action {
        ModerationAction::Approve => Ok(RequestChange {
            status: RequestStatus::Approved,
            notes: reason.map(str::to_string),
        }),
        ModerationAction::Reject => {
            let notes = require_reason(reason)?;
            Ok(RequestChange {
                status: RequestStatus::Rejected,
                notes: Some(notes),
            })
        }
        ModerationAction::Flag => Err(TransitionError::PrereqNotMet {
            requirement: "compliance requests do not support flagging".to_string(),
        }),
    }
}

/// Operator opens a pending request for detailed review.
pub fn request_review_started(current: RequestStatus) -> Result<RequestStatus, TransitionError> {
    match current {
        RequestStatus::Pending => Ok(RequestStatus::InReview),
        RequestStatus::InReview => Err(TransitionError::PrereqNotMet {
            requirement: "request is already under review".to_string(),
        }),
        RequestStatus::Approved | RequestStatus::Rejected => Err(TransitionError::Terminal {
            status: current.label(),
        }),
    }
}
