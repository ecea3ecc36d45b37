//! Derived triage queues.
//!
//! Queues are never stored; they are pure views computed from store
//! snapshots, so moving an entity can never leave a stale copy behind in a
//! parallel list. Ordering within each queue is submission order.

use serde::Serialize;

use super::domain::{
    ComplianceRequest, Document, DocumentStatus, KycStatus, Listing, ListingStatus, RequestStatus,
    UserAccount, VerificationStatus,
};
use super::risk::is_high_risk;

/// Size of one named queue, for dashboard badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueSummary {
    pub name: &'static str,
    pub count: usize,
}

/// Listing moderation pipeline. A strict partition: every listing appears in
/// exactly one queue, except approved listings which are live and excluded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingQueues {
    pub pending: Vec<Listing>,
    pub flagged: Vec<Listing>,
    pub rejected: Vec<Listing>,
}

impl ListingQueues {
    pub fn partition(listings: Vec<Listing>) -> Self {
        let mut queues = Self::default();
        for listing in listings {
            match listing.status {
                ListingStatus::Pending => queues.pending.push(listing),
                ListingStatus::Flagged => queues.flagged.push(listing),
                ListingStatus::Rejected => queues.rejected.push(listing),
                ListingStatus::Approved => {}
            }
        }
        queues
    }

    pub fn summary(&self) -> Vec<QueueSummary> {
        vec![
            QueueSummary {
                name: "pending",
                count: self.pending.len(),
            },
            QueueSummary {
                name: "flagged",
                count: self.flagged.len(),
            },
            QueueSummary {
                name: "rejected",
                count: self.rejected.len(),
            },
        ]
    }
}

/// Account triage views. Unlike listings these overlap: an account awaiting
/// verification can simultaneously sit in the flagged queue on risk alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountQueues {
    pub pending_verification: Vec<UserAccount>,
    pub flagged: Vec<UserAccount>,
}

impl AccountQueues {
    pub fn partition(accounts: Vec<UserAccount>) -> Self {
        let mut queues = Self::default();
        for account in accounts {
            let awaiting = account.verification_status == VerificationStatus::Pending
                || account.kyc_status == KycStatus::Submitted;
            let flagged = account.flag_reason.is_some() || is_high_risk(account.risk_score);

            if awaiting && flagged {
                queues.pending_verification.push(account.clone());
                queues.flagged.push(account);
            } else if awaiting {
                queues.pending_verification.push(account);
            } else if flagged {
                queues.flagged.push(account);
            }
        }
        queues
    }

    pub fn summary(&self) -> Vec<QueueSummary> {
        vec![
            QueueSummary {
                name: "pending_verification",
                count: self.pending_verification.len(),
            },
            QueueSummary {
                name: "flagged",
                count: self.flagged.len(),
            },
        ]
    }
}

/// Document review backlog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentQueues {
    pub pending_documents: Vec<Document>,
}

impl DocumentQueues {
    pub fn partition(documents: Vec<Document>) -> Self {
        Self {
            pending_documents: documents
                .into_iter()
                .filter(|document| document.status == DocumentStatus::Pending)
                .collect(),
        }
    }

    pub fn summary(&self) -> Vec<QueueSummary> {
        vec![QueueSummary {
            name: "pending_documents",
            count: self.pending_documents.len(),
        }]
    }
}

/// Open compliance requests awaiting a decision.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestQueues {
    pub pending: Vec<ComplianceRequest>,
    pub in_review: Vec<ComplianceRequest>,
}

impl RequestQueues {
    pub fn partition(requests: Vec<ComplianceRequest>) -> Self {
        let mut queues = Self::default();
        for request in requests {
            match request.status {
                RequestStatus::Pending => queues.pending.push(request),
                RequestStatus::InReview => queues.in_review.push(request),
                RequestStatus::Approved | RequestStatus::Rejected => {}
            }
        }
        queues
    }

    pub fn summary(&self) -> Vec<QueueSummary> {
        vec![
            QueueSummary {
                name: "pending",
                count: self.pending.len(),
            },
            QueueSummary {
                name: "in_review",
                count: self.in_review.len(),
            },
        ]
    }
}
