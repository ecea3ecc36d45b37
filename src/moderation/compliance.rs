//! Pre-submission gate for buyer compliance requests.
//!
//! A draft only becomes a pending request once the required attestations are
//! all affirmed; an incomplete checklist creates nothing at all.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::domain::{Checklist, ComplianceDraft, ComplianceRequest, RequestId, RequestStatus};

/// Attestations the gate can report as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItem {
    ProofOfFunds,
    LetterOfIntent,
    Terms,
    FundingSource,
}

impl ChecklistItem {
    pub const fn label(self) -> &'static str {
        match self {
            ChecklistItem::ProofOfFunds => "proof of funds",
            ChecklistItem::LetterOfIntent => "letter of intent",
            ChecklistItem::Terms => "terms acceptance",
            ChecklistItem::FundingSource => "cash or financing confirmation",
        }
    }
}

/// Why a compliance draft was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("compliance checklist incomplete: missing {}", format_items(.missing))]
    ChecklistIncomplete { missing: Vec<ChecklistItem> },
}

fn format_items(items: &[ChecklistItem]) -> String {
    items
        .iter()
        .map(|item| item.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn missing_items(checklist: &Checklist) -> Vec<ChecklistItem> {
    let mut missing = Vec::new();
    if !checklist.proof_of_funds {
        missing.push(ChecklistItem::ProofOfFunds);
    }
    if !checklist.letter_of_intent {
        missing.push(ChecklistItem::LetterOfIntent);
    }
    if !checklist.terms {
        missing.push(ChecklistItem::Terms);
    }
    if !checklist.cash_available && !checklist.financing {
        missing.push(ChecklistItem::FundingSource);
    }
    missing
}

/// Gatekeeper turning compliance drafts into pending requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceRequestWorkflow;

impl ComplianceRequestWorkflow {
    /// Validate the checklist and build the pending request. The caller
    /// assigns the id and timestamp so the workflow stays deterministic.
    pub fn submit(
        &self,
        id: RequestId,
        draft: ComplianceDraft,
        submitted_at: DateTime<Utc>,
    ) -> Result<ComplianceRequest, ValidationError> {
        let missing = missing_items(&draft.checklist);
        if !missing.is_empty() {
            return Err(ValidationError::ChecklistIncomplete { missing });
        }

        Ok(ComplianceRequest {
            id,
            listing: draft.listing,
            buyer_name: draft.buyer_name,
            buyer_email: draft.buyer_email,
            buyer_phone: draft.buyer_phone,
            company: draft.company,
            broker_license: draft.broker_license,
            timeline: draft.timeline,
            checklist: draft.checklist,
            status: RequestStatus::Pending,
            submitted_at,
            reviewed_at: None,
            reviewer_notes: None,
        })
    }
}
