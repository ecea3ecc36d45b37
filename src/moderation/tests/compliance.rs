use chrono::Utc;

use super::common::*;
use crate::moderation::compliance::{
    ChecklistItem, ComplianceRequestWorkflow, ValidationError,
};
use crate::moderation::domain::{Checklist, ListingId, RequestId, RequestStatus};

fn submit(checklist: Checklist) -> Result<RequestStatus, ValidationError> {
    let workflow = ComplianceRequestWorkflow;
    workflow
        .submit(
            RequestId("req-test".to_string()),
            compliance_draft(ListingId("lst-test".to_string()), checklist),
            Utc::now(),
        )
        .map(|request| request.status)
}

#[test]
fn complete_checklist_yields_a_pending_request() {
    assert_eq!(submit(complete_checklist()), Ok(RequestStatus::Pending));
}

#[test]
fn financing_substitutes_for_cash() {
    let checklist = Checklist {
        cash_available: false,
        financing: true,
        ..complete_checklist()
    };
    assert_eq!(submit(checklist), Ok(RequestStatus::Pending));
}

#[test]
fn missing_proof_of_funds_blocks_submission() {
    let checklist = Checklist {
        proof_of_funds: false,
        ..complete_checklist()
    };
    match submit(checklist) {
        Err(ValidationError::ChecklistIncomplete { missing }) => {
            assert_eq!(missing, vec![ChecklistItem::ProofOfFunds]);
        }
        other => panic!("expected incomplete checklist, got {other:?}"),
    }
}

#[test]
fn unchecked_terms_block_submission() {
    let checklist = Checklist {
        terms: false,
        ..complete_checklist()
    };
    match submit(checklist) {
        Err(ValidationError::ChecklistIncomplete { missing }) => {
            assert_eq!(missing, vec![ChecklistItem::Terms]);
        }
        other => panic!("expected incomplete checklist, got {other:?}"),
    }
}

#[test]
fn every_missing_attestation_is_named() {
    match submit(Checklist::default()) {
        Err(ValidationError::ChecklistIncomplete { missing }) => {
            assert_eq!(
                missing,
                vec![
                    ChecklistItem::ProofOfFunds,
                    ChecklistItem::LetterOfIntent,
                    ChecklistItem::Terms,
                    ChecklistItem::FundingSource,
                ]
            );
        }
        other => panic!("expected incomplete checklist, got {other:?}"),
    }
}

#[test]
fn incomplete_error_message_lists_the_items() {
    let error = submit(Checklist {
        letter_of_intent: false,
        ..complete_checklist()
    })
    .expect_err("gate refuses");
    assert!(error.to_string().contains("letter of intent"));
}

#[test]
fn optional_attestations_do_not_gate() {
    let checklist = Checklist {
        nda: false,
        inspection: false,
        ..complete_checklist()
    };
    assert_eq!(submit(checklist), Ok(RequestStatus::Pending));
}
