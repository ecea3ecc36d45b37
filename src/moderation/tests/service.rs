use std::sync::Arc;
use std::thread;

use super::common::*;
use crate::moderation::compliance::ValidationError;
use crate::moderation::domain::{
    Checklist, DocumentId, KycStatus, ListingStatus, ModerationAction, RequestStatus,
    VerificationStatus,
};
use crate::moderation::service::{EntityRef, Moderated, ModerationService, ServiceError};
use crate::moderation::store::StoreError;
use crate::moderation::transition::TransitionError;

#[test]
fn approved_listing_refuses_further_actions() {
    let service = service();
    let listing = service.submit_listing(listing_draft(), None).expect("submit");
    let target = EntityRef::Listing(listing.id.clone());

    match service.apply(&target, ModerationAction::Approve, None) {
        Ok(Moderated::Listing(updated)) => assert_eq!(updated.status, ListingStatus::Approved),
        other => panic!("expected approved listing, got {other:?}"),
    }

    match service.apply(&target, ModerationAction::Reject, Some("bad")) {
        Err(ServiceError::Transition(TransitionError::Terminal { .. })) => {}
        other => panic!("expected terminal error, got {other:?}"),
    }
    let stored = service.store().listing(&listing.id).expect("stored");
    assert_eq!(stored.status, ListingStatus::Approved);
    assert_eq!(stored.moderation_note, None, "refused action writes nothing");
}

#[test]
fn reject_without_reason_leaves_the_listing_untouched() {
    let service = service();
    let listing = service.submit_listing(listing_draft(), None).expect("submit");

    match service.apply(
        &EntityRef::Listing(listing.id.clone()),
        ModerationAction::Reject,
        None,
    ) {
        Err(ServiceError::Transition(TransitionError::ReasonRequired)) => {}
        other => panic!("expected reason error, got {other:?}"),
    }

    let stored = service.store().listing(&listing.id).expect("stored");
    assert_eq!(stored.status, ListingStatus::Pending);
}

#[test]
fn flagging_an_account_floors_risk_without_moving_verification() {
    let service = service();
    let account = service
        .register_account(low_risk_account_draft())
        .expect("register");
    assert!(account.risk_score < 70);

    let updated = match service.apply(
        &EntityRef::Account(account.id.clone()),
        ModerationAction::Flag,
        Some("multiple accounts"),
    ) {
        Ok(Moderated::Account(updated)) => updated,
        other => panic!("expected account update, got {other:?}"),
    };

    assert_eq!(updated.risk_score, 75);
    assert_eq!(updated.flag_reason.as_deref(), Some("multiple accounts"));
    assert_eq!(updated.verification_status, VerificationStatus::Pending);
}

#[test]
fn flagging_never_lowers_an_existing_risk_score() {
    let service = service();
    let account = service
        .register_account(high_risk_account_draft())
        .expect("register");
    let before = account.risk_score;
    assert!(before >= 75, "fixture should start above the floor");

    let updated = match service.apply(
        &EntityRef::Account(account.id.clone()),
        ModerationAction::Flag,
        Some("documents look doctored"),
    ) {
        Ok(Moderated::Account(updated)) => updated,
        other => panic!("expected account update, got {other:?}"),
    };

    assert!(updated.risk_score >= before);
}

#[test]
fn account_approval_waits_for_kyc_submission() {
    let service = service();
    let account = service.register_account(account_draft()).expect("register");
    let target = EntityRef::Account(account.id.clone());

    match service.apply(&target, ModerationAction::Approve, None) {
        Err(ServiceError::Transition(TransitionError::PrereqNotMet { .. })) => {}
        other => panic!("expected prereq error, got {other:?}"),
    }

    service.mark_kyc_submitted(&account.id).expect("kyc submit");
    let updated = match service.apply(&target, ModerationAction::Approve, None) {
        Ok(Moderated::Account(updated)) => updated,
        other => panic!("expected account update, got {other:?}"),
    };
    assert_eq!(updated.verification_status, VerificationStatus::Verified);
    assert_eq!(updated.kyc_status, KycStatus::Verified);
}

#[test]
fn compliance_submission_gates_on_the_checklist() {
    let service = service();
    let listing = service.submit_listing(listing_draft(), None).expect("submit");

    let accepted = service
        .submit_compliance(compliance_draft(listing.id.clone(), complete_checklist()))
        .expect("complete checklist passes the gate");
    assert_eq!(accepted.status, RequestStatus::Pending);

    let refused = service.submit_compliance(compliance_draft(
        listing.id.clone(),
        Checklist {
            terms: false,
            ..complete_checklist()
        },
    ));
    match refused {
        Err(ServiceError::Validation(ValidationError::ChecklistIncomplete { .. })) => {}
        other => panic!("expected checklist error, got {other:?}"),
    }
    // Nothing half-created: only the accepted request is stored.
    assert_eq!(service.store().requests().len(), 1);
}

#[test]
fn approving_a_request_records_the_review() {
    let service = service();
    let listing = service.submit_listing(listing_draft(), None).expect("submit");
    let request = service
        .submit_compliance(compliance_draft(listing.id.clone(), complete_checklist()))
        .expect("submit");

    let updated = match service.apply(
        &EntityRef::Request(request.id.clone()),
        ModerationAction::Approve,
        Some("funds verified with issuing bank"),
    ) {
        Ok(Moderated::Request(updated)) => updated,
        other => panic!("expected request update, got {other:?}"),
    };

    assert_eq!(updated.status, RequestStatus::Approved);
    assert!(updated.reviewed_at.is_some());
    assert_eq!(
        updated.reviewer_notes.as_deref(),
        Some("funds verified with issuing bank")
    );
}

#[test]
fn document_claim_and_review() {
    let service = service();
    let owner = service.register_account(account_draft()).expect("register");
    let document = service
        .submit_document(document_draft(&owner))
        .expect("upload");

    let claimed = service
        .claim_document(&document.id, "ops-reviewer-2")
        .expect("claim pending document");
    assert_eq!(claimed.reviewer.as_deref(), Some("ops-reviewer-2"));

    service
        .apply(
            &EntityRef::Document(document.id.clone()),
            ModerationAction::Reject,
            Some("scan illegible"),
        )
        .expect("reject");

    match service.claim_document(&document.id, "ops-reviewer-3") {
        Err(ServiceError::Transition(TransitionError::Terminal { .. })) => {}
        other => panic!("expected terminal error, got {other:?}"),
    }
}

#[test]
fn unknown_entities_surface_not_found() {
    let service = service();
    match service.apply(
        &EntityRef::Document(DocumentId("doc-missing".to_string())),
        ModerationAction::Approve,
        None,
    ) {
        Err(ServiceError::Store(StoreError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn concurrent_decisions_on_one_listing_serialize() {
    let service = Arc::new(ModerationService::default());
    let listing = service.submit_listing(listing_draft(), None).expect("submit");

    let approve = {
        let service = Arc::clone(&service);
        let target = EntityRef::Listing(listing.id.clone());
        thread::spawn(move || service.apply(&target, ModerationAction::Approve, None))
    };
    let reject = {
        let service = Arc::clone(&service);
        let target = EntityRef::Listing(listing.id.clone());
        thread::spawn(move || service.apply(&target, ModerationAction::Reject, Some("dup")))
    };

    let outcomes = [approve.join().expect("join"), reject.join().expect("join")];
    let successes = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    assert_eq!(successes, 1, "exactly one concurrent decision may win");

    let stored = service.store().listing(&listing.id).expect("stored");
    assert!(stored.status.is_terminal());
}
