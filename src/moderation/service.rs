use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::compliance::{ComplianceRequestWorkflow, ValidationError};
use super::domain::{
    AccountDraft, AccountId, ComplianceDraft, ComplianceRequest, Document, DocumentDraft,
    DocumentId, DocumentStatus, KycStatus, Listing, ListingDraft, ListingId, ListingStatus,
    ModerationAction, RequestId, UserAccount, VerificationStatus,
};
use super::queue::{AccountQueues, DocumentQueues, ListingQueues, RequestQueues};
use super::risk::{AccountSignals, ListingContext, ListingFingerprint, RiskAssessor, RiskPolicy};
use super::store::{ModerationStore, StoreError};
use super::transition::{
    account_transition, document_transition, kyc_submission, listing_transition,
    request_review_started, request_transition, verification_review_started, TransitionError,
};

/// Selects the entity an operator action targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Listing(ListingId),
    Account(AccountId),
    Document(DocumentId),
    Request(RequestId),
}

/// Updated entity returned from a successful action.
#[derive(Debug, Clone, PartialEq)]
pub enum Moderated {
    Listing(Listing),
    Account(UserAccount),
    Document(Document),
    Request(ComplianceRequest),
}

/// Error raised by the moderation facade.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

static LISTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static ACCOUNT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static DOCUMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_id(sequence: &AtomicU64, prefix: &str) -> String {
    let id = sequence.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id:06}")
}

/// Facade composing the store, the risk assessor, and the compliance gate.
///
/// Submissions run the assessor at creation time; operator actions go through
/// the single [`apply`](ModerationService::apply) entry point; queues are
/// derived from store snapshots on demand.
pub struct ModerationService {
    store: Arc<ModerationStore>,
    assessor: RiskAssessor,
    workflow: ComplianceRequestWorkflow,
}

impl Default for ModerationService {
    fn default() -> Self {
        Self::new(RiskPolicy::default())
    }
}

impl ModerationService {
    pub fn new(policy: RiskPolicy) -> Self {
        Self::with_store(Arc::new(ModerationStore::new()), policy)
    }

    pub fn with_store(store: Arc<ModerationStore>, policy: RiskPolicy) -> Self {
        Self {
            store,
            assessor: RiskAssessor::new(policy),
            workflow: ComplianceRequestWorkflow,
        }
    }

    pub fn store(&self) -> &ModerationStore {
        &self.store
    }

    /// Assess and store a new listing. The listing always enters the
    /// pipeline as pending; failed checks mark it as an auto-flag candidate
    /// for the operator rather than moving it themselves.
    pub fn submit_listing(
        &self,
        draft: ListingDraft,
        reference_price: Option<u64>,
    ) -> Result<Listing, ServiceError> {
        let context = ListingContext {
            reference_price,
            existing: self
                .store
                .listings()
                .into_iter()
                .map(|listing| ListingFingerprint {
                    title: listing.title,
                    manufacturer: listing.manufacturer,
                    model: listing.model,
                    price: listing.price,
                })
                .collect(),
        };
        let assessment = self.assessor.assess_listing(&draft, &context);

        let listing = Listing {
            id: ListingId(next_id(&LISTING_SEQUENCE, "lst")),
            title: draft.title,
            manufacturer: draft.manufacturer,
            model: draft.model,
            price: draft.price,
            currency: draft.currency,
            seller_name: draft.seller_name,
            seller_verified: draft.seller_verified,
            description: draft.description,
            specs: draft.specs,
            status: ListingStatus::Pending,
            checks: assessment.checks,
            flags: assessment.flags,
            moderation_note: None,
            submitted_at: Utc::now(),
        };

        self.store.insert_listing(listing.clone())?;
        if assessment.auto_flag_candidate {
            warn!(listing = %listing.id.0, "listing failed automated checks, review recommended");
        } else {
            info!(listing = %listing.id.0, "listing queued for moderation");
        }
        Ok(listing)
    }

    /// Register a trader account, scoring it as it arrives.
    pub fn register_account(&self, draft: AccountDraft) -> Result<UserAccount, ServiceError> {
        let signals = AccountSignals {
            documents_uploaded: draft.documents_uploaded,
            total_documents: draft.total_documents,
            account_age_days: (Utc::now() - draft.registered_at).num_days(),
            previously_flagged: false,
        };
        let risk_score = self.assessor.assess_account(&signals);

        let account = UserAccount {
            id: AccountId(next_id(&ACCOUNT_SEQUENCE, "acc")),
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            company: draft.company,
            business_type: draft.business_type,
            country: draft.country,
            registered_at: draft.registered_at,
            verification_status: VerificationStatus::Pending,
            kyc_status: KycStatus::Pending,
            documents_uploaded: draft.documents_uploaded,
            total_documents: draft.total_documents,
            risk_score,
            flag_reason: None,
            rejection_reason: None,
            last_activity: Utc::now(),
        };

        self.store.insert_account(account.clone())?;
        info!(account = %account.id.0, risk = account.risk_score, "account registered");
        Ok(account)
    }

    /// Store an uploaded verification document as pending review.
    pub fn submit_document(&self, draft: DocumentDraft) -> Result<Document, ServiceError> {
        // Uploads must belong to a known account.
        self.store.account(&draft.owner)?;

        let document = Document {
            id: DocumentId(next_id(&DOCUMENT_SEQUENCE, "doc")),
            owner: draft.owner,
            doc_type: draft.doc_type,
            file_name: draft.file_name,
            uploaded_at: Utc::now(),
            status: DocumentStatus::Pending,
            reviewer: None,
            comments: None,
        };

        self.store.insert_document(document.clone())?;
        Ok(document)
    }

    /// Gate and store a buyer compliance request.
    pub fn submit_compliance(&self, draft: ComplianceDraft) -> Result<ComplianceRequest, ServiceError> {
        let id = RequestId(next_id(&REQUEST_SEQUENCE, "req"));
        let request = self.workflow.submit(id, draft, Utc::now())?;
        self.store.insert_request(request.clone())?;
        info!(request = %request.id.0, listing = %request.listing.0, "compliance request submitted");
        Ok(request)
    }

    /// User-side KYC step: move the packet into review.
    pub fn mark_kyc_submitted(&self, id: &AccountId) -> Result<UserAccount, ServiceError> {
        let updated = self.store.with_account(id, |account| {
            let next = kyc_submission(account.kyc_status)?;
            account.kyc_status = next;
            account.last_activity = Utc::now();
            Ok::<_, TransitionError>(account.clone())
        })??;
        Ok(updated)
    }

    /// Operator takes a pending account into detailed review.
    pub fn begin_account_review(&self, id: &AccountId) -> Result<UserAccount, ServiceError> {
        let updated = self.store.with_account(id, |account| {
            let next = verification_review_started(account.verification_status)?;
            account.verification_status = next;
            Ok::<_, TransitionError>(account.clone())
        })??;
        Ok(updated)
    }

    /// Operator opens a pending compliance request for detailed review.
    pub fn begin_request_review(&self, id: &RequestId) -> Result<ComplianceRequest, ServiceError> {
        let updated = self.store.with_request(id, |request| {
            let next = request_review_started(request.status)?;
            request.status = next;
            Ok::<_, TransitionError>(request.clone())
        })??;
        Ok(updated)
    }

    /// Assign a reviewer to a pending document.
    pub fn claim_document(&self, id: &DocumentId, reviewer: &str) -> Result<Document, ServiceError> {
        let updated = self.store.with_document(id, |document| {
            if document.status.is_terminal() {
                return Err(TransitionError::Terminal {
                    status: document.status.label(),
                });
            }
            document.reviewer = Some(reviewer.to_string());
            Ok(document.clone())
        })??;
        Ok(updated)
    }

    /// Touch an account's activity timestamp.
    pub fn record_activity(&self, id: &AccountId) -> Result<(), ServiceError> {
        self.store.with_account(id, |account| {
            account.last_activity = Utc::now();
        })?;
        Ok(())
    }

    /// Single operator entry point: validate the action against the entity's
    /// current state and apply it atomically, or refuse without touching it.
    pub fn apply(
        &self,
        target: &EntityRef,
        action: ModerationAction,
        reason: Option<&str>,
    ) -> Result<Moderated, ServiceError> {
        let outcome = match target {
            EntityRef::Listing(id) => self
                .store
                .with_listing(id, |listing| {
                    let change = listing_transition(listing.status, action, reason)?;
                    listing.status = change.status;
                    if change.note.is_some() {
                        listing.moderation_note = change.note;
                    }
                    Ok::<_, TransitionError>(Moderated::Listing(listing.clone()))
                })?
                .map_err(ServiceError::from),
            EntityRef::Account(id) => self
                .store
                .with_account(id, |account| {
                    let change = account_transition(account, action, reason)?;
                    if let Some(verification) = change.verification {
                        account.verification_status = verification;
                    }
                    if let Some(kyc) = change.kyc {
                        account.kyc_status = kyc;
                    }
                    if change.flag_reason.is_some() {
                        account.flag_reason = change.flag_reason;
                    }
                    if change.rejection_reason.is_some() {
                        account.rejection_reason = change.rejection_reason;
                    }
                    if let Some(floor) = change.risk_floor {
                        account.risk_score = account.risk_score.max(floor).min(100);
                    }
                    Ok::<_, TransitionError>(Moderated::Account(account.clone()))
                })?
                .map_err(ServiceError::from),
            EntityRef::Document(id) => self
                .store
                .with_document(id, |document| {
                    let change = document_transition(document.status, action, reason)?;
                    document.status = change.status;
                    if change.comments.is_some() {
                        document.comments = change.comments;
                    }
                    Ok::<_, TransitionError>(Moderated::Document(document.clone()))
                })?
                .map_err(ServiceError::from),
            EntityRef::Request(id) => self
                .store
                .with_request(id, |request| {
                    let change = request_transition(request.status, action, reason)?;
                    request.status = change.status;
                    request.reviewed_at = Some(Utc::now());
                    if change.notes.is_some() {
                        request.reviewer_notes = change.notes;
                    }
                    Ok::<_, TransitionError>(Moderated::Request(request.clone()))
                })?
                .map_err(ServiceError::from),
        };

        match &outcome {
            Ok(_) => info!(action = action.label(), "moderation action applied"),
            Err(error) => warn!(action = action.label(), %error, "moderation action refused"),
        }
        outcome
    }

    pub fn listing_queues(&self) -> ListingQueues {
        ListingQueues::partition(self.store.listings())
    }

    pub fn account_queues(&self) -> AccountQueues {
        AccountQueues::partition(self.store.accounts())
    }

    pub fn document_queues(&self) -> DocumentQueues {
        DocumentQueues::partition(self.store.documents())
    }

    pub fn request_queues(&self) -> RequestQueues {
        RequestQueues::partition(self.store.requests())
    }
}
