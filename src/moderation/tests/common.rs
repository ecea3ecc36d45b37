use chrono::{Duration, Utc};

use crate::moderation::domain::{
    AccountDraft, AircraftSpecs, Checklist, ComplianceDraft, DocumentDraft, ListingDraft,
    ListingId, UserAccount,
};
use crate::moderation::risk::RiskPolicy;
use crate::moderation::service::ModerationService;

pub(super) fn service() -> ModerationService {
    ModerationService::new(RiskPolicy::default())
}

pub(super) fn listing_draft() -> ListingDraft {
    ListingDraft {
        title: "2018 Boeing 737-800, excellent condition".to_string(),
        manufacturer: "Boeing".to_string(),
        model: "737-800".to_string(),
        price: 45_000_000,
        currency: "USD".to_string(),
        seller_name: "Global Aviation Ltd".to_string(),
        seller_verified: true,
        description: "Well maintained narrowbody fresh from a C-check, complete maintenance \
                      records since delivery, two owners, always hangar stored, engines on \
                      condition with recent borescope reports available on request."
            .to_string(),
        specs: AircraftSpecs {
            year: 2018,
            flight_hours: 21_000,
            seats: 189,
        },
    }
}

/// Clean registration: all documents in, account older than the young-account
/// window, so the composite lands at zero.
pub(super) fn account_draft() -> AccountDraft {
    AccountDraft {
        first_name: "Maria".to_string(),
        last_name: "Rodriguez".to_string(),
        email: "maria.rodriguez@iberiaair.com".to_string(),
        company: "Iberia Airlines".to_string(),
        business_type: "airline".to_string(),
        country: "Spain".to_string(),
        registered_at: Utc::now() - Duration::days(90),
        documents_uploaded: 8,
        total_documents: 8,
    }
}

/// Brand-new account with nothing uploaded; scores above the high-risk line.
pub(super) fn high_risk_account_draft() -> AccountDraft {
    AccountDraft {
        first_name: "Ahmed".to_string(),
        last_name: "Al-Rashid".to_string(),
        email: "ahmed@quickairtrading.ae".to_string(),
        company: "Quick Air Trading".to_string(),
        business_type: "broker".to_string(),
        country: "UAE".to_string(),
        registered_at: Utc::now(),
        documents_uploaded: 0,
        total_documents: 8,
    }
}

/// Partially documented, mature account; lands well below the high-risk line.
pub(super) fn low_risk_account_draft() -> AccountDraft {
    AccountDraft {
        documents_uploaded: 6,
        ..account_draft()
    }
}

pub(super) fn document_draft(owner: &UserAccount) -> DocumentDraft {
    DocumentDraft {
        owner: owner.id.clone(),
        doc_type: "Corporate Registration".to_string(),
        file_name: "corp_registration.pdf".to_string(),
    }
}

pub(super) fn complete_checklist() -> Checklist {
    Checklist {
        cash_available: true,
        financing: false,
        proof_of_funds: true,
        letter_of_intent: true,
        nda: true,
        terms: true,
        inspection: false,
    }
}

pub(super) fn compliance_draft(listing: ListingId, checklist: Checklist) -> ComplianceDraft {
    ComplianceDraft {
        listing,
        buyer_name: "James Chen".to_string(),
        buyer_email: "j.chen@pacificcharter.com".to_string(),
        buyer_phone: Some("+1 415 555 0137".to_string()),
        company: Some("Pacific Charter Group".to_string()),
        broker_license: None,
        timeline: Some("60 days".to_string()),
        checklist,
    }
}
