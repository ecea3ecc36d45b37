use super::super::domain::{CheckOutcome, CheckResults, ListingDraft, ListingFlags};
use super::config::RiskPolicy;
use super::{AccountSignals, ListingContext};

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

fn price_check(draft: &ListingDraft, context: &ListingContext, policy: &RiskPolicy) -> CheckOutcome {
    let Some(reference) = context.reference_price else {
        // Nothing to benchmark against; leave it for the operator.
        return CheckOutcome::Warning;
    };
    if reference == 0 {
        return CheckOutcome::Warning;
    }

    let deviation = ((draft.price as f64) - (reference as f64)).abs() / reference as f64;
    if deviation >= policy.price_deviation_failure {
        CheckOutcome::Fail
    } else if deviation >= policy.price_deviation_warning {
        CheckOutcome::Warning
    } else {
        CheckOutcome::Pass
    }
}

fn duplicate_check(draft: &ListingDraft, context: &ListingContext) -> CheckOutcome {
    let title = normalize(&draft.title);
    let mut same_airframe_and_price = false;

    for existing in &context.existing {
        if normalize(&existing.title) == title {
            return CheckOutcome::Fail;
        }
        if existing.manufacturer.eq_ignore_ascii_case(&draft.manufacturer)
            && existing.model.eq_ignore_ascii_case(&draft.model)
            && existing.price == draft.price
        {
            same_airframe_and_price = true;
        }
    }

    if same_airframe_and_price {
        CheckOutcome::Warning
    } else {
        CheckOutcome::Pass
    }
}

fn quality_check(draft: &ListingDraft, policy: &RiskPolicy) -> CheckOutcome {
    let length = draft.description.trim().chars().count();
    if length < policy.short_description_chars {
        CheckOutcome::Fail
    } else if length < policy.min_description_chars {
        CheckOutcome::Warning
    } else {
        CheckOutcome::Pass
    }
}

fn completeness_check(draft: &ListingDraft, policy: &RiskPolicy) -> CheckOutcome {
    let missing = [
        draft.title.trim().is_empty(),
        draft.manufacturer.trim().is_empty(),
        draft.model.trim().is_empty(),
        draft.currency.trim().is_empty(),
        draft.price == 0,
        draft.specs.year == 0,
        draft.specs.seats == 0,
    ]
    .iter()
    .filter(|absent| **absent)
    .count();

    if missing == 0 {
        CheckOutcome::Pass
    } else if missing <= policy.max_missing_fields {
        CheckOutcome::Warning
    } else {
        CheckOutcome::Fail
    }
}

pub(crate) fn listing_checks(
    draft: &ListingDraft,
    context: &ListingContext,
    policy: &RiskPolicy,
) -> CheckResults {
    CheckResults {
        price: price_check(draft, context, policy),
        duplicate: duplicate_check(draft, context),
        quality: quality_check(draft, policy),
        completeness: completeness_check(draft, policy),
    }
}

/// A failed check implies the matching badge; warnings and passes do not.
pub(crate) fn flags_for(checks: &CheckResults) -> ListingFlags {
    ListingFlags {
        suspicious_price: checks.price == CheckOutcome::Fail,
        duplicate_content: checks.duplicate == CheckOutcome::Fail,
        poor_quality: checks.quality == CheckOutcome::Fail,
        missing_info: checks.completeness == CheckOutcome::Fail,
    }
}

pub(crate) fn account_risk(signals: &AccountSignals, policy: &RiskPolicy) -> u8 {
    let missing_ratio = if signals.total_documents == 0 {
        1.0
    } else {
        let uploaded = signals.documents_uploaded.min(signals.total_documents);
        1.0 - (uploaded as f64 / signals.total_documents as f64)
    };

    let youth = if policy.young_account_days <= 0 || signals.account_age_days >= policy.young_account_days
    {
        0.0
    } else {
        let age = signals.account_age_days.max(0) as f64;
        1.0 - age / policy.young_account_days as f64
    };

    let mut score = missing_ratio * policy.missing_document_weight
        + youth * policy.young_account_weight;
    if signals.previously_flagged {
        score += policy.prior_flag_weight;
    }

    score.round().clamp(0.0, 100.0) as u8
}
