use serde::{Deserialize, Serialize};

/// Thresholds and weights backing the automated checks and the account risk
/// composite. These are operator policy, not engine contract; the defaults
/// mirror the tuning the moderation console shipped with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Price deviation from the market reference (as a fraction) that turns
    /// the price check into a warning.
    pub price_deviation_warning: f64,
    /// Deviation at which the price check fails outright.
    pub price_deviation_failure: f64,
    /// Descriptions shorter than this raise a quality warning.
    pub min_description_chars: usize,
    /// Descriptions shorter than this fail the quality check.
    pub short_description_chars: usize,
    /// Number of missing listing fields tolerated before completeness fails.
    pub max_missing_fields: usize,
    /// Accounts younger than this many days contribute to the risk score.
    pub young_account_days: i64,
    /// Composite weight of the missing-documents ratio.
    pub missing_document_weight: f64,
    /// Composite weight of account youth.
    pub young_account_weight: f64,
    /// Composite weight of a prior manual flag.
    pub prior_flag_weight: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            price_deviation_warning: 0.25,
            price_deviation_failure: 0.50,
            min_description_chars: 120,
            short_description_chars: 40,
            max_missing_fields: 1,
            young_account_days: 30,
            missing_document_weight: 55.0,
            young_account_weight: 25.0,
            prior_flag_weight: 20.0,
        }
    }
}
