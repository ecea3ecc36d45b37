use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::moderation::RiskPolicy;

/// Configuration errors surfaced while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}")]
    InvalidValue { var: &'static str, value: String },
}

/// Settings controlling log output for embedding hosts.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Top-level engine configuration: the risk policy plus telemetry settings.
#[derive(Debug, Clone)]
pub struct ModerationConfig {
    pub policy: RiskPolicy,
    pub telemetry: TelemetryConfig,
}

fn env_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
        Err(_) => Ok(default),
    }
}

impl ModerationConfig {
    /// Load the policy from `MODERATION_*` environment variables, falling
    /// back to the shipped defaults for anything unset.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = RiskPolicy::default();
        let policy = RiskPolicy {
            price_deviation_warning: env_or(
                "MODERATION_PRICE_DEVIATION_WARNING",
                defaults.price_deviation_warning,
            )?,
            price_deviation_failure: env_or(
                "MODERATION_PRICE_DEVIATION_FAILURE",
                defaults.price_deviation_failure,
            )?,
            min_description_chars: env_or(
                "MODERATION_MIN_DESCRIPTION_CHARS",
                defaults.min_description_chars,
            )?,
            short_description_chars: env_or(
                "MODERATION_SHORT_DESCRIPTION_CHARS",
                defaults.short_description_chars,
            )?,
            max_missing_fields: env_or(
                "MODERATION_MAX_MISSING_FIELDS",
                defaults.max_missing_fields,
            )?,
            young_account_days: env_or(
                "MODERATION_YOUNG_ACCOUNT_DAYS",
                defaults.young_account_days,
            )?,
            missing_document_weight: env_or(
                "MODERATION_MISSING_DOCUMENT_WEIGHT",
                defaults.missing_document_weight,
            )?,
            young_account_weight: env_or(
                "MODERATION_YOUNG_ACCOUNT_WEIGHT",
                defaults.young_account_weight,
            )?,
            prior_flag_weight: env_or("MODERATION_PRIOR_FLAG_WEIGHT", defaults.prior_flag_weight)?,
        };

        let log_level = env::var("MODERATION_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            policy,
            telemetry: TelemetryConfig { log_level },
        })
    }
}
