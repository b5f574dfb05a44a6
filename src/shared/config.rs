use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::log_info;
use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_REPORT_HIDE_THRESHOLD: u32 = 5;
pub const DEFAULT_MAX_REVIEW_LENGTH: usize = 1000;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 100;
pub const DEFAULT_MAX_REASON_LENGTH: usize = 500;

/// Tunables for the review engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEngineConfig {
    /// Distinct reports after which an active review is hidden
    pub report_hide_threshold: u32,
    pub max_review_length: usize,
    pub max_title_length: usize,
    pub max_reason_length: usize,
}

impl Default for ReviewEngineConfig {
    fn default() -> Self {
        Self {
            report_hide_threshold: DEFAULT_REPORT_HIDE_THRESHOLD,
            max_review_length: DEFAULT_MAX_REVIEW_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_reason_length: DEFAULT_MAX_REASON_LENGTH,
        }
    }
}

impl ReviewEngineConfig {
    /// Load overrides from the environment (and `.env` when present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            report_hide_threshold: read_var(
                "CINEVAULT_REPORT_HIDE_THRESHOLD",
                defaults.report_hide_threshold,
            )?,
            max_review_length: read_var("CINEVAULT_MAX_REVIEW_LENGTH", defaults.max_review_length)?,
            max_title_length: read_var("CINEVAULT_MAX_TITLE_LENGTH", defaults.max_title_length)?,
            max_reason_length: read_var("CINEVAULT_MAX_REASON_LENGTH", defaults.max_reason_length)?,
        };
        config.validate()?;

        log_info!(
            "Review engine configured: hide after {} reports, review max {} chars",
            config.report_hide_threshold,
            config.max_review_length
        );

        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.report_hide_threshold == 0 {
            return Err(AppError::ValidationError(
                "Report hide threshold must be at least 1".to_string(),
            ));
        }
        if self.max_review_length == 0 || self.max_title_length == 0 || self.max_reason_length == 0 {
            return Err(AppError::ValidationError(
                "Text length limits must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn read_var<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| {
            AppError::ValidationError(format!("Invalid value for {}: {}", name, e))
        }),
        Err(_) => Ok(default),
    }
}
