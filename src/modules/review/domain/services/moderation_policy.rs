use crate::modules::review::domain::value_objects::ReviewStatus;
use crate::shared::config::{ReviewEngineConfig, DEFAULT_REPORT_HIDE_THRESHOLD};
use crate::shared::errors::{AppError, AppResult};

/// Maps a review's report count to its moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationPolicy {
    hide_threshold: u32,
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self {
            hide_threshold: DEFAULT_REPORT_HIDE_THRESHOLD,
        }
    }
}

impl ModerationPolicy {
    /// A zero threshold is rejected, as it is in `ReviewEngineConfig::validate`
    pub fn new(hide_threshold: u32) -> AppResult<Self> {
        if hide_threshold == 0 {
            return Err(AppError::ValidationError(
                "Report hide threshold must be at least 1".to_string(),
            ));
        }
        Ok(Self { hide_threshold })
    }

    pub fn from_config(config: &ReviewEngineConfig) -> AppResult<Self> {
        Self::new(config.report_hide_threshold)
    }

    pub fn hide_threshold(&self) -> u32 {
        self.hide_threshold
    }

    /// Status after a report has been counted
    ///
    /// An active review is hidden as soon as the count reaches the threshold.
    /// Hidden and pending reviews are left where they are.
    pub fn status_after_report(&self, current: ReviewStatus, report_count: u32) -> ReviewStatus {
        match current {
            ReviewStatus::Active if report_count >= self.hide_threshold => ReviewStatus::Hidden,
            other => other,
        }
    }
}
