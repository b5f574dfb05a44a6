use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::movie::domain::{RatingChange, StarRating};
use crate::modules::review::domain::services::ModerationPolicy;
use crate::modules::review::domain::value_objects::{ReportLog, ReviewStatus, VoterSet};
use crate::shared::errors::{AppError, AppResult};

/// Free-text part of a review, already trimmed and length-checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewContent {
    pub title: Option<String>,
    pub body: Option<String>,
    pub spoiler_warning: bool,
}

/// Outcome of flipping a helpful vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpfulToggle {
    pub is_now_helpful: bool,
    pub count: u32,
}

/// One user's opinion of one movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: Uuid,
    rating: StarRating,
    #[serde(flatten)]
    pub content: ReviewContent,
    status: ReviewStatus,
    helpful: VoterSet,
    reported: ReportLog,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Fresh reviews start out active
    pub fn new(user_id: Uuid, movie_id: Uuid, rating: StarRating, content: ReviewContent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            movie_id,
            rating,
            content,
            status: ReviewStatus::Active,
            helpful: VoterSet::new(),
            reported: ReportLog::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn rating(&self) -> StarRating {
        self.rating
    }

    pub fn status(&self) -> ReviewStatus {
        self.status
    }

    pub fn helpful(&self) -> &VoterSet {
        &self.helpful
    }

    pub fn reported(&self) -> &ReportLog {
        &self.reported
    }

    pub fn is_authored_by(&self, user_id: &Uuid) -> bool {
        self.user_id == *user_id
    }

    pub fn is_helpful_by(&self, user_id: &Uuid) -> bool {
        self.helpful.contains(user_id)
    }

    /// Rewrite rating and text in place, returning the rating transition
    pub fn revise(&mut self, rating: StarRating, content: ReviewContent) -> RatingChange {
        let change = RatingChange::replace(self.rating, rating);
        self.rating = rating;
        self.content = content;
        self.updated_at = Utc::now();
        change
    }

    /// Add or withdraw `voter`'s helpful vote; authors cannot vote on their own review
    pub fn toggle_helpful(&mut self, voter: Uuid) -> AppResult<HelpfulToggle> {
        if self.is_authored_by(&voter) {
            return Err(AppError::Forbidden(
                "You cannot mark your own review as helpful".to_string(),
            ));
        }

        let is_now_helpful = if self.helpful.contains(&voter) {
            self.helpful.remove(&voter);
            false
        } else {
            self.helpful.insert(voter);
            true
        };
        self.updated_at = Utc::now();

        Ok(HelpfulToggle {
            is_now_helpful,
            count: self.helpful.count(),
        })
    }

    /// Record a report and apply the moderation policy
    pub fn report(
        &mut self,
        reporter: Uuid,
        reason: Option<String>,
        policy: &ModerationPolicy,
    ) -> AppResult<ReviewStatus> {
        if self.is_authored_by(&reporter) {
            return Err(AppError::Forbidden(
                "You cannot report your own review".to_string(),
            ));
        }
        if !self.reported.record(reporter, reason) {
            return Err(AppError::Conflict(
                "You have already reported this review".to_string(),
            ));
        }

        self.status = policy.status_after_report(self.status, self.reported.count());
        self.updated_at = Utc::now();
        Ok(self.status)
    }

    /// Forced moderation transition; does not affect the movie's ratings
    pub fn set_status(&mut self, status: ReviewStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
