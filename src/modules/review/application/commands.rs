use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create-or-update request for the caller's review of one movie
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewCommand {
    pub movie_id: Uuid,
    /// Raw star count, validated to 1..=5
    pub rating: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub spoiler_warning: bool,
}

impl SubmitReviewCommand {
    pub fn new(movie_id: Uuid, rating: i64) -> Self {
        Self {
            movie_id,
            rating,
            title: None,
            body: None,
            spoiler_warning: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_spoiler_warning(mut self) -> Self {
        self.spoiler_warning = true;
        self
    }
}

/// Partial edit of an existing review; `None` keeps the current value
///
/// For `title` and `body`, `Some` of a blank string clears the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEdit {
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub spoiler_warning: Option<bool>,
}

impl ReviewEdit {
    pub fn rating(rating: i64) -> Self {
        Self {
            rating: Some(rating),
            ..Self::default()
        }
    }

    pub fn body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }
}
