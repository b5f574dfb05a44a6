use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::review::domain::{Review, ReviewStatus};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewSortField {
    #[default]
    CreatedAt,
    Rating,
    HelpfulCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewSort {
    pub field: ReviewSortField,
    pub order: SortOrder,
}

/// Which review statuses a listing includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Only(ReviewStatus),
    Except(ReviewStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ReviewStatus) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Only(wanted) => status == *wanted,
            StatusFilter::Except(excluded) => status != *excluded,
        }
    }
}

/// Listing criteria for review read paths
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewQuery {
    pub movie_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub status: StatusFilter,
    pub sort: ReviewSort,
}

/// Storage port for reviews
///
/// Implementations enforce at most one review per (user, movie) pair: saving
/// a review whose pair is held by a different review id fails with
/// `AppError::Conflict`.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Review>>;

    async fn find_by_user_and_movie(
        &self,
        user_id: &Uuid,
        movie_id: &Uuid,
    ) -> AppResult<Option<Review>>;

    /// Insert or overwrite a review
    async fn save(&self, review: &Review) -> AppResult<Review>;

    /// Returns false when no review had this id
    async fn delete(&self, id: &Uuid) -> AppResult<bool>;

    async fn find(
        &self,
        query: &ReviewQuery,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResult<Review>>;
}
