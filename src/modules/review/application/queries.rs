use std::sync::Arc;
use uuid::Uuid;

use crate::modules::review::domain::{
    Review, ReviewQuery, ReviewRepository, ReviewSort, ReviewSortField, ReviewStatus, SortOrder,
    StatusFilter,
};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Actor;

const NEWEST_FIRST: ReviewSort = ReviewSort {
    field: ReviewSortField::CreatedAt,
    order: SortOrder::Desc,
};

/// Read paths over reviews
pub struct ReviewQueryService {
    review_repo: Arc<dyn ReviewRepository>,
}

impl ReviewQueryService {
    pub fn new(review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repo }
    }

    /// Public lookup; hidden and pending reviews read as missing
    pub async fn get_review(&self, review_id: &Uuid) -> AppResult<Review> {
        self.review_repo
            .find_by_id(review_id)
            .await?
            .filter(|review| review.status() == ReviewStatus::Active)
            .ok_or_else(|| AppError::NotFound(format!("Review with ID {} not found", review_id)))
    }

    pub async fn movie_reviews(
        &self,
        movie_id: &Uuid,
        sort: ReviewSort,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Review>> {
        pagination.validate()?;

        let query = ReviewQuery {
            movie_id: Some(*movie_id),
            status: StatusFilter::Only(ReviewStatus::Active),
            sort,
            ..ReviewQuery::default()
        };
        self.review_repo.find(&query, &pagination).await
    }

    /// The caller's own reviews, excluding ones moderation has hidden
    pub async fn user_reviews(
        &self,
        actor: &Actor,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Review>> {
        pagination.validate()?;

        let query = ReviewQuery {
            user_id: Some(actor.id),
            status: StatusFilter::Except(ReviewStatus::Hidden),
            sort: NEWEST_FIRST,
            ..ReviewQuery::default()
        };
        self.review_repo.find(&query, &pagination).await
    }

    pub async fn admin_reviews(
        &self,
        actor: &Actor,
        status: Option<ReviewStatus>,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Review>> {
        if !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Access denied. Admin privileges required.".to_string(),
            ));
        }
        pagination.validate()?;

        let query = ReviewQuery {
            status: status.map_or(StatusFilter::Any, StatusFilter::Only),
            sort: NEWEST_FIRST,
            ..ReviewQuery::default()
        };
        self.review_repo.find(&query, &pagination).await
    }
}
