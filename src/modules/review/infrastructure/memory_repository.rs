/// In-memory review store backed by `DashMap`
///
/// Keeps a secondary (user, movie) index so the one-review-per-pair rule is
/// enforced at the storage boundary, the same place a unique index would
/// enforce it in a database.
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::cmp::Ordering;
use uuid::Uuid;

use crate::modules::review::domain::{
    Review, ReviewQuery, ReviewRepository, ReviewSortField, SortOrder,
};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: DashMap<Uuid, Review>,
    by_user_movie: DashMap<(Uuid, Uuid), Uuid>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

fn compare(a: &Review, b: &Review, query: &ReviewQuery) -> Ordering {
    let ordering = match query.sort.field {
        ReviewSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        ReviewSortField::Rating => a
            .rating()
            .cmp(&b.rating())
            .then(a.created_at.cmp(&b.created_at)),
        ReviewSortField::HelpfulCount => a
            .helpful()
            .count()
            .cmp(&b.helpful().count())
            .then(a.created_at.cmp(&b.created_at)),
    };
    match query.sort.order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Review>> {
        Ok(self.reviews.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_user_and_movie(
        &self,
        user_id: &Uuid,
        movie_id: &Uuid,
    ) -> AppResult<Option<Review>> {
        let review_id = self
            .by_user_movie
            .get(&(*user_id, *movie_id))
            .map(|entry| *entry.value());

        match review_id {
            Some(id) => self.find_by_id(&id).await,
            None => Ok(None),
        }
    }

    async fn save(&self, review: &Review) -> AppResult<Review> {
        LogContext::store_write("review", "save", &review.id);

        // Holding the index entry makes check-and-insert atomic per pair
        match self.by_user_movie.entry((review.user_id, review.movie_id)) {
            Entry::Occupied(existing) if *existing.get() != review.id => {
                return Err(AppError::Conflict(format!(
                    "User {} already has a review for movie {}",
                    review.user_id, review.movie_id
                )));
            }
            Entry::Occupied(_) => {
                self.reviews.insert(review.id, review.clone());
            }
            Entry::Vacant(slot) => {
                self.reviews.insert(review.id, review.clone());
                slot.insert(review.id);
            }
        }

        Ok(review.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        LogContext::store_write("review", "delete", id);

        let Some((_, removed)) = self.reviews.remove(id) else {
            return Ok(false);
        };
        self.by_user_movie
            .remove_if(&(removed.user_id, removed.movie_id), |_, owner| owner == id);
        Ok(true)
    }

    async fn find(
        &self,
        query: &ReviewQuery,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResult<Review>> {
        let mut matching: Vec<Review> = self
            .reviews
            .iter()
            .filter(|entry| {
                let review = entry.value();
                query.movie_id.map_or(true, |id| review.movie_id == id)
                    && query.user_id.map_or(true, |id| review.user_id == id)
                    && query.status.matches(review.status())
            })
            .map(|entry| entry.value().clone())
            .collect();

        matching.sort_by(|a, b| compare(a, b, query));

        Ok(PaginatedResult::from_sorted(matching, pagination))
    }
}
