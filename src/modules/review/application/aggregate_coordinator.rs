/// Rating aggregate coordinator
///
/// The only writer of a movie's rating distribution. Every review lifecycle
/// transition reaches the movie record through here, under that movie's
/// lease, so load-apply-save never interleaves for the same movie.
///
/// A transition touches two records. The aggregate is written first; if the
/// review write then fails, the previous movie snapshot is restored (still
/// under the lease) before the error is returned.
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::movie::application::{MovieLease, MovieLocks};
use crate::modules::movie::domain::{
    Movie, MovieRepository, RatingChange, RatingDistribution, StarRating,
};
use crate::modules::review::domain::{Review, ReviewRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_error, log_warn};

/// The review-side half of a lifecycle transition
#[derive(Debug, Clone)]
pub enum ReviewWrite {
    Create(Review),
    Update { previous: Review, current: Review },
    Delete(Review),
}

impl ReviewWrite {
    pub fn movie_id(&self) -> Uuid {
        match self {
            ReviewWrite::Create(review) | ReviewWrite::Delete(review) => review.movie_id,
            ReviewWrite::Update { current, .. } => current.movie_id,
        }
    }

    pub fn rating_change(&self) -> RatingChange {
        match self {
            ReviewWrite::Create(review) => RatingChange::add(review.rating()),
            ReviewWrite::Update { previous, current } => {
                RatingChange::replace(previous.rating(), current.rating())
            }
            ReviewWrite::Delete(review) => RatingChange::remove(review.rating()),
        }
    }
}

pub struct RatingAggregateCoordinator {
    movie_repo: Arc<dyn MovieRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    movie_locks: Arc<MovieLocks>,
}

impl RatingAggregateCoordinator {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        movie_locks: Arc<MovieLocks>,
    ) -> Self {
        Self {
            movie_repo,
            review_repo,
            movie_locks,
        }
    }

    /// Take the write lease for one movie
    pub(crate) async fn lock_movie(&self, movie_id: Uuid) -> MovieLease<'_> {
        self.movie_locks.lock(movie_id).await
    }

    /// Apply a bare rating delta to a movie and persist it
    ///
    /// Takes the movie's lease itself, so it must not be called while the
    /// same lease is held; use `commit` from inside a leased section.
    pub async fn record_review(
        &self,
        movie_id: &Uuid,
        old_rating: Option<StarRating>,
        new_rating: Option<StarRating>,
    ) -> AppResult<RatingDistribution> {
        let lease = self.lock_movie(*movie_id).await;
        let mut movie = self.load_movie(&lease).await?;

        let change = RatingChange {
            old: old_rating,
            new: new_rating,
        };
        if change.is_noop() {
            return Ok(*movie.ratings());
        }

        movie.apply_rating_change(change);
        let saved = self.movie_repo.save(&movie).await?;
        LogContext::rating_change(&saved.id, saved.ratings().count(), saved.ratings().average());
        Ok(*saved.ratings())
    }

    /// Persist a review transition together with its rating delta
    ///
    /// The movie must exist. When the rating does not change only the review
    /// is written.
    pub(crate) async fn commit(
        &self,
        lease: &MovieLease<'_>,
        write: ReviewWrite,
    ) -> AppResult<RatingDistribution> {
        if write.movie_id() != lease.movie_id() {
            return Err(AppError::InternalError(format!(
                "Lease for movie {} used to commit a review of movie {}",
                lease.movie_id(),
                write.movie_id()
            )));
        }

        let movie = self.load_movie(lease).await?;
        let change = write.rating_change();

        if change.is_noop() {
            self.write_review(&write).await?;
            return Ok(*movie.ratings());
        }

        let previous = movie.clone();
        let mut updated = movie;
        updated.apply_rating_change(change);

        log_debug!(
            "Applying rating change {:?} -> {:?} to movie {}",
            change.old.map(StarRating::stars),
            change.new.map(StarRating::stars),
            updated.id
        );

        // Nothing has been written yet if this fails
        let saved = self.movie_repo.save(&updated).await?;

        if let Err(cause) = self.write_review(&write).await {
            return Err(self.roll_back(&previous, cause).await);
        }

        LogContext::rating_change(&saved.id, saved.ratings().count(), saved.ratings().average());
        Ok(*saved.ratings())
    }

    async fn load_movie(&self, lease: &MovieLease<'_>) -> AppResult<Movie> {
        let movie_id = lease.movie_id();
        self.movie_repo
            .find_by_id(&movie_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", movie_id)))
    }

    async fn write_review(&self, write: &ReviewWrite) -> AppResult<()> {
        match write {
            ReviewWrite::Create(review) | ReviewWrite::Update { current: review, .. } => {
                self.review_repo.save(review).await?;
            }
            ReviewWrite::Delete(review) => {
                if !self.review_repo.delete(&review.id).await? {
                    return Err(AppError::NotFound(format!(
                        "Review with ID {} not found",
                        review.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Restore the movie snapshot taken before a failed review write
    async fn roll_back(&self, previous: &Movie, cause: AppError) -> AppError {
        match self.movie_repo.save(previous).await {
            Ok(_) if cause.is_rejection() => {
                log_warn!(
                    "Review write rejected for movie {}; rating change rolled back: {}",
                    previous.id,
                    cause
                );
                cause
            }
            Ok(_) => {
                log_error!(
                    "Review write failed for movie {}; rating change rolled back: {}",
                    previous.id,
                    cause
                );
                AppError::ConsistencyFailure(format!(
                    "Review write failed after rating update of movie {} (rating change rolled back): {}",
                    previous.id, cause
                ))
            }
            Err(rollback_error) => {
                log_error!(
                    "Movie {} ratings no longer match its reviews: review write failed ({}) and rollback failed ({})",
                    previous.id,
                    cause,
                    rollback_error
                );
                AppError::ConsistencyFailure(format!(
                    "Review write failed after rating update of movie {} and the rating change could not be rolled back: {}; rollback error: {}",
                    previous.id, cause, rollback_error
                ))
            }
        }
    }
}
