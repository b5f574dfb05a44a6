use std::sync::Arc;
use uuid::Uuid;

use super::aggregate_coordinator::{RatingAggregateCoordinator, ReviewWrite};
use super::commands::{ReviewEdit, SubmitReviewCommand};
use crate::modules::movie::domain::StarRating;
use crate::modules::review::domain::{
    HelpfulToggle, ModerationPolicy, Review, ReviewContent, ReviewRepository, ReviewStatus,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use crate::shared::utils::{KeyedLocks, Validator};
use crate::shared::{Actor, ReviewEngineConfig};
use crate::{log_debug, log_info};

/// Entry points for the review lifecycle
///
/// Lock order is always movie lease first, then the review lock. Helpful
/// votes and reports only take the review lock, so they run in parallel
/// across reviews and never wait on rating aggregation for other reviews.
pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    coordinator: Arc<RatingAggregateCoordinator>,
    review_locks: KeyedLocks<Uuid>,
    policy: ModerationPolicy,
    config: ReviewEngineConfig,
}

impl ReviewService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        coordinator: Arc<RatingAggregateCoordinator>,
        config: ReviewEngineConfig,
    ) -> AppResult<Self> {
        Ok(Self {
            review_repo,
            coordinator,
            review_locks: KeyedLocks::new(),
            policy: ModerationPolicy::from_config(&config)?,
            config,
        })
    }

    /// Create the caller's review of a movie, or rewrite it in place if one exists
    pub async fn submit_review(
        &self,
        actor: &Actor,
        command: SubmitReviewCommand,
    ) -> AppResult<Review> {
        log_debug!(
            "Submitting review by {} for movie {} (rating: {})",
            actor.id,
            command.movie_id,
            command.rating
        );

        let rating = StarRating::new(command.rating)?;
        let content = ReviewContent {
            title: self.normalize_title(command.title.as_deref())?,
            body: self.normalize_body(command.body.as_deref())?,
            spoiler_warning: command.spoiler_warning,
        };

        let timer = TimedOperation::new("submit_review", command.movie_id);
        let lease = self.coordinator.lock_movie(command.movie_id).await;

        let existing = self
            .review_repo
            .find_by_user_and_movie(&actor.id, &command.movie_id)
            .await?;

        let review = match existing {
            Some(existing) => {
                let _guard = self.review_locks.acquire(&existing.id).await;
                let previous = self.load_review(&existing.id).await?;

                // Moderation status survives resubmission
                let mut current = previous.clone();
                current.revise(rating, content);

                self.coordinator
                    .commit(
                        &lease,
                        ReviewWrite::Update {
                            previous,
                            current: current.clone(),
                        },
                    )
                    .await?;
                log_info!("Review {} updated by {}", current.id, actor.id);
                current
            }
            None => {
                let review = Review::new(actor.id, command.movie_id, rating, content);
                self.coordinator
                    .commit(&lease, ReviewWrite::Create(review.clone()))
                    .await?;
                log_info!(
                    "Review {} created by {} for movie {}",
                    review.id,
                    actor.id,
                    review.movie_id
                );
                review
            }
        };

        timer.finish();
        Ok(review)
    }

    /// Author-only partial edit
    pub async fn edit_review(
        &self,
        actor: &Actor,
        review_id: &Uuid,
        edit: ReviewEdit,
    ) -> AppResult<Review> {
        let rating = edit.rating.map(StarRating::new).transpose()?;
        let title = edit
            .title
            .as_deref()
            .map(|t| self.normalize_title(Some(t)))
            .transpose()?;
        let body = edit
            .body
            .as_deref()
            .map(|b| self.normalize_body(Some(b)))
            .transpose()?;

        let review = self.load_authored_review(actor, review_id).await?;

        let lease = self.coordinator.lock_movie(review.movie_id).await;
        let _guard = self.review_locks.acquire(review_id).await;
        let previous = self.load_review(review_id).await?;

        let mut current = previous.clone();
        let content = ReviewContent {
            title: title.unwrap_or_else(|| previous.content.title.clone()),
            body: body.unwrap_or_else(|| previous.content.body.clone()),
            spoiler_warning: edit
                .spoiler_warning
                .unwrap_or(previous.content.spoiler_warning),
        };
        current.revise(rating.unwrap_or(previous.rating()), content);

        self.coordinator
            .commit(
                &lease,
                ReviewWrite::Update {
                    previous,
                    current: current.clone(),
                },
            )
            .await?;

        log_info!("Review {} edited by {}", review_id, actor.id);
        Ok(current)
    }

    /// Author-only removal; the rating leaves the movie's distribution
    pub async fn delete_review(&self, actor: &Actor, review_id: &Uuid) -> AppResult<()> {
        let review = self.load_authored_review(actor, review_id).await?;

        let lease = self.coordinator.lock_movie(review.movie_id).await;
        let _guard = self.review_locks.acquire(review_id).await;
        let review = self.load_review(review_id).await?;

        self.coordinator
            .commit(&lease, ReviewWrite::Delete(review))
            .await?;

        log_info!("Review {} deleted by {}", review_id, actor.id);
        Ok(())
    }

    pub async fn toggle_helpful(&self, actor: &Actor, review_id: &Uuid) -> AppResult<HelpfulToggle> {
        let _guard = self.review_locks.acquire(review_id).await;
        let mut review = self.load_review(review_id).await?;

        let toggle = review.toggle_helpful(actor.id)?;
        self.review_repo.save(&review).await?;

        log_debug!(
            "Review {} helpful vote by {}: {} (count {})",
            review_id,
            actor.id,
            toggle.is_now_helpful,
            toggle.count
        );
        Ok(toggle)
    }

    pub async fn report_review(
        &self,
        actor: &Actor,
        review_id: &Uuid,
        reason: Option<String>,
    ) -> AppResult<ReviewStatus> {
        let reason =
            Validator::normalize_text("Reason", reason.as_deref(), self.config.max_reason_length)?;

        let _guard = self.review_locks.acquire(review_id).await;
        let mut review = self.load_review(review_id).await?;
        let before = review.status();

        let status = review.report(actor.id, reason, &self.policy)?;
        self.review_repo.save(&review).await?;

        if before != status {
            log_info!(
                "Review {} hidden after {} reports",
                review_id,
                review.reported().count()
            );
        }
        Ok(status)
    }

    /// Administrator override between active and hidden
    pub async fn set_review_status(
        &self,
        actor: &Actor,
        review_id: &Uuid,
        status: ReviewStatus,
    ) -> AppResult<Review> {
        if !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Access denied. Admin privileges required.".to_string(),
            ));
        }
        if status == ReviewStatus::Pending {
            return Err(AppError::ValidationError(
                "Reviews can only be set to active or hidden".to_string(),
            ));
        }

        let _guard = self.review_locks.acquire(review_id).await;
        let mut review = self.load_review(review_id).await?;
        review.set_status(status);
        let saved = self.review_repo.save(&review).await?;

        log_info!("Review {} set to {} by admin {}", review_id, status, actor.id);
        Ok(saved)
    }

    async fn load_review(&self, review_id: &Uuid) -> AppResult<Review> {
        self.review_repo
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review with ID {} not found", review_id)))
    }

    async fn load_authored_review(&self, actor: &Actor, review_id: &Uuid) -> AppResult<Review> {
        let review = self.load_review(review_id).await?;
        if !review.is_authored_by(&actor.id) {
            return Err(AppError::Forbidden(
                "You are not authorized to modify this review".to_string(),
            ));
        }
        Ok(review)
    }

    fn normalize_title(&self, title: Option<&str>) -> AppResult<Option<String>> {
        Validator::normalize_text("Title", title, self.config.max_title_length)
    }

    fn normalize_body(&self, body: Option<&str>) -> AppResult<Option<String>> {
        Validator::normalize_text("Review", body, self.config.max_review_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::movie::application::MovieLocks;
    use crate::modules::movie::domain::{Movie, MovieDetails, MovieRepository};
    use crate::modules::movie::infrastructure::InMemoryMovieRepository;
    use crate::modules::review::infrastructure::InMemoryReviewRepository;
    use tokio_test::{assert_err, assert_ok};

    struct Fixture {
        service: ReviewService,
        movies: Arc<InMemoryMovieRepository>,
        movie: Movie,
    }

    async fn fixture() -> Fixture {
        let movies = Arc::new(InMemoryMovieRepository::new());
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let movie = Movie::new(
            MovieDetails::new("Finding Nemo", "Andrew Stanton", 2003)
                .with_genres(vec!["Animation".into()]),
            Uuid::new_v4(),
        );
        movies.save(&movie).await.unwrap();

        let coordinator = Arc::new(RatingAggregateCoordinator::new(
            movies.clone(),
            reviews.clone(),
            Arc::new(MovieLocks::new()),
        ));
        let service =
            ReviewService::new(reviews, coordinator, ReviewEngineConfig::default()).unwrap();

        Fixture {
            service,
            movies,
            movie,
        }
    }

    impl Fixture {
        async fn ratings(&self) -> crate::modules::movie::domain::RatingDistribution {
            *self
                .movies
                .find_by_id(&self.movie.id)
                .await
                .unwrap()
                .unwrap()
                .ratings()
        }
    }

    #[tokio::test]
    async fn test_zero_report_threshold_rejected() {
        let coordinator = Arc::new(RatingAggregateCoordinator::new(
            Arc::new(InMemoryMovieRepository::new()),
            Arc::new(InMemoryReviewRepository::new()),
            Arc::new(MovieLocks::new()),
        ));
        let config = ReviewEngineConfig {
            report_hide_threshold: 0,
            ..ReviewEngineConfig::default()
        };

        let result = ReviewService::new(Arc::new(InMemoryReviewRepository::new()), coordinator, config);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_invalid_rating_rejected_before_any_write() {
        let fx = fixture().await;
        let actor = Actor::user(Uuid::new_v4());

        for rating in [0, 6] {
            let result = fx
                .service
                .submit_review(&actor, SubmitReviewCommand::new(fx.movie.id, rating))
                .await;
            assert!(matches!(result, Err(AppError::ValidationError(_))));
        }
        assert_eq!(fx.ratings().await.count(), 0);
    }

    #[tokio::test]
    async fn test_overlong_body_rejected() {
        let fx = fixture().await;
        let actor = Actor::user(Uuid::new_v4());
        let command = SubmitReviewCommand::new(fx.movie.id, 4).with_body("x".repeat(1001));

        let result = fx.service.submit_review(&actor, command).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_resubmission_updates_in_place() {
        let fx = fixture().await;
        let actor = Actor::user(Uuid::new_v4());

        let first = assert_ok!(
            fx.service
                .submit_review(&actor, SubmitReviewCommand::new(fx.movie.id, 2).with_title("Meh"))
                .await
        );
        let second = assert_ok!(
            fx.service
                .submit_review(&actor, SubmitReviewCommand::new(fx.movie.id, 5))
                .await
        );

        assert_eq!(first.id, second.id);
        assert_eq!(second.rating().stars(), 5);
        assert_eq!(second.content.title, None);

        let ratings = fx.ratings().await;
        assert_eq!(ratings.count(), 1);
        assert_eq!(ratings.average(), 5.0);
    }

    #[tokio::test]
    async fn test_submit_for_missing_movie() {
        let fx = fixture().await;
        let actor = Actor::user(Uuid::new_v4());

        let result = fx
            .service
            .submit_review(&actor, SubmitReviewCommand::new(Uuid::new_v4(), 3))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_edit_text_only_keeps_distribution() {
        let fx = fixture().await;
        let actor = Actor::user(Uuid::new_v4());
        let review = fx
            .service
            .submit_review(&actor, SubmitReviewCommand::new(fx.movie.id, 4))
            .await
            .unwrap();
        let before = fx.ratings().await;

        let edited = assert_ok!(
            fx.service
                .edit_review(&actor, &review.id, ReviewEdit::body("  Just keeps swimming  "))
                .await
        );

        assert_eq!(edited.content.body.as_deref(), Some("Just keeps swimming"));
        assert_eq!(edited.rating().stars(), 4);
        assert_eq!(fx.ratings().await, before);
    }

    #[tokio::test]
    async fn test_edit_by_other_user_forbidden() {
        let fx = fixture().await;
        let author = Actor::user(Uuid::new_v4());
        let review = fx
            .service
            .submit_review(&author, SubmitReviewCommand::new(fx.movie.id, 4))
            .await
            .unwrap();

        let stranger = Actor::user(Uuid::new_v4());
        let result = fx
            .service
            .edit_review(&stranger, &review.id, ReviewEdit::rating(1))
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert_eq!(fx.ratings().await.average(), 4.0);
    }

    #[tokio::test]
    async fn test_admin_status_override() {
        let fx = fixture().await;
        let author = Actor::user(Uuid::new_v4());
        let review = fx
            .service
            .submit_review(&author, SubmitReviewCommand::new(fx.movie.id, 3))
            .await
            .unwrap();

        assert_err!(
            fx.service
                .set_review_status(&author, &review.id, ReviewStatus::Hidden)
                .await
        );
        assert_err!(
            fx.service
                .set_review_status(&Actor::admin(Uuid::new_v4()), &review.id, ReviewStatus::Pending)
                .await
        );

        let admin = Actor::admin(Uuid::new_v4());
        let hidden = assert_ok!(
            fx.service
                .set_review_status(&admin, &review.id, ReviewStatus::Hidden)
                .await
        );
        assert_eq!(hidden.status(), ReviewStatus::Hidden);
        assert_eq!(fx.ratings().await.count(), 1);
    }

    #[tokio::test]
    async fn test_report_reason_is_trimmed_and_limited() {
        let fx = fixture().await;
        let author = Actor::user(Uuid::new_v4());
        let review = fx
            .service
            .submit_review(&author, SubmitReviewCommand::new(fx.movie.id, 3))
            .await
            .unwrap();

        let too_long = Some("x".repeat(501));
        let result = fx
            .service
            .report_review(&Actor::user(Uuid::new_v4()), &review.id, too_long)
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let status = fx
            .service
            .report_review(&Actor::user(Uuid::new_v4()), &review.id, Some("  spam ".into()))
            .await
            .unwrap();
        assert_eq!(status, ReviewStatus::Active);
    }
}
