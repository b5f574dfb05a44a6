/// Review bounded context
///
/// Submission, editing and deletion of reviews, helpful votes, reporting and
/// moderation. Rating changes are pushed into the movie context through the
/// aggregate coordinator.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    RatingAggregateCoordinator, ReviewEdit, ReviewQueryService, ReviewService,
    SubmitReviewCommand,
};
pub use domain::{
    HelpfulToggle, ModerationPolicy, Review, ReviewContent, ReviewRepository, ReviewSort,
    ReviewSortField, ReviewStatus, SortOrder,
};
pub use infrastructure::InMemoryReviewRepository;
