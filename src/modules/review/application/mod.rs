pub mod aggregate_coordinator;
pub mod commands;
pub mod queries;
pub mod service;

pub use aggregate_coordinator::{RatingAggregateCoordinator, ReviewWrite};
pub use commands::{ReviewEdit, SubmitReviewCommand};
pub use queries::ReviewQueryService;
pub use service::ReviewService;
