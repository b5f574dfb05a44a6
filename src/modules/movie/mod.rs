/// Movie catalog bounded context
///
/// Owns the movie record and its rating distribution. Administrators curate
/// descriptive fields here; the distribution itself is only rewritten by the
/// review context's aggregate coordinator.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{MovieLease, MovieLocks, MovieService};
pub use domain::{
    Movie, MovieDetails, MovieRepository, MovieStatus, RatingChange, RatingDistribution,
    StarRating,
};
pub use infrastructure::InMemoryMovieRepository;
