pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{CastMember, Movie, MovieDetails};
pub use repositories::MovieRepository;
pub use value_objects::{MovieStatus, RatingChange, RatingDistribution, StarRating};
