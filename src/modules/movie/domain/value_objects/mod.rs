pub mod movie_status;
pub mod rating_distribution;
pub mod star_rating;

pub use movie_status::MovieStatus;
pub use rating_distribution::{RatingChange, RatingDistribution};
pub use star_rating::StarRating;
