pub mod review;

pub use review::{HelpfulToggle, Review, ReviewContent};
