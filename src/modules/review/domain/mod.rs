pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{HelpfulToggle, Review, ReviewContent};
pub use repositories::{
    ReviewQuery, ReviewRepository, ReviewSort, ReviewSortField, SortOrder, StatusFilter,
};
pub use services::ModerationPolicy;
pub use value_objects::{ReportLog, ReviewStatus, VoterSet};
