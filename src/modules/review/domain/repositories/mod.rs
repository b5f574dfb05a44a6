pub mod review_repository;

pub use review_repository::{
    ReviewQuery, ReviewRepository, ReviewSort, ReviewSortField, SortOrder, StatusFilter,
};
