/// Pagination support for queries
///
/// Standard pagination model used across all bounded contexts
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_pagination(self.page, self.page_size)
    }

    /// Number of items to skip
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }

    /// Maximum number of items to return
    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = ((total_count as f64) / (params.page_size as f64)).ceil() as u32;

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }

    /// Slice one page out of an already filtered and ordered list
    pub fn from_sorted(all: Vec<T>, params: &PaginationParams) -> Self {
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(params.offset())
            .take(params.limit())
            .collect();
        Self::new(items, total_count, params)
    }
}
