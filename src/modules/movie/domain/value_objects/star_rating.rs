use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::AppError;

/// Whole-star rating between 1 and 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: i64) -> Result<Self, AppError> {
        if !(Self::MIN as i64..=Self::MAX as i64).contains(&stars) {
            return Err(AppError::ValidationError(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(Self(stars as u8))
    }

    pub fn stars(self) -> u8 {
        self.0
    }

    /// Zero-based bucket position in a distribution
    pub(crate) fn bucket(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<i64> for StarRating {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}★", self.0)
    }
}
