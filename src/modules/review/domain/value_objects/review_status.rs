use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visibility state of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Active,
    Hidden,
    Pending,
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Active => write!(f, "active"),
            ReviewStatus::Hidden => write!(f, "hidden"),
            ReviewStatus::Pending => write!(f, "pending"),
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ReviewStatus::Active),
            "hidden" => Ok(ReviewStatus::Hidden),
            "pending" => Ok(ReviewStatus::Pending),
            _ => Err(format!("Invalid review status: {}", s)),
        }
    }
}
