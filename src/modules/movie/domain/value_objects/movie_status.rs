use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog visibility of a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieStatus::Active => write!(f, "active"),
            MovieStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for MovieStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(MovieStatus::Active),
            "inactive" => Ok(MovieStatus::Inactive),
            _ => Err(format!("Invalid movie status: {}", s)),
        }
    }
}
