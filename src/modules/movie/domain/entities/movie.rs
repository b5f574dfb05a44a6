use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::movie::domain::value_objects::{MovieStatus, RatingChange, RatingDistribution};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub name: String,
    pub role: String,
}

/// Descriptive catalog fields editable by an administrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub title: String,
    pub genres: Vec<String>,
    pub director: String,
    pub year: i32,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Runtime in minutes
    #[serde(default)]
    pub duration: u32,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_language() -> String {
    "English".to_string()
}

fn default_country() -> String {
    "USA".to_string()
}

impl MovieDetails {
    pub fn new(title: impl Into<String>, director: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            genres: Vec::new(),
            director: director.into(),
            year,
            synopsis: String::new(),
            poster: String::new(),
            cast: Vec::new(),
            duration: 0,
            language: default_language(),
            country: default_country(),
        }
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    /// Trim text fields and check required ones
    pub fn normalized(mut self) -> AppResult<Self> {
        self.title = self.title.trim().to_string();
        self.director = self.director.trim().to_string();
        self.genres = self
            .genres
            .into_iter()
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();

        Validator::validate_movie_title(&self.title)?;
        Validator::validate_required("Director", &self.director)?;
        Validator::validate_release_year(self.year)?;
        if self.genres.is_empty() {
            return Err(AppError::ValidationError(
                "At least one genre is required".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Catalog entry owning its rating distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    #[serde(flatten)]
    pub details: MovieDetails,
    pub status: MovieStatus,
    ratings: RatingDistribution,
    pub added_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    pub fn new(details: MovieDetails, added_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            details,
            status: MovieStatus::Active,
            ratings: RatingDistribution::empty(),
            added_by,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn ratings(&self) -> &RatingDistribution {
        &self.ratings
    }

    pub fn is_active(&self) -> bool {
        self.status == MovieStatus::Active
    }

    /// Replace descriptive fields; the rating distribution is left untouched
    pub fn update_details(&mut self, details: MovieDetails) {
        self.details = details;
        self.updated_at = Utc::now();
    }

    pub fn set_status(&mut self, status: MovieStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Only the rating aggregate coordinator calls this
    pub(crate) fn apply_rating_change(&mut self, change: RatingChange) {
        self.ratings = self.ratings.apply(change);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::movie::domain::value_objects::StarRating;

    fn details() -> MovieDetails {
        MovieDetails::new("Inception", "Christopher Nolan", 2010)
            .with_genres(vec!["Action".into(), "Sci-Fi".into()])
    }

    #[test]
    fn test_new_movie_is_active_with_empty_ratings() {
        let movie = Movie::new(details(), Uuid::new_v4());
        assert!(movie.is_active());
        assert_eq!(movie.ratings().count(), 0);
    }

    #[test]
    fn test_update_details_keeps_distribution() {
        let mut movie = Movie::new(details(), Uuid::new_v4());
        movie.apply_rating_change(RatingChange::add(StarRating::new(5).unwrap()));

        let mut renamed = details();
        renamed.title = "Inception (Director's Cut)".into();
        movie.update_details(renamed);

        assert_eq!(movie.details.title, "Inception (Director's Cut)");
        assert_eq!(movie.ratings().count(), 1);
        assert_eq!(movie.ratings().average(), 5.0);
    }

    #[test]
    fn test_normalized_trims_and_requires_fields() {
        let mut raw = details();
        raw.title = "  Inception ".into();
        raw.genres = vec![" Action ".into(), " ".into()];
        let clean = raw.normalized().unwrap();
        assert_eq!(clean.title, "Inception");
        assert_eq!(clean.genres, vec!["Action".to_string()]);

        let mut missing_director = details();
        missing_director.director = "   ".into();
        assert!(matches!(
            missing_director.normalized(),
            Err(AppError::ValidationError(_))
        ));

        let mut no_genres = details();
        no_genres.genres.clear();
        assert!(no_genres.normalized().is_err());

        let mut too_old = details();
        too_old.year = 1850;
        assert!(too_old.normalized().is_err());
    }

    #[test]
    fn test_serializes_flattened_camel_case() {
        let movie = Movie::new(details(), Uuid::new_v4());
        let json = serde_json::to_value(&movie).unwrap();

        assert_eq!(json["title"], "Inception");
        assert_eq!(json["status"], "active");
        assert_eq!(json["ratings"]["count"], 0);
        assert!(json.get("addedBy").is_some());
    }
}
