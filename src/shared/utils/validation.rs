use chrono::{Datelike, Utc};

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Trim optional free text and enforce a character limit; blank text becomes `None`
    pub fn normalize_text(
        field: &str,
        value: Option<&str>,
        max_chars: usize,
    ) -> Result<Option<String>, AppError> {
        let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        if trimmed.chars().count() > max_chars {
            return Err(AppError::ValidationError(format!(
                "{} too long (max {} characters)",
                field, max_chars
            )));
        }
        Ok(Some(trimmed.to_string()))
    }

    pub fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        Self::validate_required("Title", title)?;
        if title.chars().count() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    /// Release years run from 1900 up to five years past the current year
    pub fn validate_release_year(year: i32) -> Result<(), AppError> {
        let latest = Utc::now().year() + 5;
        if !(1900..=latest).contains(&year) {
            return Err(AppError::ValidationError(format!(
                "Year must be between 1900 and {}",
                latest
            )));
        }
        Ok(())
    }

    pub fn validate_pagination(page: u32, page_size: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::ValidationError(
                "Page numbers start at 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > 100 {
            return Err(AppError::ValidationError(
                "Page size cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}
