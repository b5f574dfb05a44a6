use std::sync::Arc;
use uuid::Uuid;

use super::movie_locks::MovieLocks;
use crate::modules::movie::domain::{Movie, MovieDetails, MovieRepository, MovieStatus};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Actor;
use crate::{log_debug, log_info};

/// Administrator catalog curation
pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    movie_locks: Arc<MovieLocks>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, movie_locks: Arc<MovieLocks>) -> Self {
        Self {
            movie_repo,
            movie_locks,
        }
    }

    pub async fn create_movie(&self, actor: &Actor, details: MovieDetails) -> AppResult<Movie> {
        require_admin(actor)?;
        let details = details.normalized()?;

        let movie = Movie::new(details, actor.id);
        let saved = self.movie_repo.save(&movie).await?;

        log_info!("Movie {} '{}' added by {}", saved.id, saved.details.title, actor.id);
        Ok(saved)
    }

    pub async fn get_movie(&self, id: &Uuid) -> AppResult<Movie> {
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))
    }

    /// Replace descriptive fields without touching the rating distribution
    pub async fn update_details(
        &self,
        actor: &Actor,
        id: &Uuid,
        details: MovieDetails,
    ) -> AppResult<Movie> {
        require_admin(actor)?;
        let details = details.normalized()?;

        let _lease = self.movie_locks.lock(*id).await;
        let mut movie = self.get_movie(id).await?;
        movie.update_details(details);

        log_debug!("Updating details of movie {}", id);
        self.movie_repo.save(&movie).await
    }

    pub async fn set_status(
        &self,
        actor: &Actor,
        id: &Uuid,
        status: MovieStatus,
    ) -> AppResult<Movie> {
        require_admin(actor)?;

        let _lease = self.movie_locks.lock(*id).await;
        let mut movie = self.get_movie(id).await?;
        movie.set_status(status);

        let saved = self.movie_repo.save(&movie).await?;
        log_info!("Movie {} is now {}", id, status);
        Ok(saved)
    }
}

fn require_admin(actor: &Actor) -> AppResult<()> {
    if !actor.is_admin() {
        return Err(AppError::Forbidden(
            "Access denied. Admin privileges required.".to_string(),
        ));
    }
    Ok(())
}
