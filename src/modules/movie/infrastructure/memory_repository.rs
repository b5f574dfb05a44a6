/// In-memory movie store backed by `DashMap`
///
/// Suitable for tests and single-process deployments. Every call clones the
/// record so callers never share mutable state with the store.
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::movie::domain::{Movie, MovieRepository};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;

#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: DashMap<Uuid, Movie>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Movie>> {
        Ok(self.movies.get(id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        LogContext::store_write("movie", "save", &movie.id);
        self.movies.insert(movie.id, movie.clone());
        Ok(movie.clone())
    }
}
