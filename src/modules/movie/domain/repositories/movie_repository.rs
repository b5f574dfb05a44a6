use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::movie::domain::entities::Movie;
use crate::shared::errors::AppResult;

/// Storage port for movies
///
/// `Ok(None)` means the movie does not exist; `Err` is reserved for storage
/// failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Movie>>;

    /// Insert or overwrite the whole movie record
    async fn save(&self, movie: &Movie) -> AppResult<Movie>;
}
