use uuid::Uuid;

use crate::shared::utils::{KeyedGuard, KeyedLocks};

/// Per-movie write locks shared by every writer of a movie record
///
/// Rating aggregation and administrator edits both rewrite the full movie
/// record, so they must hold the same lease to avoid lost updates.
#[derive(Default)]
pub struct MovieLocks {
    inner: KeyedLocks<Uuid>,
}

impl MovieLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, movie_id: Uuid) -> MovieLease<'_> {
        MovieLease {
            guard: self.inner.acquire(&movie_id).await,
        }
    }
}

/// Proof that the caller holds the write lock for one movie
pub struct MovieLease<'a> {
    guard: KeyedGuard<'a, Uuid>,
}

impl MovieLease<'_> {
    pub fn movie_id(&self) -> Uuid {
        *self.guard.key()
    }
}
