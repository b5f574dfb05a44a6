/// Per-key asynchronous mutual exclusion
///
/// Hands out one `tokio::sync::Mutex` per key so that read-modify-write
/// sequences against the same entity are serialized while different keys
/// proceed in parallel. Idle entries are dropped when the last guard for a
/// key is released.
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

pub struct KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    locks: DashMap<K, Arc<Mutex<()>>>,
}

impl<K> Default for KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Wait until the lock for `key` is free and take it
    pub async fn acquire(&self, key: &K) -> KeyedGuard<'_, K> {
        // The shard lock is released before awaiting
        let lock = self.locks.entry(key.clone()).or_default().clone();
        let guard = lock.lock_owned().await;

        KeyedGuard {
            owner: self,
            key: key.clone(),
            guard: Some(guard),
        }
    }

    /// Number of keys with a live lock entry
    pub fn active_keys(&self) -> usize {
        self.locks.len()
    }
}

/// Held lock for one key; released on drop
pub struct KeyedGuard<'a, K>
where
    K: Eq + Hash + Clone,
{
    owner: &'a KeyedLocks<K>,
    key: K,
    guard: Option<OwnedMutexGuard<()>>,
}

impl<K> KeyedGuard<'_, K>
where
    K: Eq + Hash + Clone,
{
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K> Drop for KeyedGuard<'_, K>
where
    K: Eq + Hash + Clone,
{
    fn drop(&mut self) {
        self.guard.take();
        // Only the map itself still references the mutex: nobody holds or waits on it
        self.owner
            .locks
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}
