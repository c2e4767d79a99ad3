//! Process-lifetime lookup cache.
//!
//! Entries are keyed by the exact string the caller looked up (no case
//! folding) and are never expired or evicted. Only successfully decoded
//! fruits are stored, so a hit always carries a value.

use crate::error::LookupError;
use crate::fruit::Fruit;
use moka::future::Cache;
use std::future::Future;

/// In-memory fruit cache owned by a [`FruitApi`](crate::api::FruitApi).
///
/// Cloning is cheap and clones share the same entries.
#[derive(Clone)]
pub struct LookupCache {
    entries: Cache<String, Fruit>,
}

impl LookupCache {
    pub fn new() -> Self {
        // No max_capacity: moka only evicts when a bound is configured
        Self {
            entries: Cache::builder().build(),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Fruit> {
        self.entries.get(key).await
    }

    pub async fn insert(&self, key: &str, fruit: Fruit) {
        self.entries.insert(key.to_string(), fruit).await;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Return the cached fruit or run `fetch` to populate it.
    ///
    /// Concurrent callers for the same missing key wait on a single `fetch`.
    /// Errors are handed to every waiter and nothing is cached for them.
    pub async fn get_or_try_insert_with<F>(&self, key: &str, fetch: F) -> Result<Fruit, LookupError>
    where
        F: Future<Output = Result<Fruit, LookupError>>,
    {
        self.entries
            .try_get_with(key.to_string(), fetch)
            .await
            .map_err(|e| (*e).clone())
    }

    /// Number of cached fruits.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new()
    }
}
