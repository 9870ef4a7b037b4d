use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    pub word: String,
    pub max_side: u32,
}

/// Remembers the outcome of every word packed so far, including words that
/// had no solution.
///
/// Entries are never evicted. Lookups hand out clones, so callers can't reach
/// the stored grids.
#[derive(Debug, Default)]
pub(crate) struct ResultCache {
    entries: Mutex<HashMap<CacheKey, Option<Grid>>>,
}

impl ResultCache {
    /// Returns `None` on a miss, or `Some(outcome)` for a word seen before.
    pub fn get(&self, key: &CacheKey) -> Option<Option<Grid>> {
        self.lock().get(key).cloned()
    }

    pub fn insert(&self, key: CacheKey, outcome: Option<Grid>) {
        self.lock().insert(key, outcome);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // Entries are complete snapshots, so a panic elsewhere can't leave one
    // half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Option<Grid>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
