use crate::model::NormalizedRecipe;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-lifetime memo cache for successful searches.
///
/// Keyed by [`crate::SearchMode::cache_key`]. Only found recipes are stored;
/// a not-found outcome may be a transient backend failure and stays
/// retryable. No eviction: input cardinality is small and processes are
/// short-lived.
#[derive(Default)]
pub struct SearchCache {
    entries: Mutex<HashMap<String, NormalizedRecipe>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<NormalizedRecipe> {
        self.entries.lock().expect("cache lock").get(key).cloned()
    }

    pub fn insert(&self, key: String, recipe: &NormalizedRecipe) {
        self.entries
            .lock()
            .expect("cache lock")
            .insert(key, recipe.clone());
    }
}
