use std::sync::Arc;

use crate::client::storage::{self, KeyValueStorage};

const STORAGE_KEY: &str = "search_history";

/// Shortest search term worth remembering.
const MIN_TERM_LEN: usize = 2;

/// How many recent searches to keep.
const MAX_ENTRIES: usize = 3;

/// Recent search terms, most recent first, deduplicated, capped.
#[derive(Clone)]
pub struct SearchHistory {
    storage: Arc<dyn KeyValueStorage>,
}

impl SearchHistory {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Vec<String> {
        storage::load_json(self.storage.as_ref(), STORAGE_KEY).unwrap_or_default()
    }

    /// Record a committed search. Terms shorter than the minimum after
    /// trimming are ignored; a repeated term moves to the front.
    pub fn record(&self, term: &str) {
        let term = term.trim();
        if term.chars().count() < MIN_TERM_LEN {
            return;
        }

        let mut entries = self.list();
        entries.retain(|entry| entry != term);
        entries.insert(0, term.to_string());
        entries.truncate(MAX_ENTRIES);
        storage::save_json(self.storage.as_ref(), STORAGE_KEY, &entries);
    }

    pub fn clear(&self) {
        storage::remove_key(self.storage.as_ref(), STORAGE_KEY);
    }
}
