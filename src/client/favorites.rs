use std::sync::Arc;

use crate::client::storage::{self, KeyValueStorage};

const STORAGE_KEY: &str = "course_favorites";

/// Favorited course ids, kept in the order they were added.
#[derive(Clone)]
pub struct FavoriteSet {
    storage: Arc<dyn KeyValueStorage>,
}

impl FavoriteSet {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Vec<String> {
        storage::load_json(self.storage.as_ref(), STORAGE_KEY).unwrap_or_default()
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.list().iter().any(|id| id == course_id)
    }

    pub fn add(&self, course_id: &str) {
        let mut ids = self.list();
        if !ids.iter().any(|id| id == course_id) {
            ids.push(course_id.to_string());
            storage::save_json(self.storage.as_ref(), STORAGE_KEY, &ids);
        }
    }

    pub fn remove(&self, course_id: &str) {
        let mut ids = self.list();
        ids.retain(|id| id != course_id);
        storage::save_json(self.storage.as_ref(), STORAGE_KEY, &ids);
    }

    /// Flip membership and report the new state.
    pub fn toggle(&self, course_id: &str) -> bool {
        if self.contains(course_id) {
            self.remove(course_id);
            false
        } else {
            self.add(course_id);
            true
        }
    }
}
