use std::sync::Arc;

use crate::client::storage::{self, KeyValueStorage};
use crate::schemas::enrollment::EnrollmentFormData;

fn draft_key(course_id: &str) -> String {
    format!("enrollment_draft_{course_id}")
}

/// In-progress enrollment form data, keyed by course. A draft lives until
/// the enrollment is submitted; it is never expired.
#[derive(Clone)]
pub struct DraftStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl DraftStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn save(&self, course_id: &str, draft: &EnrollmentFormData) {
        storage::save_json(self.storage.as_ref(), &draft_key(course_id), draft);
    }

    pub fn load(&self, course_id: &str) -> Option<EnrollmentFormData> {
        storage::load_json(self.storage.as_ref(), &draft_key(course_id))
    }

    pub fn clear(&self, course_id: &str) {
        storage::remove_key(self.storage.as_ref(), &draft_key(course_id));
    }
}
