use std::sync::Arc;

use crate::client::storage::{self, KeyValueStorage};
use crate::schemas::enrollment::Enrollment;

const STORAGE_KEY: &str = "course-enrollments";

/// The client's record of its own enrollments. The server only validates and
/// mints records; this log is the system of record for "am I enrolled".
#[derive(Clone)]
pub struct EnrollmentLog {
    storage: Arc<dyn KeyValueStorage>,
}

impl EnrollmentLog {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Vec<Enrollment> {
        storage::load_json(self.storage.as_ref(), STORAGE_KEY).unwrap_or_default()
    }

    pub fn add(&self, enrollment: Enrollment) {
        let mut all = self.list();
        all.push(enrollment);
        storage::save_json(self.storage.as_ref(), STORAGE_KEY, &all);
    }

    /// Remove by enrollment id. Unknown ids are a no-op.
    pub fn remove(&self, enrollment_id: &str) {
        let mut all = self.list();
        all.retain(|enrollment| enrollment.id != enrollment_id);
        storage::save_json(self.storage.as_ref(), STORAGE_KEY, &all);
    }

    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.find_by_course(course_id).is_some()
    }

    pub fn find_by_course(&self, course_id: &str) -> Option<Enrollment> {
        self.list().into_iter().find(|enrollment| enrollment.course_id == course_id)
    }
}
