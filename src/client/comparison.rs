use crate::catalog::store::Course;

/// Most courses a client can line up side by side.
const MAX_COMPARED: usize = 2;

/// Courses selected for side-by-side comparison. Session-scoped: unlike
/// favorites or enrollments this is never persisted, so a fresh session
/// starts empty.
#[derive(Default)]
pub struct ComparisonSet {
    courses: Vec<Course>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|course| course.id == course_id)
    }

    /// Add a course to the selection. Returns false, leaving the selection
    /// unchanged, when it is already full or already holds this course.
    pub fn add(&mut self, course: Course) -> bool {
        if self.courses.len() >= MAX_COMPARED || self.contains(&course.id) {
            return false;
        }
        self.courses.push(course);
        true
    }

    pub fn remove(&mut self, course_id: &str) {
        self.courses.retain(|course| course.id != course_id);
    }

    pub fn clear(&mut self) {
        self.courses.clear();
    }
}
