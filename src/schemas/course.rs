use serde::Serialize;

use crate::api::pagination::PageMeta;
use crate::catalog::store::Course;

#[derive(Debug, Serialize)]
pub(crate) struct CourseListResponse {
    pub(crate) courses: Vec<Course>,
    pub(crate) pagination: PageMeta,
}
