pub(crate) mod courses;
pub(crate) mod departments;
pub(crate) mod enrollments;
pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod newsletter;
pub(crate) mod pagination;
pub(crate) mod router;
