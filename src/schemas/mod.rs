use std::collections::HashMap;

use serde::Serialize;

pub(crate) mod course;
pub mod enrollment;
pub(crate) mod newsletter;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) service: String,
    pub(crate) status: String,
    pub(crate) components: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RootResponse {
    pub(crate) message: String,
    pub(crate) version: String,
    pub(crate) courses_url: String,
}
