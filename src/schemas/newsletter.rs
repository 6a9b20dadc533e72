use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct NewsletterRequest {
    pub(crate) email: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewsletterResponse {
    pub(crate) success: bool,
    pub(crate) message: String,
}
