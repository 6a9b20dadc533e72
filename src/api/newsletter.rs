use axum::{routing::post, Json, Router};

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::schemas::newsletter::{NewsletterRequest, NewsletterResponse};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", post(subscribe))
}

/// Deliberately loose check: any address with an `@` is accepted.
async fn subscribe(
    Json(payload): Json<NewsletterRequest>,
) -> Result<Json<NewsletterResponse>, ApiError> {
    let email = payload.email.unwrap_or_default();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::BadRequest("Valid email is required".to_string()));
    }

    Ok(Json(NewsletterResponse {
        success: true,
        message: "Successfully subscribed to newsletter".to_string(),
    }))
}
