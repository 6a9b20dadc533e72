use axum::extract::Path;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use time::OffsetDateTime;

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::schemas::enrollment::{
    CancelResponse, EnrollmentCreatedResponse, EnrollmentListResponse, EnrollmentPayload,
};
use crate::services::enrollment;


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route("/:enrollment_id", axum::routing::delete(cancel_enrollment))
}

/// The server holds no enrollment records; clients track their own, so the
/// list is always empty.
async fn list_enrollments() -> Json<EnrollmentListResponse> {
    Json(EnrollmentListResponse { enrollments: Vec::new() })
}

async fn create_enrollment(
    Json(payload): Json<EnrollmentPayload>,
) -> Result<(StatusCode, Json<EnrollmentCreatedResponse>), ApiError> {
    let enrollment = enrollment::submit(&payload, OffsetDateTime::now_utc())?;

    tracing::info!(
        course_id = %enrollment.course_id,
        enrollment_id = %enrollment.id,
        "Enrollment accepted"
    );

    Ok((StatusCode::CREATED, Json(EnrollmentCreatedResponse { success: true, enrollment })))
}

/// Always acknowledges: with no server-side record there is nothing to check
/// against, and the client removes its local copy on success.
async fn cancel_enrollment(Path(enrollment_id): Path<String>) -> Json<CancelResponse> {
    tracing::info!(enrollment_id = %enrollment_id, "Enrollment cancellation acknowledged");

    Json(CancelResponse {
        success: true,
        message: "Enrollment cancelled successfully".to_string(),
    })
}
