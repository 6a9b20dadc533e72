use axum::extract::State;
use axum::{routing::get, Json, Router};

use crate::catalog::store::Department;
use crate::core::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_departments))
}

async fn list_departments(State(state): State<AppState>) -> Json<Vec<Department>> {
    Json(state.catalog().departments().to_vec())
}
