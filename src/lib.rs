pub(crate) mod api;
pub mod catalog;
pub mod client;
pub(crate) mod core;
pub mod schemas;
pub mod services;

#[cfg(test)]
mod test_support;

use crate::catalog::store::CourseStore;
use crate::core::{config::Settings, state::AppState, telemetry};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let catalog = CourseStore::load(&settings)?;
    tracing::info!(
        courses = catalog.len(),
        departments = catalog.departments().len(),
        "Course catalog loaded"
    );

    let state = AppState::new(settings, catalog);
    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        "LearnHub Rust API listening"
    );

    axum::serve(listener, app).with_graceful_shutdown(core::shutdown::shutdown_signal()).await?;

    Ok(())
}
