use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config::Settings;

/// Default directives when `RUST_LOG` is unset: the configured level for this
/// crate, with the HTTP plumbing quieted to warnings.
fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},hyper=warn,tower_http=warn"))
}

pub(crate) fn init_tracing(settings: &Settings) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&settings.telemetry().log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(fmt::format::FmtSpan::CLOSE);

    let result = if settings.telemetry().json {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|err| anyhow::anyhow!(err.to_string()))?;

    Ok(())
}
