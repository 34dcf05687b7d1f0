//! Tracing bootstrap for the bookshelf service.

use tracing_subscriber::EnvFilter;

use bookshelf_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the tracing/logging pipeline.
///
/// Honors `RUST_LOG` when set, defaulting to `info`. Safe to call more than
/// once; later calls are no-ops.
pub fn init(settings: &TelemetrySettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let initialized = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if initialized.is_ok() {
        tracing::debug!(format = ?settings.log_format, "telemetry initialized");
    }
}
