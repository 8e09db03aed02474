//! Telemetry helpers for applications embedding `chart-builder`.
//!
//! Materialization emits `tracing` events (chart/series/axis creation and
//! dropped series entries). Nothing is printed unless the host installs a
//! subscriber: either call one of the helpers below or wire your own.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "chart_builder=info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`,
/// falling back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`], with caller-supplied fallback directives
/// (for example `"chart_builder=trace"` to see every created series).
#[must_use]
pub fn init_tracing_with_filter(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directives));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
