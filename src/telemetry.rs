//! Telemetry helpers for applications embedding `chart-legends`.
//!
//! Tracing setup stays explicit and opt-in. Legend controllers emit
//! `debug`/`trace` events for init decisions and render passes, and `warn`
//! events when a pass fails and chart state is rolled back.

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_LEGEND_LOG_DIRECTIVE: &str = "chart_legends=info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_LEGEND_LOG_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_LEGEND_LOG_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"chart_legends=trace"` to follow every legend pass.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
