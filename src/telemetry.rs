//! Opt-in tracing setup for hosts that do not install their own subscriber.
//!
//! Pipeline stages only emit `tracing` events; nothing here runs implicitly.

/// Filter used when `RUST_LOG` is absent.
pub const DEFAULT_LOG_FILTER: &str = "indicator_charts=info,warn";

/// Installs a compact stderr subscriber filtered by `RUST_LOG` or
/// [`DEFAULT_LOG_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_LOG_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback filter.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
