//! Opt-in `tracing` setup for binaries and demos.
//!
//! The library only emits events; hosts that already own a subscriber should
//! skip these helpers.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "world_chart=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG` or
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or another global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback filter.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
