//! Opt-in `tracing` setup for hosts that do not bring their own subscriber.
//!
//! The crate itself only emits events; nothing here runs unless a host
//! calls one of these initializers, and both are no-ops without the
//! `telemetry` feature.

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling
/// back to `info` when the variable is unset or malformed.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}

/// Like [`init_default_tracing`], but with an explicit fallback filter
/// directive, e.g. `"lifewheel=debug"`.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_not_reported_as_success() {
        // Whatever the first call returns, a second install attempt must
        // not claim success: the global subscriber slot is already taken,
        // or the feature is off and nothing installs at all.
        let _ = init_default_tracing();
        assert!(!init_tracing_with_filter("debug"));
    }
}
