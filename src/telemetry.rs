//! Tracing bootstrap for hosts embedding `chart-helpers-rs`.
//!
//! Subscriber setup stays explicit and opt-in: hosts either call
//! [`init_default_tracing`] once at startup or install their own subscriber
//! and filters, in which case this module does nothing for them.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// Returns `true` when initialization succeeds, `false` when the feature is
/// disabled or the host already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_helpers_rs=info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
