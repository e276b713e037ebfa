/*!
 * Structured Tracing
 * Subscriber setup and spans for directory binds using the tracing crate
 */

use crate::config::AdsiConfig;
use std::time::Instant;
use tracing::{debug, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Binds slower than this are reported at warn level
const SLOW_BIND_MILLIS: u128 = 100;

/// Initialize structured tracing from the environment
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - ADSI_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() -> bool {
    init_tracing_with(&AdsiConfig::from_env())
}

/// Initialize structured tracing from an explicit configuration
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_with(config: &AdsiConfig) -> bool {
    let env_filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.trace_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        debug!(json = config.trace_json, filter = %config.log_filter, "tracing initialized");
    }
    installed
}

/// Span covering one provider bind of an ADs path
pub struct BindSpan {
    span: tracing::Span,
    start: Instant,
}

impl BindSpan {
    pub fn new(kind: &'static str, path: &str) -> Self {
        let span = span!(
            Level::DEBUG,
            "bind",
            kind = kind,
            path = path,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
            duration_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Record the bind result
    pub fn record_result<T, E: std::fmt::Display>(&self, result: &Result<T, E>) {
        match result {
            Ok(_) => {
                self.span.record("result", "success");
            }
            Err(e) => {
                self.span.record("result", "error");
                self.span.record("error", tracing::field::display(e));
            }
        }
    }

    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for BindSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration.as_millis() > SLOW_BIND_MILLIS {
            let _entered = self.span.enter();
            warn!(
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow directory bind"
            );
        }
    }
}
