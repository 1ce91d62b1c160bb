//! Telemetry initialization and validation run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, debug_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Default filter when `RUST_LOG` is unset. Notifications are the CLI's
/// primary output, so routine logs stay quiet.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a single validation pass.
pub struct ValidationSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl ValidationSpan {
    /// Start a span for a validation pass over `field_count` fields.
    pub fn start(field_count: usize, policy: &'static str) -> Self {
        let run_id = Uuid::new_v4();
        let span = debug_span!(
            target: "formcheck::validator",
            "validate_form",
            %run_id,
            field_count,
            policy
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    /// Run id attached to this pass.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Close the span while recording the outcome.
    pub fn finish(self, outcome: &'static str, notifications: usize) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        debug!(
            target: "formcheck::validator",
            run_id = %self.run_id,
            outcome,
            notifications,
            elapsed_us,
            "Completed form validation"
        );
    }
}
