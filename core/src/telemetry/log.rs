use log::{debug, info};
use std::fmt;

/// Thin wrapper over the `log` facade that tags records with a stage name.
#[derive(Debug, Clone, Copy)]
pub struct StageLogger {
    stage: &'static str,
}

impl StageLogger {
    pub fn new(stage: &'static str) -> Self {
        Self { stage }
    }

    /// Per-point decisions; verbose, so kept at debug level. Arguments are
    /// only rendered when debug logging is enabled.
    pub fn trace_point(&self, args: fmt::Arguments<'_>) {
        debug!("{}: {}", self.stage, args);
    }

    pub fn record(&self, args: fmt::Arguments<'_>) {
        info!("{}: {}", self.stage, args);
    }
}
