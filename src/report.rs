//! Progress reporting.
//!
//! Pipeline stages report through a `&dyn Reporter` handed to them by the
//! caller. The library never installs a subscriber of its own.

use std::fmt;

/// Sink for progress messages.
pub trait Reporter {
    /// A user-facing step, e.g. resizing or saving.
    fn info(&self, message: fmt::Arguments<'_>);
    /// Per-part detail.
    fn debug(&self, message: fmt::Arguments<'_>);
}

/// Forwards messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: fmt::Arguments<'_>) {
        tracing::info!(target: "photo2skin", "{}", message);
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        tracing::debug!(target: "photo2skin", "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _message: fmt::Arguments<'_>) {}

    fn debug(&self, _message: fmt::Arguments<'_>) {}
}
