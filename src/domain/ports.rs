use crate::domain::model::Record;
use crate::utils::error::Result;

/// Sink for progress and diagnostics emitted during a conversion.
pub trait Reporter {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Renders the parsed rows of one record kind into a Markdown section.
pub trait Renderer {
    fn render(&self, records: &[Record], reporter: &dyn Reporter) -> Result<String>;
}

/// Forwards reports to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
