use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under the `item_service` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "item_service", "{message}");
    }
    fn warn(&self, message: &str) {
        warn!(target: "item_service", "{message}");
    }
    fn error(&self, message: &str) {
        error!(target: "item_service", "{message}");
    }
    fn debug(&self, message: &str) {
        debug!(target: "item_service", "{message}");
    }
}
