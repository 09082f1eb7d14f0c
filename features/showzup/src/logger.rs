/// Optional sink for tagged progress and failure messages
pub trait Logger: Send + Sync {
    fn log(&self, tag: &str, message: &str);
    fn log_error(&self, tag: &str, message: &str);
}

/// Forwards messages to `tracing`, with the tag as a field
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, tag: &str, message: &str) {
        tracing::debug!(tag = tag, "{message}");
    }

    fn log_error(&self, tag: &str, message: &str) {
        tracing::error!(tag = tag, "{message}");
    }
}
