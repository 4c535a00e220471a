use crate::logger::Log;
use std::error::Error as StdError;
use std::sync::{Arc, LazyLock};

/// Logger that discards all output. Useful for tests or anywhere logging
/// should be fully silenced at zero cost.
#[derive(Debug, Clone, Copy)]
pub struct NoopLogger;

static SHARED: LazyLock<Arc<NoopLogger>> = LazyLock::new(|| Arc::new(NoopLogger));

impl NoopLogger {
    pub fn new() -> Self {
        Self
    }

    /// The process-wide shared instance. `scope` hands this back instead of
    /// allocating a fresh value.
    pub fn shared() -> Arc<dyn Log> {
        SHARED.clone()
    }
}

impl Default for NoopLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for NoopLogger {
    fn info(&self, _message: &str) {}
    fn event(&self, _message: &str) {}
    fn debug(&self, _key: &str, _value: &str) {}
    fn error(&self, _error: &dyn StdError, _message: &str) {}
    fn scope(&self, _name: &str) -> Arc<dyn Log> {
        Self::shared()
    }
}
