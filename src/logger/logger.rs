use crate::level::{Level, Severity};
use crate::logger::{Builder, Error};
use crate::sink::{Fanout, Record};
use std::error::Error as StdError;
use std::sync::{Arc, Mutex};

/// Structured logging with scoping support. Implemented by the real
/// [`Logger`] and by [`NoopLogger`](super::NoopLogger); callers pick one at
/// construction time.
pub trait Log: Send + Sync {
    fn info(&self, message: &str);
    fn event(&self, message: &str);
    fn debug(&self, key: &str, value: &str);
    fn error(&self, error: &dyn StdError, message: &str);
    fn scope(&self, name: &str) -> Arc<dyn Log>;
}

/// State shared by every logger derived from one construction call:
/// the level threshold and the fan-out behind a mutex.
pub(crate) struct Pipeline {
    threshold: Level,
    fanout: Mutex<Fanout>,
}

impl Pipeline {
    pub(crate) fn new(threshold: Level, fanout: Fanout) -> Self {
        Self {
            threshold,
            fanout: Mutex::new(fanout),
        }
    }

    fn enabled(&self, severity: Severity) -> bool {
        self.threshold.allows(severity)
    }

    // A poisoned lock means another logging thread panicked mid-write;
    // the record is dropped like any other write failure.
    fn emit(&self, record: &Record) {
        if let Ok(mut fanout) = self.fanout.lock() {
            fanout.emit(record);
        }
    }
}

/// The real logger: a shared pipeline plus a scope label shown in output.
/// Immutable after creation; `scope` derives, it never mutates.
#[derive(Clone)]
pub struct Logger {
    pipeline: Arc<Pipeline>,
    scope: String,
}

impl Logger {
    /// Creates a logger at the given level with the default configuration:
    /// colored output to stdout, scoped `"main"`.
    pub fn new(level: Level) -> Result<Logger, Error> {
        Builder::new(level).build()
    }

    /// Starts a [`Builder`] for file logging or a custom writer.
    pub fn builder(level: Level) -> Builder {
        Builder::new(level)
    }

    pub(crate) fn from_pipeline(pipeline: Arc<Pipeline>, scope: impl Into<String>) -> Self {
        Self {
            pipeline,
            scope: scope.into(),
        }
    }
}

impl Log for Logger {
    fn info(&self, message: &str) {
        if !self.pipeline.enabled(Severity::Info) {
            return;
        }
        let record = Record::new(Severity::Info, format!("[{}] {}", self.scope, message));
        self.pipeline.emit(&record);
    }

    fn event(&self, message: &str) {
        if !self.pipeline.enabled(Severity::Event) {
            return;
        }
        let record = Record::new(Severity::Event, format!("-{} ({})", message, self.scope));
        self.pipeline.emit(&record);
    }

    fn debug(&self, key: &str, value: &str) {
        if !self.pipeline.enabled(Severity::Debug) {
            return;
        }
        let record = Record::new(
            Severity::Debug,
            format!(" {}: {} ({})", key, value, self.scope),
        );
        self.pipeline.emit(&record);
    }

    fn error(&self, error: &dyn StdError, message: &str) {
        if !self.pipeline.enabled(Severity::Error) {
            return;
        }
        let record = Record::new(Severity::Error, format!("[{}] {}", self.scope, message))
            .with_error(error.to_string());
        self.pipeline.emit(&record);
    }

    fn scope(&self, name: &str) -> Arc<dyn Log> {
        Arc::new(Logger {
            pipeline: Arc::clone(&self.pipeline),
            scope: name.to_string(),
        })
    }
}
