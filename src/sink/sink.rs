use super::Record;
use std::io;

/// One output destination for log records.
pub trait Sink: Send {
    fn emit(&mut self, record: &Record) -> io::Result<()>;
}

/// Multiplexing sink: every record is offered to every destination.
/// Delivery is best-effort; a failing destination never blocks the others,
/// and logging must never surface an error to the caller.
pub struct Fanout {
    sinks: Vec<Box<dyn Sink>>,
}

impl Fanout {
    pub fn new(sinks: Vec<Box<dyn Sink>>) -> Self {
        Self { sinks }
    }

    pub fn emit(&mut self, record: &Record) {
        for sink in &mut self.sinks {
            let _ = sink.emit(record);
        }
    }
}
