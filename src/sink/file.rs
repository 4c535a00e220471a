use super::{Record, Sink};
use std::fs::File;
use std::io::{self, Write};

/// Appends each record as one JSON line. The handle stays open for the
/// lifetime of the pipeline; there is no rotation and no reopen.
pub struct FileSink {
    file: File,
}

impl FileSink {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

impl Sink for FileSink {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        serde_json::to_writer(&mut self.file, record).map_err(io::Error::from)?;
        self.file.write_all(b"\n")
    }
}
