use crate::level::Level;
use crate::logger::Error;
use crate::logger::logger::{Logger, Pipeline};
use crate::sink::{ConsoleSink, Fanout, FileSink, Sink};
use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration consumed once by [`build`](Builder::build). Later calls
/// override earlier ones for the same field.
pub struct Builder {
    level: Level,
    file_path: Option<PathBuf>,
    writer: Option<Box<dyn Write + Send>>,
}

impl Builder {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            file_path: None,
            writer: None,
        }
    }

    /// Enables additional file logging at the given path. Parent
    /// directories are created automatically if they don't exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Sets a custom writer for console output instead of stdout.
    /// Useful for testing or redirecting output.
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Assembles the sinks and returns a logger scoped `"main"`. Fails only
    /// on directory creation or file open; nothing half-built escapes.
    pub fn build(self) -> Result<Logger, Error> {
        let out = self.writer.unwrap_or_else(|| Box::new(io::stdout()));
        let mut sinks: Vec<Box<dyn Sink>> = vec![Box::new(ConsoleSink::new(out))];

        if let Some(path) = self.file_path {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                let mut dir_builder = DirBuilder::new();
                dir_builder.recursive(true);
                #[cfg(unix)]
                {
                    use std::os::unix::fs::DirBuilderExt;
                    dir_builder.mode(0o750);
                }
                dir_builder.create(dir).map_err(|source| Error::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| Error::OpenFile {
                    path: path.clone(),
                    source,
                })?;
            sinks.push(Box::new(FileSink::new(file)));
        }

        let pipeline = Pipeline::new(self.level, Fanout::new(sinks));
        Ok(Logger::from_pipeline(Arc::new(pipeline), "main"))
    }
}
