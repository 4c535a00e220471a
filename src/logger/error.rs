use std::io;
use std::path::PathBuf;

/// Construction failures. These are the only errors this crate ever
/// returns; once a logger exists, write failures are swallowed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("create log directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("open log file {path:?}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
