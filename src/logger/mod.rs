//! The `logger` module is the facade surface: the `Log` trait, the real
//! `Logger`, its `Builder`, and the no-op variant.
//! See `bin/logger_demo.rs` for a test binary demonstrating its usage.

mod error;
mod logger;
mod noop;
mod options;

pub use error::*;
pub use logger::*;
pub use noop::*;
pub use options::*;
