//! Structured logging facade with leveled, scoped, optionally
//! multi-destination output: colored console lines plus an append-only
//! JSON-lines file.
//!
//! ```no_run
//! use scopelog::level::Level;
//! use scopelog::logger::{Log, Logger};
//!
//! let logger = Logger::new(Level::Info)?;
//! logger.info("server started");
//! logger.scope("auth").info("user logged in");
//! # Ok::<(), scopelog::logger::Error>(())
//! ```
//!
//! With file logging:
//!
//! ```no_run
//! use scopelog::level::parse_level;
//! use scopelog::logger::{Log, Logger};
//!
//! let logger = Logger::builder(parse_level("debug"))
//!     .with_file("logs/app.log")
//!     .build()?;
//! logger.debug("cache", "warm");
//! # Ok::<(), scopelog::logger::Error>(())
//! ```

pub mod level;
pub mod logger;
pub mod sink;
