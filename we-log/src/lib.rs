//! Logging for the We framework.
//!
//! - [`Logger`] — leveled messages written to an in-memory sink and mirrored
//!   as `tracing` events
//! - [`LoggerRegistry`] — binds one logger per owner type, creating a default
//!   logger on first access
//! - [`Level`] / [`Mode`] — severities and the execution mode that decides
//!   whether error-level output is suppressed
//! - [`init_tracing`] — installs the process-wide `tracing` subscriber
//!
//! The registry is an ordinary value: an application context owns it and
//! hands it out, there is no hidden global.

mod level;
mod logger;
mod registry;
mod subscriber;

pub use level::{ENV_VAR, Level, Mode};
pub use logger::{DEFAULT_CAPACITY, DEFAULT_CATEGORY, LogRecord, Logger};
pub use registry::LoggerRegistry;
pub use subscriber::init_tracing;
