//! Foundation layer of the We application framework.
//!
//! Re-exports the building blocks and adds the application context:
//! - [`We`] — owns the configuration and the per-owner logger registry
//! - [`WeConfig`] — layered configuration (defaults, JSON layers, environment)
//! - [`Entity`] / [`VirtualEntity`] — entities with virtual properties
//! - [`BaseError`] / [`ErrorKind`] — the framework error taxonomy
//! - [`deep_merge`] — recursive merge of JSON objects

mod config;
mod context;

pub use config::WeConfig;
pub use context::We;

pub use we_base::{
    Access, AccessorTable, AccessorTableBuilder, BaseError, CLASS_NAME, Entity, ErrorKind, Fields,
    Getter, Result, Setter, VirtualEntity, naming,
};
pub use we_helpers::{deep_merge, deep_merged, is_object, ucfirst};
pub use we_log::{
    DEFAULT_CAPACITY, DEFAULT_CATEGORY, Level, LogRecord, Logger, LoggerRegistry, Mode, init_tracing,
};
