//! The application context.

use crate::config::WeConfig;
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, info};
use we_base::{Entity, Result, VirtualEntity};
use we_log::{Logger, LoggerRegistry};

/// Owns the configuration and the logger registry of one application.
///
/// Owners are identified by type: `we.logger::<Billing>()` is the logger
/// bound to `Billing`.
#[derive(Debug)]
pub struct We {
    config: WeConfig,
    loggers: LoggerRegistry,
}

impl We {
    pub fn new(config: WeConfig) -> Self {
        let loggers = LoggerRegistry::new(config.mode);
        Self { config, loggers }
    }

    /// Context configured from the environment.
    pub fn from_env() -> Self {
        Self::new(WeConfig::from_env())
    }

    pub fn config(&self) -> &WeConfig {
        &self.config
    }

    pub fn loggers(&self) -> &LoggerRegistry {
        &self.loggers
    }

    /// Installs the `tracing` subscriber using the configured verbosity.
    pub fn init_tracing(&self) -> bool {
        let installed = we_log::init_tracing(self.config.verbose);
        if installed {
            info!(mode = ?self.config.mode, "Tracing initialized");
        }
        installed
    }

    /// Logger bound to `O`, created on first access.
    pub fn logger<O: 'static>(&self) -> Arc<Logger> {
        self.loggers.get::<O>()
    }

    /// Binds a dynamically typed component as the logger of `O`; anything
    /// other than a [`Logger`] fails with `InvalidConfig`.
    pub fn set_logger<O: 'static>(&self, logger: Arc<dyn Any + Send + Sync>) -> Result<()> {
        self.loggers.set::<O>(logger)
    }

    pub fn bind_logger<O: 'static>(&self, logger: Arc<Logger>) {
        self.loggers.bind::<O>(logger);
    }

    pub fn log<O: 'static>(&self, message: &str, category: Option<&str>) -> bool {
        self.loggers.log::<O>(message, Some(self.category(category)))
    }

    pub fn warn<O: 'static>(&self, message: &str, category: Option<&str>) -> bool {
        self.loggers.warn::<O>(message, Some(self.category(category)))
    }

    pub fn error<O: 'static>(&self, message: &str, category: Option<&str>) -> bool {
        self.loggers.error::<O>(message, Some(self.category(category)))
    }

    /// Constructs an entity from a JSON configuration.
    ///
    /// A failed construction is reported to the entity type's logger under
    /// the `entity` category and then returned to the caller. In production
    /// mode the logger suppresses the report; the error is still returned.
    pub fn create<T: VirtualEntity>(&self, config: Value) -> Result<Entity<T>> {
        Entity::<T>::from_value(config).inspect_err(|e| {
            if !self.error::<T>(&e.to_string(), Some("entity")) {
                debug!(
                    class = T::class_name(),
                    error = %e,
                    "Entity construction failure not recorded by logger"
                );
            }
        })
    }

    fn category<'a>(&'a self, category: Option<&'a str>) -> &'a str {
        category.unwrap_or(&self.config.default_category)
    }
}

impl Default for We {
    fn default() -> Self {
        Self::from_env()
    }
}
