use crate::level::{Level, Mode};
use crate::logger::{DEFAULT_CATEGORY, Logger};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;
use we_base::{BaseError, Result};

/// Binds one [`Logger`] per owner type.
///
/// Reading the logger of an owner that never had one bound creates a default
/// logger in the registry's mode; later reads return that same instance.
#[derive(Debug)]
pub struct LoggerRegistry {
    mode: Mode,
    loggers: RwLock<HashMap<TypeId, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Mode given to default loggers.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Logger bound to `O`, created on first access.
    pub fn get<O: 'static>(&self) -> Arc<Logger> {
        let key = TypeId::of::<O>();
        if let Some(logger) = self
            .loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write().unwrap_or_else(PoisonError::into_inner);
        let logger = loggers.entry(key).or_insert_with(|| {
            debug!(owner = type_name::<O>(), mode = ?self.mode, "Creating default logger");
            Arc::new(Logger::with_mode(self.mode))
        });
        Arc::clone(logger)
    }

    /// Binds `logger` to `O`, replacing any previous binding.
    pub fn bind<O: 'static>(&self, logger: Arc<Logger>) {
        debug!(owner = type_name::<O>(), "Binding logger");
        self.loggers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<O>(), logger);
    }

    /// Binds a dynamically typed component to `O`.
    ///
    /// Fails with `InvalidConfig` when the component is not a [`Logger`]; the
    /// previous binding is kept in that case.
    pub fn set<O: 'static>(&self, candidate: Arc<dyn Any + Send + Sync>) -> Result<()> {
        let logger = candidate.downcast::<Logger>().map_err(|_| {
            BaseError::invalid_config("Logger configuration must be an instance of Logger")
        })?;
        self.bind::<O>(logger);
        Ok(())
    }

    pub fn is_bound<O: 'static>(&self) -> bool {
        self.loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<O>())
    }

    /// Removes the binding of `O`; the next read creates a fresh default.
    pub fn unbind<O: 'static>(&self) -> Option<Arc<Logger>> {
        self.loggers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&TypeId::of::<O>())
    }

    /// Info-level message to the logger of `O`.
    pub fn log<O: 'static>(&self, message: &str, category: Option<&str>) -> bool {
        self.forward::<O>(message, Level::Info, category)
    }

    /// Warning-level message to the logger of `O`.
    pub fn warn<O: 'static>(&self, message: &str, category: Option<&str>) -> bool {
        self.forward::<O>(message, Level::Warning, category)
    }

    /// Error-level message to the logger of `O`.
    pub fn error<O: 'static>(&self, message: &str, category: Option<&str>) -> bool {
        self.forward::<O>(message, Level::Error, category)
    }

    fn forward<O: 'static>(&self, message: &str, level: Level, category: Option<&str>) -> bool {
        self.get::<O>()
            .log(message, level, category.unwrap_or(DEFAULT_CATEGORY))
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new(Mode::from_env())
    }
}
