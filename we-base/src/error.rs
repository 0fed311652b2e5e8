//! Error taxonomy shared by every framework crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for framework operations.
pub type Result<T> = std::result::Result<T, BaseError>;

/// Tag identifying which kind of [`BaseError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidCall,
    InvalidConfig,
    InvalidParam,
    InvalidRoute,
    InvalidValue,
    NotSupported,
    UnknownClass,
    UnknownMethod,
    UnknownProperty,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::InvalidCall,
        ErrorKind::InvalidConfig,
        ErrorKind::InvalidParam,
        ErrorKind::InvalidRoute,
        ErrorKind::InvalidValue,
        ErrorKind::NotSupported,
        ErrorKind::UnknownClass,
        ErrorKind::UnknownMethod,
        ErrorKind::UnknownProperty,
    ];

    /// Error class name, e.g. `InvalidCallError`.
    pub const fn error_name(self) -> &'static str {
        match self {
            ErrorKind::InvalidCall => "InvalidCallError",
            ErrorKind::InvalidConfig => "InvalidConfigError",
            ErrorKind::InvalidParam => "InvalidParamError",
            ErrorKind::InvalidRoute => "InvalidRouteError",
            ErrorKind::InvalidValue => "InvalidValueError",
            ErrorKind::NotSupported => "NotSupportedError",
            ErrorKind::UnknownClass => "UnknownClassError",
            ErrorKind::UnknownMethod => "UnknownMethodError",
            ErrorKind::UnknownProperty => "UnknownPropertyError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.error_name();
        f.write_str(name.strip_suffix("Error").unwrap_or(name))
    }
}

/// Errors raised by the framework.
///
/// Every kind carries a human-readable message and nothing else. `Display`
/// prints the message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseError {
    /// A known member was used the wrong way (e.g. writing a read-only property).
    #[error("{0}")]
    InvalidCall(String),

    /// Configuration has the wrong shape or type.
    #[error("{0}")]
    InvalidConfig(String),

    /// A parameter passed to an operation is invalid.
    #[error("{0}")]
    InvalidParam(String),

    /// A route could not be resolved.
    #[error("{0}")]
    InvalidRoute(String),

    /// A value is outside what the receiver accepts.
    #[error("{0}")]
    InvalidValue(String),

    /// The operation is not supported by the receiver.
    #[error("{0}")]
    NotSupported(String),

    /// No class is registered under the requested name.
    #[error("{0}")]
    UnknownClass(String),

    /// No method is registered under the requested name.
    #[error("{0}")]
    UnknownMethod(String),

    /// The property has neither an own field nor an accessor.
    #[error("{0}")]
    UnknownProperty(String),
}

impl BaseError {
    /// Builds an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::InvalidCall => BaseError::InvalidCall(message),
            ErrorKind::InvalidConfig => BaseError::InvalidConfig(message),
            ErrorKind::InvalidParam => BaseError::InvalidParam(message),
            ErrorKind::InvalidRoute => BaseError::InvalidRoute(message),
            ErrorKind::InvalidValue => BaseError::InvalidValue(message),
            ErrorKind::NotSupported => BaseError::NotSupported(message),
            ErrorKind::UnknownClass => BaseError::UnknownClass(message),
            ErrorKind::UnknownMethod => BaseError::UnknownMethod(message),
            ErrorKind::UnknownProperty => BaseError::UnknownProperty(message),
        }
    }

    pub fn invalid_call(message: impl Into<String>) -> Self {
        BaseError::InvalidCall(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        BaseError::InvalidConfig(message.into())
    }

    pub fn invalid_param(message: impl Into<String>) -> Self {
        BaseError::InvalidParam(message.into())
    }

    pub fn invalid_route(message: impl Into<String>) -> Self {
        BaseError::InvalidRoute(message.into())
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        BaseError::InvalidValue(message.into())
    }

    pub fn not_supported(message: impl Into<String>) -> Self {
        BaseError::NotSupported(message.into())
    }

    pub fn unknown_class(message: impl Into<String>) -> Self {
        BaseError::UnknownClass(message.into())
    }

    pub fn unknown_method(message: impl Into<String>) -> Self {
        BaseError::UnknownMethod(message.into())
    }

    pub fn unknown_property(message: impl Into<String>) -> Self {
        BaseError::UnknownProperty(message.into())
    }

    /// The kind tag, for filtering at catch sites.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BaseError::InvalidCall(_) => ErrorKind::InvalidCall,
            BaseError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            BaseError::InvalidParam(_) => ErrorKind::InvalidParam,
            BaseError::InvalidRoute(_) => ErrorKind::InvalidRoute,
            BaseError::InvalidValue(_) => ErrorKind::InvalidValue,
            BaseError::NotSupported(_) => ErrorKind::NotSupported,
            BaseError::UnknownClass(_) => ErrorKind::UnknownClass,
            BaseError::UnknownMethod(_) => ErrorKind::UnknownMethod,
            BaseError::UnknownProperty(_) => ErrorKind::UnknownProperty,
        }
    }

    /// Error class name, e.g. `UnknownPropertyError`.
    pub fn name(&self) -> &'static str {
        self.kind().error_name()
    }

    pub fn message(&self) -> &str {
        match self {
            BaseError::InvalidCall(m)
            | BaseError::InvalidConfig(m)
            | BaseError::InvalidParam(m)
            | BaseError::InvalidRoute(m)
            | BaseError::InvalidValue(m)
            | BaseError::NotSupported(m)
            | BaseError::UnknownClass(m)
            | BaseError::UnknownMethod(m)
            | BaseError::UnknownProperty(m) => m,
        }
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}
