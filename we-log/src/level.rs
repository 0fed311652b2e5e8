use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable selecting the execution mode.
pub const ENV_VAR: &str = "WE_ENV";

/// Severity of a log message. Values are distinct bits so callers can build
/// level masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Error = 0x01,
    Warning = 0x02,
    Info = 0x04,
    Trace = 0x08,
}

impl Level {
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Trace => "trace",
        })
    }
}

/// Execution mode. Production suppresses error-level output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl Mode {
    /// Reads [`ENV_VAR`]; unset or unrecognised values mean development.
    pub fn from_env() -> Self {
        std::env::var(ENV_VAR)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    /// `prod` / `production` (any case) is production, anything else is
    /// development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Mode::Production,
            _ => Mode::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }
}
