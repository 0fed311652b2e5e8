use serde::{Deserialize, Serialize};
use serde_json::Value;
use we_base::{BaseError, Result};
use we_helpers::deep_merge;
use we_log::{DEFAULT_CATEGORY, Mode};

/// Application configuration.
///
/// Built from defaults, then JSON layers deep-merged in order, so a layer
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct WeConfig {
    /// Execution mode handed to default loggers.
    pub mode: Mode,
    /// Category used by `log` / `warn` / `error` when none is given.
    pub default_category: String,
    /// Verbose `tracing` output.
    pub verbose: bool,
}

impl Default for WeConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Development,
            default_category: DEFAULT_CATEGORY.to_owned(),
            verbose: false,
        }
    }
}

impl WeConfig {
    /// Defaults with the mode taken from the environment.
    pub fn from_env() -> Self {
        Self {
            mode: Mode::from_env(),
            ..Self::default()
        }
    }

    /// Deep-merges each layer over the defaults and deserializes the result.
    ///
    /// Every layer must be a JSON object; unknown keys and mistyped values
    /// fail with `InvalidConfig`.
    pub fn from_layers<'a, I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut merged = serde_json::to_value(Self::default()).map_err(invalid)?;
        for layer in layers {
            if !layer.is_object() {
                return Err(BaseError::invalid_config(format!(
                    "Configuration layer must be an object, got {layer}"
                )));
            }
            deep_merge(&mut merged, [layer]);
        }
        serde_json::from_value(merged).map_err(invalid)
    }

    /// Single-layer shorthand for [`Self::from_layers`].
    pub fn from_value(overrides: &Value) -> Result<Self> {
        Self::from_layers([overrides])
    }
}

fn invalid(e: serde_json::Error) -> BaseError {
    BaseError::invalid_config(format!("Invalid application configuration: {e}"))
}
