//! Accessor naming convention.
//!
//! For a property `p` the getter is `"get" + ucfirst(p)` and the setter is
//! `"set" + ucfirst(p)`. The mapping is purely lexical: `label` gives
//! `getLabel`, `1st` gives `get1st`, the empty name gives `get`.

use we_helpers::ucfirst;

pub const GETTER_PREFIX: &str = "get";
pub const SETTER_PREFIX: &str = "set";

/// Name of the getter backing `property`.
pub fn getter_name(property: &str) -> String {
    format!("{GETTER_PREFIX}{}", ucfirst(property))
}

/// Name of the setter backing `property`.
pub fn setter_name(property: &str) -> String {
    format!("{SETTER_PREFIX}{}", ucfirst(property))
}
