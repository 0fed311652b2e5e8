//! Sample entity types shared by the entity tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use std::cell::Cell;
use std::sync::OnceLock;
use we_base::{AccessorTable, BaseError, Fields, VirtualEntity};

/// Read-write `label`, read-only `upper`, write-only `secret`.
#[derive(Default)]
pub struct Label {
    fields: Fields,
    pub text: String,
    pub secret: Option<String>,
    pub getter_calls: Cell<u32>,
}

impl VirtualEntity for Label {
    fn fields(&self) -> &Fields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    fn accessors() -> &'static AccessorTable<Self> {
        static TABLE: OnceLock<AccessorTable<Label>> = OnceLock::new();
        TABLE.get_or_init(|| {
            AccessorTable::<Label>::builder()
                .getter("getLabel", |l| {
                    l.getter_calls.set(l.getter_calls.get() + 1);
                    Ok(json!(l.text))
                })
                .setter("setLabel", |l, v| {
                    l.text = match v {
                        Value::Null => String::new(),
                        Value::String(s) => s,
                        other => {
                            return Err(BaseError::invalid_value(format!(
                                "Label must be a string, got {other}"
                            )));
                        }
                    };
                    Ok(())
                })
                .getter("getLabelReads", |l| Ok(json!(l.getter_calls.get())))
                .getter("getUpper", |l| Ok(json!(l.text.to_uppercase())))
                .setter("setSecret", |l, v| {
                    l.secret = v.as_str().map(str::to_owned);
                    Ok(())
                })
                .getter("getSecretLength", |l| {
                    Ok(json!(l.secret.as_deref().map_or(0, str::len)))
                })
                .build_static()
        })
    }
}

/// Declares own fields `x` and `y`; also has a `getX` that must never win
/// over the field.
pub struct Point {
    fields: Fields,
    pub shadowed_getter_calls: Cell<u32>,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            fields: Fields::declare(["x", "y"]),
            shadowed_getter_calls: Cell::new(0),
        }
    }
}

impl VirtualEntity for Point {
    fn fields(&self) -> &Fields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    fn accessors() -> &'static AccessorTable<Self> {
        static TABLE: OnceLock<AccessorTable<Point>> = OnceLock::new();
        TABLE.get_or_init(|| {
            AccessorTable::<Point>::builder()
                .getter("getX", |p| {
                    p.shadowed_getter_calls
                        .set(p.shadowed_getter_calls.get() + 1);
                    Ok(json!("from getter"))
                })
                .getter("getShadowedReads", |p| Ok(json!(p.shadowed_getter_calls.get())))
                .getter("getNorm", |p| {
                    let x = p.fields.get("x").and_then(Value::as_f64).unwrap_or(0.0);
                    let y = p.fields.get("y").and_then(Value::as_f64).unwrap_or(0.0);
                    Ok(json!((x * x + y * y).sqrt()))
                })
                .build_static()
        })
    }

    fn init(&mut self) -> Result<(), BaseError> {
        if self.fields.get("y") == Some(&Value::Null) {
            self.fields.insert("y", json!(0));
        }
        self.fields.insert("initialized", json!(true));
        Ok(())
    }
}

/// No accessors at all.
#[derive(Default, Clone)]
pub struct Bare {
    fields: Fields,
}

impl VirtualEntity for Bare {
    fn fields(&self) -> &Fields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    fn accessors() -> &'static AccessorTable<Self> {
        static TABLE: OnceLock<AccessorTable<Bare>> = OnceLock::new();
        TABLE.get_or_init(AccessorTable::empty)
    }
}

/// `init` rejects configurations without a `name` field.
#[derive(Default)]
pub struct Strict {
    fields: Fields,
}

impl VirtualEntity for Strict {
    fn fields(&self) -> &Fields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    fn accessors() -> &'static AccessorTable<Self> {
        static TABLE: OnceLock<AccessorTable<Strict>> = OnceLock::new();
        TABLE.get_or_init(AccessorTable::empty)
    }

    fn class_name() -> &'static str {
        "StrictModel"
    }

    fn init(&mut self) -> Result<(), BaseError> {
        if self.fields.contains("name") {
            Ok(())
        } else {
            Err(BaseError::invalid_config("StrictModel requires a name"))
        }
    }
}

/// Declares the reserved `className` name as an own field.
pub struct Forged {
    fields: Fields,
}

impl Default for Forged {
    fn default() -> Self {
        Self {
            fields: Fields::declare(["className", "title"]),
        }
    }
}

impl VirtualEntity for Forged {
    fn fields(&self) -> &Fields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    fn accessors() -> &'static AccessorTable<Self> {
        static TABLE: OnceLock<AccessorTable<Forged>> = OnceLock::new();
        TABLE.get_or_init(AccessorTable::empty)
    }
}

/// Stores `className` from its `init` hook.
#[derive(Default)]
pub struct StampedInit {
    fields: Fields,
}

impl VirtualEntity for StampedInit {
    fn fields(&self) -> &Fields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    fn accessors() -> &'static AccessorTable<Self> {
        static TABLE: OnceLock<AccessorTable<StampedInit>> = OnceLock::new();
        TABLE.get_or_init(AccessorTable::empty)
    }

    fn init(&mut self) -> Result<(), BaseError> {
        self.fields.insert("className", json!("Stamped"));
        Ok(())
    }
}
