use crate::accessor::{Access, AccessorTable};
use crate::error::{BaseError, Result};
use crate::fields::Fields;
use serde_json::Value;
use std::fmt;
use tracing::{debug, trace};

/// Name of the built-in read-only property holding the class name.
pub const CLASS_NAME: &str = "className";

/// Short name of a type: the last path segment, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A domain type whose properties are served by [`Entity`].
///
/// The type owns its stored fields and declares its virtual properties in an
/// [`AccessorTable`]. Its own methods (accessors and [`init`](Self::init))
/// work on the raw state; everyone else goes through the [`Entity`] wrapper.
///
/// ```
/// use serde_json::{Value, json};
/// use std::sync::OnceLock;
/// use we_base::{AccessorTable, Entity, Fields, VirtualEntity};
///
/// #[derive(Default)]
/// struct Greeting {
///     fields: Fields,
///     label: String,
/// }
///
/// impl VirtualEntity for Greeting {
///     fn fields(&self) -> &Fields {
///         &self.fields
///     }
///
///     fn fields_mut(&mut self) -> &mut Fields {
///         &mut self.fields
///     }
///
///     fn accessors() -> &'static AccessorTable<Self> {
///         static TABLE: OnceLock<AccessorTable<Greeting>> = OnceLock::new();
///         TABLE.get_or_init(|| {
///             AccessorTable::<Greeting>::builder()
///                 .getter("getLabel", |g| Ok(json!(g.label)))
///                 .setter("setLabel", |g, v| {
///                     g.label = v.as_str().unwrap_or_default().to_owned();
///                     Ok(())
///                 })
///                 .build_static()
///         })
///     }
/// }
///
/// let mut greeting = Entity::<Greeting>::new().unwrap();
/// greeting.set("label", json!("Hello World")).unwrap();
/// assert_eq!(greeting.get("label").unwrap(), json!("Hello World"));
/// assert_eq!(greeting.get("className").unwrap(), Value::from("Greeting"));
/// ```
pub trait VirtualEntity: Default + 'static {
    /// Own stored fields.
    fn fields(&self) -> &Fields;

    fn fields_mut(&mut self) -> &mut Fields;

    /// Accessor methods of this type, built once.
    fn accessors() -> &'static AccessorTable<Self>;

    /// Class name used in `className` and in error messages.
    fn class_name() -> &'static str {
        short_type_name::<Self>()
    }

    /// Runs after configuration has been applied. No-op by default.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Wrapper routing every property read, write and clear of a `T` through
/// field lookup and the accessor table.
///
/// There is no way to reach the wrapped state mutably from outside; callers
/// use [`get`](Self::get), [`set`](Self::set) and [`clear`](Self::clear).
#[derive(Clone)]
pub struct Entity<T> {
    target: T,
}

impl<T: VirtualEntity> Entity<T> {
    /// Constructs an entity with no configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Fields::new())
    }

    /// Constructs an entity, copying every configuration key onto it as an
    /// own field before `init` runs.
    pub fn with_config(config: impl Into<Fields>) -> Result<Self> {
        let config: Fields = config.into();
        let mut target = T::default();
        for (name, value) in config {
            if name == CLASS_NAME {
                return Err(read_only::<T>("Setting", &name));
            }
            target.fields_mut().insert(name, value);
        }
        target.init()?;
        // Declared fields and `init` must not store the reserved name either.
        if target.fields().contains(CLASS_NAME) {
            return Err(read_only::<T>("Setting", CLASS_NAME));
        }

        debug!(
            class = T::class_name(),
            fields = target.fields().len(),
            "Entity constructed"
        );
        Ok(Self { target })
    }

    /// Constructs an entity from a JSON configuration value. `null` means no
    /// configuration; anything other than an object is rejected.
    pub fn from_value(config: Value) -> Result<Self> {
        match config {
            Value::Null => Self::new(),
            Value::Object(map) => Self::with_config(map),
            _ => Err(BaseError::invalid_config(format!(
                "Entity configuration must be an object: {}",
                T::class_name()
            ))),
        }
    }

    pub fn class_name(&self) -> &'static str {
        T::class_name()
    }

    /// Reads a property: `className`, then own field, then `getX`.
    pub fn get(&self, property: &str) -> Result<Value> {
        if property == CLASS_NAME {
            return Ok(Value::from(T::class_name()));
        }
        if let Some(value) = self.target.fields().get(property) {
            return Ok(value.clone());
        }

        let cap = T::accessors().resolve(property);
        if let Some(getter) = cap.getter {
            trace!(class = T::class_name(), property, "Dispatching to getter");
            return getter(&self.target);
        }
        if cap.setter.is_some() {
            return Err(BaseError::invalid_call(format!(
                "Getting write-only property: {}.{property}",
                T::class_name()
            )));
        }
        Err(unknown::<T>("Getting", property))
    }

    /// Writes a property: own field first, then `setX`.
    pub fn set(&mut self, property: &str, value: Value) -> Result<()> {
        if property == CLASS_NAME {
            return Err(read_only::<T>("Setting", property));
        }
        if let Some(slot) = self.target.fields_mut().get_mut(property) {
            *slot = value;
            return Ok(());
        }

        let cap = T::accessors().resolve(property);
        if let Some(setter) = cap.setter {
            trace!(class = T::class_name(), property, "Dispatching to setter");
            return setter(&mut self.target, value);
        }
        if cap.getter.is_some() {
            return Err(read_only::<T>("Setting", property));
        }
        Err(unknown::<T>("Setting", property))
    }

    /// Clears a property: an own field is set to `null` (never removed), a
    /// virtual property receives `null` through `setX`.
    pub fn clear(&mut self, property: &str) -> Result<()> {
        if property == CLASS_NAME {
            return Err(read_only::<T>("Unsetting", property));
        }
        if let Some(slot) = self.target.fields_mut().get_mut(property) {
            *slot = Value::Null;
            return Ok(());
        }

        let cap = T::accessors().resolve(property);
        if let Some(setter) = cap.setter {
            trace!(class = T::class_name(), property, "Clearing through setter");
            return setter(&mut self.target, Value::Null);
        }
        if cap.getter.is_some() {
            return Err(read_only::<T>("Unsetting", property));
        }
        Err(unknown::<T>("Unsetting", property))
    }

    /// How `property` can be used, without invoking any accessor.
    pub fn access(&self, property: &str) -> Access {
        if property == CLASS_NAME {
            Access::ReadOnly
        } else if self.target.fields().contains(property) {
            Access::Field
        } else {
            T::accessors().access(property)
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.target.fields().contains(name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.target.fields().names().collect()
    }

    /// Snapshot of the own fields as a JSON object.
    pub fn to_value(&self) -> Value {
        self.target.fields().to_value()
    }
}

impl<T: VirtualEntity> fmt::Debug for Entity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(T::class_name())
            .field("fields", self.target.fields())
            .finish_non_exhaustive()
    }
}

fn read_only<T: VirtualEntity>(action: &str, property: &str) -> BaseError {
    BaseError::invalid_call(format!(
        "{action} read-only property: {}.{property}",
        T::class_name()
    ))
}

fn unknown<T: VirtualEntity>(action: &str, property: &str) -> BaseError {
    BaseError::unknown_property(format!(
        "{action} unknown property: {}.{property}",
        T::class_name()
    ))
}
