//! Per-type accessor tables.
//!
//! A domain type registers its `get<Name>` / `set<Name>` methods once, by
//! their convention name. On first access to a property the table looks up
//! both convention names and, when either exists, caches the resulting
//! capability, so repeated dispatch for a known property is a single map read.

use crate::error::{BaseError, Result};
use crate::naming::{GETTER_PREFIX, SETTER_PREFIX, getter_name, setter_name};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Getter backing a virtual property.
pub type Getter<T> = fn(&T) -> Result<Value>;

/// Setter backing a virtual property.
pub type Setter<T> = fn(&mut T, Value) -> Result<()>;

/// How a property name can be used on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// An own stored field; readable, writable and clearable.
    Field,
    /// Both `getX` and `setX` exist.
    ReadWrite,
    /// Only `getX` exists.
    ReadOnly,
    /// Only `setX` exists.
    WriteOnly,
    /// Neither a field nor an accessor.
    Unknown,
}

/// Resolved accessors for one property name.
pub(crate) struct Capability<T> {
    pub(crate) getter: Option<Getter<T>>,
    pub(crate) setter: Option<Setter<T>>,
}

// Manual impls: derives would require `T: Clone`.
impl<T> Clone for Capability<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Capability<T> {}

impl<T> Capability<T> {
    pub(crate) fn access(&self) -> Access {
        match (self.getter.is_some(), self.setter.is_some()) {
            (true, true) => Access::ReadWrite,
            (true, false) => Access::ReadOnly,
            (false, true) => Access::WriteOnly,
            (false, false) => Access::Unknown,
        }
    }
}

/// The accessor methods declared by a type, keyed by method name.
pub struct AccessorTable<T> {
    getters: HashMap<String, Getter<T>>,
    setters: HashMap<String, Setter<T>>,
    resolved: RwLock<HashMap<String, Capability<T>>>,
}

impl<T> AccessorTable<T> {
    pub fn builder() -> AccessorTableBuilder<T> {
        AccessorTableBuilder {
            getters: HashMap::new(),
            setters: HashMap::new(),
            problems: Vec::new(),
        }
    }

    /// A table with no accessors: every non-field property is unknown.
    pub fn empty() -> Self {
        Self {
            getters: HashMap::new(),
            setters: HashMap::new(),
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Whether a method with this exact name is registered.
    pub fn has_method(&self, name: &str) -> bool {
        self.getters.contains_key(name) || self.setters.contains_key(name)
    }

    /// Registered method names, sorted.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .getters
            .keys()
            .chain(self.setters.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    /// Access granted by accessors alone (own fields are not considered).
    pub fn access(&self, property: &str) -> Access {
        self.resolve(property).access()
    }

    /// Number of property names resolved to at least one accessor so far.
    pub fn cached_len(&self) -> usize {
        self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub(crate) fn resolve(&self, property: &str) -> Capability<T> {
        if let Some(cap) = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(property)
        {
            return *cap;
        }

        let cap = Capability {
            getter: self.getters.get(&getter_name(property)).copied(),
            setter: self.setters.get(&setter_name(property)).copied(),
        };
        // Only hits are cached; the set of hits is bounded by the registrations.
        if cap.access() != Access::Unknown {
            self.resolved
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(property.to_owned(), cap);
        }
        cap
    }
}

impl<T> fmt::Debug for AccessorTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorTable")
            .field("methods", &self.method_names())
            .field("cached", &self.cached_len())
            .finish()
    }
}

/// Collects accessor registrations for an [`AccessorTable`].
pub struct AccessorTableBuilder<T> {
    getters: HashMap<String, Getter<T>>,
    setters: HashMap<String, Setter<T>>,
    problems: Vec<String>,
}

impl<T> AccessorTableBuilder<T> {
    /// Registers a getter under its convention name, e.g. `getLabel`.
    pub fn getter(mut self, name: &str, getter: Getter<T>) -> Self {
        if !name.starts_with(GETTER_PREFIX) {
            self.problems
                .push(format!("getter `{name}` must start with `{GETTER_PREFIX}`"));
        } else if self.getters.insert(name.to_owned(), getter).is_some() {
            self.problems.push(format!("getter `{name}` registered twice"));
        }
        self
    }

    /// Registers a setter under its convention name, e.g. `setLabel`.
    pub fn setter(mut self, name: &str, setter: Setter<T>) -> Self {
        if !name.starts_with(SETTER_PREFIX) {
            self.problems
                .push(format!("setter `{name}` must start with `{SETTER_PREFIX}`"));
        } else if self.setters.insert(name.to_owned(), setter).is_some() {
            self.problems.push(format!("setter `{name}` registered twice"));
        }
        self
    }

    /// Registers both accessors of a read-write property named `property`.
    pub fn property(self, property: &str, getter: Getter<T>, setter: Setter<T>) -> Self {
        self.getter(&getter_name(property), getter)
            .setter(&setter_name(property), setter)
    }

    /// Finishes the table, rejecting misnamed or duplicated registrations.
    pub fn try_build(self) -> Result<AccessorTable<T>> {
        if !self.problems.is_empty() {
            return Err(BaseError::invalid_config(format!(
                "Invalid accessor table: {}",
                self.problems.join("; ")
            )));
        }
        Ok(AccessorTable {
            getters: self.getters,
            setters: self.setters,
            resolved: RwLock::new(HashMap::new()),
        })
    }

    /// Finishes a table declared once per type, e.g. inside a `OnceLock`
    /// initializer.
    ///
    /// # Panics
    ///
    /// Panics on misnamed or duplicated registrations, which are fixed
    /// declarations in source. Use [`Self::try_build`] for tables assembled
    /// from runtime input.
    pub fn build_static(self) -> AccessorTable<T> {
        match self.try_build() {
            Ok(table) => table,
            Err(e) => panic!("{e}"),
        }
    }
}
