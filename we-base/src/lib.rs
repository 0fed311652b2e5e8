//! Base entity model for the We framework.
//!
//! Defines the types every domain entity builds on:
//! - [`Entity`] — the wrapper that routes every property read, write and
//!   clear through the dispatch rules
//! - [`VirtualEntity`] — the trait a domain type implements (own fields,
//!   accessor table, `init` hook)
//! - [`AccessorTable`] — the per-type registry of `get<Name>` / `set<Name>`
//!   methods backing virtual properties
//! - [`BaseError`] / [`ErrorKind`] — the closed error taxonomy shared by all
//!   framework crates
//!
//! A property is resolved in this order: own field, then getter/setter. The
//! presence of `getX` alone makes `x` read-only, `setX` alone write-only.

mod accessor;
mod entity;
mod error;
mod fields;
pub mod naming;

pub use accessor::{Access, AccessorTable, AccessorTableBuilder, Getter, Setter};
pub use entity::{CLASS_NAME, Entity, VirtualEntity, short_type_name};
pub use error::{BaseError, ErrorKind, Result};
pub use fields::Fields;
