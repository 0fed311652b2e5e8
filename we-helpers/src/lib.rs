//! Pure helper functions shared by the We framework crates.
//!
//! - [`deep_merge`] / [`deep_merged`] — recursive merge of JSON objects
//! - [`is_object`] — the "plain mapping" test used by the merge
//! - [`ucfirst`] — upper-cases the first character of a string
//!
//! Nothing here allocates global state or performs I/O.

mod object;
mod string;

pub use object::{deep_merge, deep_merged, is_object};
pub use string::ucfirst;
