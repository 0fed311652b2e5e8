//! Property-based tests for deep merge.
//!
//! - Merging a map into itself is a no-op
//! - Keys the sources never mention survive untouched
//! - Every leaf of the last source is visible after the merge
//! - Merging into an empty object reproduces the source

use proptest::prelude::*;
use serde_json::{Map, Value};
use we_helpers::deep_merge;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]").unwrap()
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
        prop::collection::vec(any::<i32>().prop_map(Value::from), 0..3).prop_map(Value::Array),
    ]
}

fn to_object(entries: std::collections::BTreeMap<String, Value>) -> Value {
    Value::Object(entries.into_iter().collect::<Map<String, Value>>())
}

fn object_strategy() -> impl Strategy<Value = Value> {
    let nested = leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map(key_strategy(), inner, 0..4).prop_map(to_object)
    });
    prop::collection::btree_map(key_strategy(), nested, 0..4).prop_map(to_object)
}

fn leaves(value: &Value, prefix: String, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (k, v) in map {
                leaves(v, format!("{prefix}/{k}"), out);
            }
        }
        other => out.push((prefix, other.clone())),
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn merge_with_self_is_identity(a in object_strategy()) {
        let mut target = a.clone();
        deep_merge(&mut target, [&a]);
        prop_assert_eq!(target, a);
    }

    #[test]
    fn untouched_top_level_keys_survive(a in object_strategy(), b in object_strategy()) {
        let mut target = a.clone();
        deep_merge(&mut target, [&b]);
        let (Value::Object(before), Value::Object(after), Value::Object(src)) = (&a, &target, &b) else {
            unreachable!()
        };
        for (key, value) in before {
            if !src.contains_key(key) {
                prop_assert_eq!(after.get(key), Some(value));
            }
        }
    }

    #[test]
    fn source_leaves_win(a in object_strategy(), b in object_strategy()) {
        let mut target = a.clone();
        deep_merge(&mut target, [&b]);
        let mut expected = Vec::new();
        leaves(&b, String::new(), &mut expected);
        for (pointer, value) in expected {
            if pointer.is_empty() {
                continue;
            }
            // An empty source map only guarantees the slot is an object.
            if value == Value::Object(Map::new()) {
                prop_assert!(target.pointer(&pointer).is_some_and(Value::is_object));
            } else {
                prop_assert_eq!(target.pointer(&pointer), Some(&value));
            }
        }
    }

    #[test]
    fn merge_into_empty_reproduces_source(b in object_strategy()) {
        let mut target = Value::Object(Map::new());
        deep_merge(&mut target, [&b]);
        prop_assert_eq!(target, b);
    }
}
