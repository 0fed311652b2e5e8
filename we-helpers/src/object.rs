use serde_json::{Map, Value};

/// Returns `true` when `value` is a plain mapping (a JSON object).
///
/// Arrays, strings, numbers, booleans and null are not mappings.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Deep-merges each source into `target`, left to right, and returns `target`.
///
/// A source is applied only when both it and the target are objects. For each
/// key of the source:
/// - an object value is merged recursively into the target's slot, which is
///   replaced by an empty object first if it is missing or not an object;
/// - any other value (arrays included) overwrites the target's slot.
///
/// Later sources win on conflicting leaves.
///
/// ```
/// use serde_json::json;
/// use we_helpers::deep_merge;
///
/// let mut config = json!({"message": {"greeting": "Hello", "subject": "World"}});
/// deep_merge(&mut config, [&json!({"message": {"subject": "Doggo"}})]);
/// assert_eq!(config, json!({"message": {"greeting": "Hello", "subject": "Doggo"}}));
/// ```
pub fn deep_merge<'t, 's, I>(target: &'t mut Value, sources: I) -> &'t mut Value
where
    I: IntoIterator<Item = &'s Value>,
{
    for source in sources {
        if let (Value::Object(into), Value::Object(from)) = (&mut *target, source) {
            merge_map(into, from);
        }
    }
    target
}

/// By-value variant of [`deep_merge`]: clones `base` and merges the sources
/// into the clone.
pub fn deep_merged<'s, I>(base: &Value, sources: I) -> Value
where
    I: IntoIterator<Item = &'s Value>,
{
    let mut merged = base.clone();
    deep_merge(&mut merged, sources);
    merged
}

fn merge_map(into: &mut Map<String, Value>, from: &Map<String, Value>) {
    for (key, incoming) in from {
        match incoming {
            Value::Object(nested) => {
                let slot = into
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(slot) = slot {
                    merge_map(slot, nested);
                }
            }
            other => {
                into.insert(key.clone(), other.clone());
            }
        }
    }
}
