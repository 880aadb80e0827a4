//! Patch documents, merged into the loaded schema document before generation.
//!
//! JSON merge-patch: objects merge key by key, `null` deletes a key, anything
//! else replaces the target wholesale (arrays included).
use serde_json::Value;

pub fn merge_patch(target: &mut Value, patch: Value) {
    let patch = match patch {
        Value::Object(patch) => patch,
        other => {
            *target = other;
            return;
        }
    };
    if !target.is_object() {
        *target = Value::Object(serde_json::Map::new());
    }
    let Value::Object(target) = target else { return };
    for (key, value) in patch {
        if value.is_null() {
            target.shift_remove(&key);
        } else {
            merge_patch(target.entry(key).or_insert(Value::Null), value);
        }
    }
}
