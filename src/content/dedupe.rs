//! Order-preserving deduplication for merged content lists.
//!
//! Used where lists are stitched together from several sources (e.g. FAQ
//! items shared between pages). Items whose key cannot be determined are
//! always kept: a duplicate on the page is preferable to silently losing copy.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Normalize a derived key to its comparison string.
///
/// Strings compare by content, numbers and booleans by their text, arrays and
/// objects by their compact JSON. Returns `None` for keys that cannot be used:
/// null, empty strings, and values that fail to serialize.
fn normalize_key<K: Serialize>(key: &K) -> Option<String> {
    let normalized = match serde_json::to_value(key).ok()? {
        Value::Null => return None,
        Value::String(text) => text,
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        structured @ (Value::Array(_) | Value::Object(_)) => serde_json::to_string(&structured).ok()?,
    };

    (!normalized.is_empty()).then_some(normalized)
}

/// Remove items whose derived key was already seen, keeping the first
/// occurrence and the original order.
///
/// # Example
/// ```
/// use site_content::content::dedupe_by;
///
/// let items = vec![(1, 'a'), (2, 'b'), (1, 'c')];
/// let unique = dedupe_by(items, |item, _| item.0);
/// assert_eq!(unique, vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn dedupe_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> Vec<T>
where
    F: FnMut(&T, usize) -> K,
    K: Serialize,
{
    let mut seen = HashSet::new();

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let first_seen = match normalize_key(&key_fn(&item, index)) {
                Some(key) => seen.insert(key),
                None => true,
            };
            first_seen.then_some(item)
        })
        .collect()
}

/// [`dedupe_by`] keyed on the items themselves.
pub fn dedupe<T: Serialize>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();

    items
        .into_iter()
        .filter(|item| match normalize_key(item) {
            Some(key) => seen.insert(key),
            None => true,
        })
        .collect()
}

/// Deduplicate a raw JSON list; anything but an array is empty.
pub fn dedupe_values(items: &Value, key_fn: impl FnMut(&Value, usize) -> Value) -> Vec<Value> {
    match items {
        Value::Array(items) => dedupe_by(items.iter().cloned(), key_fn),
        _ => Vec::new(),
    }
}
