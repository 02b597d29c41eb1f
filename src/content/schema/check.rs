//! Field-level checks that accumulate issues instead of stopping at the first.

use crate::content::Issue;
use serde_json::{Map, Value};

pub(crate) type Object = Map<String, Value>;

/// Join a parent path and a field name.
pub(crate) fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Path of the `index`-th element of the array at `parent`.
pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Null and absent fields are treated the same.
fn present<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|value| !value.is_null())
}

/// Collects issues while walking a content bundle.
#[derive(Debug, Default)]
pub(crate) struct Checker {
    issues: Vec<Issue>,
}

impl Checker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn issue(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            path: path.into(),
            message: message.into(),
        });
    }

    pub(crate) fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Require `value` to be an object.
    pub(crate) fn object<'a>(
        &mut self,
        value: Option<&'a Value>,
        path: &str,
        label: &str,
    ) -> Option<&'a Object> {
        match value.filter(|value| !value.is_null()) {
            Some(Value::Object(obj)) => Some(obj),
            Some(other) => {
                self.issue(path, format!("expected an object, found {}", kind_of(other)));
                None
            }
            None => {
                self.issue(path, format!("{} is required", label));
                None
            }
        }
    }

    /// Optional nested object: absent is fine, present must be an object.
    pub(crate) fn optional_object<'a>(
        &mut self,
        obj: &'a Object,
        parent: &str,
        key: &str,
    ) -> Option<&'a Object> {
        let value = present(obj, key)?;
        let path = field_path(parent, key);
        match value {
            Value::Object(inner) => Some(inner),
            other => {
                self.issue(path, format!("expected an object, found {}", kind_of(other)));
                None
            }
        }
    }

    /// Required string that must be non-empty after trimming.
    ///
    /// Missing and blank values both report `"<label> is required"`.
    pub(crate) fn required_str(
        &mut self,
        obj: &Object,
        parent: &str,
        key: &str,
        label: &str,
    ) -> String {
        let path = field_path(parent, key);
        match present(obj, key) {
            Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
            Some(Value::String(_)) | None => {
                self.issue(path, format!("{} is required", label));
                String::new()
            }
            Some(other) => {
                self.issue(path, format!("expected a string, found {}", kind_of(other)));
                String::new()
            }
        }
    }

    /// Optional string: absent or null is `None`, any other non-string is an issue.
    pub(crate) fn optional_str(&mut self, obj: &Object, parent: &str, key: &str) -> Option<String> {
        match present(obj, key)? {
            Value::String(text) => Some(text.clone()),
            other => {
                self.issue(
                    field_path(parent, key),
                    format!("expected a string, found {}", kind_of(other)),
                );
                None
            }
        }
    }

    /// First present key among `keys`, read as an optional string.
    pub(crate) fn optional_str_any(
        &mut self,
        obj: &Object,
        parent: &str,
        keys: &[&str],
    ) -> Option<String> {
        let key = keys.iter().find(|key| present(obj, key).is_some())?;
        self.optional_str(obj, parent, key)
    }

    /// Array field whose elements are returned with their paths.
    ///
    /// A missing array counts as empty; fewer than `min` elements is an issue.
    pub(crate) fn array<'a>(
        &mut self,
        obj: &'a Object,
        parent: &str,
        key: &str,
        min: usize,
    ) -> Vec<(String, &'a Value)> {
        let path = field_path(parent, key);
        let items: &'a [Value] = match present(obj, key) {
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                self.issue(path, format!("expected an array, found {}", kind_of(other)));
                return Vec::new();
            }
            None => &[],
        };

        if items.len() < min {
            let noun = if min == 1 { "item" } else { "items" };
            self.issue(
                path.clone(),
                format!("{} must contain at least {} {}", key, min, noun),
            );
        }

        items
            .iter()
            .enumerate()
            .map(|(index, item)| (index_path(&path, index), item))
            .collect()
    }

    /// Array of non-empty strings.
    pub(crate) fn string_list(
        &mut self,
        obj: &Object,
        parent: &str,
        key: &str,
        min: usize,
    ) -> Vec<String> {
        let mut strings = Vec::new();
        for (path, item) in self.array(obj, parent, key, min) {
            match item {
                Value::String(text) if !text.trim().is_empty() => strings.push(text.clone()),
                Value::String(_) => self.issue(path, "entry must not be empty"),
                other => self.issue(path, format!("expected a string, found {}", kind_of(other))),
            }
        }
        strings
    }

    /// Array of objects, each parsed with `parse`; non-objects are issues.
    pub(crate) fn object_list<T>(
        &mut self,
        obj: &Object,
        parent: &str,
        key: &str,
        min: usize,
        mut parse: impl FnMut(&mut Self, &Object, &str) -> T,
    ) -> Vec<T> {
        let mut parsed = Vec::new();
        for (path, item) in self.array(obj, parent, key, min) {
            match item {
                Value::Object(inner) => parsed.push(parse(&mut *self, inner, &path)),
                other => self.issue(path, format!("expected an object, found {}", kind_of(other))),
            }
        }
        parsed
    }
}
