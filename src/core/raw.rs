//! Loosely typed thread items, as decoded straight from upstream payloads.

use serde_json::Value;

/// One thread item as it appears in embedded page data or in GraphQL
/// responses: a JSON object whose `post` member holds the actual fields.
///
/// Items are transient. They are produced by the HTML extractor or the
/// GraphQL normalizer, handed to [`crate::parser::parse_item`], and
/// dropped. Accessors are defensive throughout; a missing or wrong-typed
/// field yields a default instead of an error.
#[derive(Debug, Clone)]
pub struct RawThreadItem(Value);

impl RawThreadItem {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The nested `post` object. `None` when absent, non-object, or empty.
    pub fn post(&self) -> Option<&Value> {
        let post = self.0.get("post")?;
        match post.as_object() {
            Some(map) if !map.is_empty() => Some(post),
            _ => None,
        }
    }

    /// Upstream identifier: the first of `post.pk`, `post.id` holding a
    /// non-empty string or a number. Empty when unresolved.
    pub fn id(&self) -> String {
        let Some(post) = self.post() else {
            return String::new();
        };
        ["pk", "id"]
            .iter()
            .find_map(|key| scalar_string(post.get(key)?))
            .unwrap_or_default()
    }

    /// Caption text. Upstream emits captions either as a structured
    /// `{"text": ...}` object or as a bare scalar; both are handled.
    pub fn text(&self) -> String {
        let Some(post) = self.post() else {
            return String::new();
        };
        match post.get("caption") {
            Some(Value::Object(map)) => map
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

fn scalar_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads `key` from a JSON object as a count, defaulting anything that is
/// not a non-negative integer to zero.
pub(crate) fn count_field(obj: &Value, key: &str) -> u64 {
    obj.get(key).and_then(Value::as_u64).unwrap_or(0)
}

/// Reads `key` from a JSON object as a string, defaulting to empty.
pub(crate) fn str_field<'a>(obj: &'a Value, key: &str) -> &'a str {
    obj.get(key).and_then(Value::as_str).unwrap_or_default()
}
