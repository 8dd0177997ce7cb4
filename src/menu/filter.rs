//! Recursive field whitelisting

use super::CHILDREN_KEY;
use serde_json::{Map, Value};

/// Fields kept on every menu node by default
pub const DEFAULT_ALLOWED_FIELDS: [&str; 7] =
    ["id", "displayName", "url", "route", "icon", "children", "type"];

/// Set of object keys that survive filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWhitelist {
    fields: Vec<String>,
}

impl Default for FieldWhitelist {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_FIELDS)
    }
}

impl FieldWhitelist {
    /// Build a whitelist from any list of field names
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if !list.contains(&field) {
                list.push(field);
            }
        }
        Self { fields: list }
    }

    /// Whether `key` is kept
    pub fn allows(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f == key)
    }

    /// Allowed field names, in declaration order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// JSON pointers of every object key outside the whitelist
    ///
    /// Walks the same paths [`filter_fields`] does: arrays element-wise and
    /// objects through their `children` array only.
    pub fn violations(&self, value: &Value) -> Vec<String> {
        let mut found = Vec::new();
        self.collect_violations(value, String::new(), &mut found);
        found
    }

    fn collect_violations(&self, value: &Value, pointer: String, found: &mut Vec<String>) {
        match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.collect_violations(item, format!("{pointer}/{index}"), found);
                }
            }
            Value::Object(map) => {
                for key in map.keys().filter(|k| !self.allows(k)) {
                    found.push(format!("{pointer}/{}", escape_pointer(key)));
                }
                if let Some(children @ Value::Array(_)) = map.get(CHILDREN_KEY) {
                    if self.allows(CHILDREN_KEY) {
                        self.collect_violations(children, format!("{pointer}/{CHILDREN_KEY}"), found);
                    }
                }
            }
            _ => {}
        }
    }
}

// RFC 6901 escaping
fn escape_pointer(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

/// Restrict every mapping in `value` to the whitelisted keys
///
/// Arrays are filtered element-wise. Objects keep only allowed keys, in their
/// original order; a surviving `children` array is filtered recursively, while
/// a non-array `children` value passes through untouched. Scalars are
/// returned unchanged. Applying the filter twice gives the same result as
/// applying it once.
///
/// # Examples
///
/// ```
/// use menu_refactor::menu::{filter_fields, FieldWhitelist};
/// use serde_json::json;
///
/// let node = json!({"id": "1", "extra": "x", "children": [{"id": "2", "perm": []}]});
/// let filtered = filter_fields(&node, &FieldWhitelist::default());
/// assert_eq!(filtered, json!({"id": "1", "children": [{"id": "2"}]}));
/// ```
pub fn filter_fields(value: &Value, whitelist: &FieldWhitelist) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| filter_fields(item, whitelist))
                .collect(),
        ),
        Value::Object(map) => {
            let filtered: Map<String, Value> = map
                .iter()
                .filter(|(key, _)| whitelist.allows(key))
                .map(|(key, child)| {
                    let child = match child {
                        Value::Array(_) if key == CHILDREN_KEY => filter_fields(child, whitelist),
                        _ => child.clone(),
                    };
                    (key.clone(), child)
                })
                .collect();
            Value::Object(filtered)
        }
        scalar => scalar.clone(),
    }
}
