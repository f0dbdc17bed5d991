//! Raw form-input bag as received from a form submission
//!
//! Every value arrives as a string; typing happens later in the validation
//! layer. Unknown keys are carried but never read by the schema, so a bag
//! containing `date` or `id` cannot influence the pipeline.

use serde::Deserialize;
use std::collections::HashMap;

/// Untrusted key-value input sourced from a form submission.
///
/// Deserializes transparently from a flat string map, so it works directly
/// as the payload of `axum::extract::Form`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormInput {
    fields: HashMap<String, String>,
}

impl FormInput {
    /// Create an empty input bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from `(key, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get the raw value for a field, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Get a field with surrounding whitespace removed
    pub fn get_trimmed(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim)
    }

    /// Whether the bag carries a value for this key
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }
}

impl From<HashMap<String, String>> for FormInput {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_and_get() {
        let form = FormInput::from_pairs([("customerId", "c1"), ("amount", "50")]);
        assert_eq!(form.get("customerId"), Some("c1"));
        assert_eq!(form.get("amount"), Some("50"));
        assert_eq!(form.get("status"), None);
    }

    #[test]
    fn test_get_trimmed() {
        let form = FormInput::from_pairs([("customerId", "  c1  ")]);
        assert_eq!(form.get_trimmed("customerId"), Some("c1"));
        assert_eq!(form.get("customerId"), Some("  c1  "));
    }

    #[test]
    fn test_contains() {
        let form = FormInput::from_pairs([("status", "")]);
        assert!(form.contains("status"));
        assert!(!form.contains("amount"));
    }

    #[test]
    fn test_deserializes_from_flat_map() {
        let form: FormInput =
            serde_json::from_str(r#"{"customerId":"c1","amount":"19.99"}"#).unwrap();
        assert_eq!(form.get("amount"), Some("19.99"));
    }

    #[test]
    fn test_empty_bag() {
        let form = FormInput::new();
        assert!(!form.contains("customerId"));
        assert_eq!(form.get("customerId"), None);
    }
}
