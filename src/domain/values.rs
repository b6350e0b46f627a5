//! Value coalescing helpers
//!
//! The remote API expects every configured key to be present, with an empty
//! string standing in for "not set". State on the other hand keeps `None` for
//! attributes the operator never configured. These helpers convert between
//! the two shapes.

use super::errors::ProviderError;
use super::result::Result;
use serde_json::Value;

/// Returns the contained string, or an empty string when unset
///
/// # Examples
///
/// ```
/// use saviynt_provider::domain::values::string_or_empty;
///
/// assert_eq!(string_or_empty(&Some("AD".to_string())), "AD");
/// assert_eq!(string_or_empty(&None), "");
/// ```
pub fn string_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Maps an empty string to `None`
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Renders a JSON value returned by the API as an attribute string
///
/// Strings are taken as-is, scalars use their JSON text and nested
/// objects/arrays are re-encoded as compact JSON. `null` maps to `None`.
pub fn value_to_attribute(value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value)
            .map(Some)
            .map_err(|e| ProviderError::Serialization(format!("Failed to encode value: {e}"))),
    }
}

/// Checks that a free-form JSON attribute holds well-formed JSON
///
/// Empty strings are accepted since they are the wire encoding of "unset".
pub fn ensure_json(attribute: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Ok(());
    }
    serde_json::from_str::<Value>(value)
        .map(|_| ())
        .map_err(|e| {
            ProviderError::Serialization(format!(
                "Attribute '{attribute}' must contain valid JSON: {e}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_value_to_attribute_scalars() {
        assert_eq!(value_to_attribute(&json!(null)).unwrap(), None);
        assert_eq!(
            value_to_attribute(&json!("ldap://dc")).unwrap(),
            Some("ldap://dc".to_string())
        );
        assert_eq!(value_to_attribute(&json!(42)).unwrap(), Some("42".to_string()));
        assert_eq!(value_to_attribute(&json!(true)).unwrap(), Some("true".to_string()));
    }

    #[test]
    fn test_value_to_attribute_nested() {
        let value = json!({"objectClass": ["top", "user"]});
        assert_eq!(
            value_to_attribute(&value).unwrap(),
            Some(r#"{"objectClass":["top","user"]}"#.to_string())
        );
    }

    #[test]
    fn test_ensure_json() {
        assert!(ensure_json("create_account_json", "").is_ok());
        assert!(ensure_json("create_account_json", r#"{"cn":"${user.username}"}"#).is_ok());

        let err = ensure_json("create_account_json", "{not json").unwrap_err();
        assert!(matches!(err, ProviderError::Serialization(_)));
        assert!(err.to_string().contains("create_account_json"));
    }
}
