//! Result alias used across the library

use super::errors::ProviderError;

/// Result of a provider operation
///
/// # Examples
///
/// ```
/// use saviynt_provider::domain::{ProviderError, Result};
///
/// fn connection_name(plan: &serde_json::Value) -> Result<&str> {
///     plan["connection_name"]
///         .as_str()
///         .ok_or_else(|| ProviderError::Validation("connection_name is required".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_attributes(raw: &str) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(raw)?)
    }

    #[test]
    fn test_question_mark_converts_json_errors() {
        assert!(parse_attributes(r#"{"URL": "ldap://dc01"}"#).is_ok());

        let err = parse_attributes("{not json").unwrap_err();
        assert!(matches!(err, ProviderError::Serialization(_)));
        assert!(err.is_local());
    }
}
