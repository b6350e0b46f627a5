//! Field tables and the generic plan/remote copiers
//!
//! Every optional string attribute of a connection, endpoint or security
//! system is described once by a [`FieldSpec`]. The copiers below move values
//! between state (`None` for unset) and the wire (`""` for unset).

use crate::domain::values::{ensure_json, string_or_empty, value_to_attribute};
use crate::domain::Result;
use crate::provider::{Attribute, AttributeType};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Optional string attributes keyed by schema name
pub type AttributeMap = BTreeMap<String, Option<String>>;

/// Maps one schema attribute to its wire key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// snake_case schema name
    pub attribute: &'static str,
    /// Key in the request/response JSON
    pub api_key: &'static str,
    /// Never refreshed from the server, hidden by data sources
    pub sensitive: bool,
    /// Must hold well-formed JSON when set
    pub json: bool,
}

impl FieldSpec {
    pub const fn text(attribute: &'static str, api_key: &'static str) -> Self {
        Self {
            attribute,
            api_key,
            sensitive: false,
            json: false,
        }
    }

    pub const fn secret(attribute: &'static str, api_key: &'static str) -> Self {
        Self {
            attribute,
            api_key,
            sensitive: true,
            json: false,
        }
    }

    pub const fn json(attribute: &'static str, api_key: &'static str) -> Self {
        Self {
            attribute,
            api_key,
            sensitive: false,
            json: true,
        }
    }

    pub const fn secret_json(attribute: &'static str, api_key: &'static str) -> Self {
        Self {
            attribute,
            api_key,
            sensitive: true,
            json: true,
        }
    }

    /// Optional string schema attribute for this field
    pub fn schema_attribute(&self) -> Attribute {
        let attribute = Attribute::optional(self.attribute, AttributeType::String);
        let attribute = if self.json {
            attribute.description(format!("JSON value sent as `{}`", self.api_key))
        } else {
            attribute.description(format!("Sent as `{}`", self.api_key))
        };
        if self.sensitive {
            attribute.sensitive()
        } else {
            attribute
        }
    }
}

/// Adds an unset entry for every field missing from `values`
pub fn normalize(fields: &[FieldSpec], values: &mut AttributeMap) {
    for field in fields {
        values.entry(field.attribute.to_string()).or_insert(None);
    }
}

/// Builds the wire map for a field table
///
/// Unset attributes are sent as empty strings.
///
/// # Errors
///
/// Returns a `Serialization` error when a JSON field holds malformed JSON
pub fn build_wire_attributes(
    fields: &[FieldSpec],
    values: &AttributeMap,
) -> Result<BTreeMap<String, String>> {
    let mut wire = BTreeMap::new();
    for field in fields {
        let value = values
            .get(field.attribute)
            .map(string_or_empty)
            .unwrap_or_default();
        if field.json {
            ensure_json(field.attribute, &value)?;
        }
        wire.insert(field.api_key.to_string(), value);
    }
    Ok(wire)
}

/// Finds a key in a remote record, ignoring ASCII case
pub fn lookup<'a>(remote: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    remote
        .get(key)
        .or_else(|| {
            remote
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
}

/// Reads a remote value as an attribute string
pub fn remote_string(remote: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match lookup(remote, key) {
        Some(value) => value_to_attribute(value),
        None => Ok(None),
    }
}

/// Finds the record whose `key` equals `name` exactly
pub fn find_record<'a>(
    records: &'a [Map<String, Value>],
    key: &str,
    name: &str,
) -> Option<&'a Map<String, Value>> {
    records
        .iter()
        .find(|record| lookup(record, key).and_then(Value::as_str) == Some(name))
}

/// Deserializes `null` as the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Copies a remote value into a state slot
///
/// A remote empty string never turns an unset attribute into `""`.
pub fn merge_remote(current: &mut Option<String>, remote: Option<String>) {
    match remote {
        None => {}
        Some(value) if value.is_empty() && current.is_none() => {}
        Some(value) => *current = Some(value),
    }
}

/// Refreshes non-sensitive fields from a remote record
///
/// Sensitive fields keep their state values. Fields absent from the record
/// are left untouched.
pub fn refresh_attributes(
    fields: &[FieldSpec],
    values: &mut AttributeMap,
    remote: &Map<String, Value>,
) -> Result<()> {
    for field in fields.iter().filter(|f| !f.sensitive) {
        let Some(remote_value) = lookup(remote, field.api_key) else {
            continue;
        };
        let slot = values.entry(field.attribute.to_string()).or_insert(None);
        merge_remote(slot, value_to_attribute(remote_value)?);
    }
    Ok(())
}
