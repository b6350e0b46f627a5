//! Attribute schemas for the provider, resources and data sources
//!
//! A schema lists every attribute an object accepts or exposes. Configuration
//! documents are checked against it before any API call: required attributes
//! must be present, unknown and computed-only attributes are rejected, and
//! values must match the declared type.

use crate::domain::{Diagnostic, Diagnostics, ProviderError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Value type of an attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "attributes")]
pub enum AttributeType {
    String,
    Number,
    Bool,
    /// Map of string to string
    StringMap,
    /// List of objects with the given nested attributes
    ObjectList(Vec<Attribute>),
    /// List of string maps
    MapList,
}

impl AttributeType {
    fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (AttributeType::String, Value::String(_)) => true,
            (AttributeType::Number, Value::Number(_)) => true,
            (AttributeType::Bool, Value::Bool(_)) => true,
            (AttributeType::StringMap, Value::Object(map)) => {
                map.values().all(|v| v.is_string() || v.is_null())
            }
            (AttributeType::ObjectList(_), Value::Array(items)) => {
                items.iter().all(Value::is_object)
            }
            (AttributeType::MapList, Value::Array(items)) => items.iter().all(Value::is_object),
            _ => false,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Bool => "bool",
            AttributeType::StringMap => "map of string",
            AttributeType::ObjectList(_) => "list of object",
            AttributeType::MapList => "list of map",
        }
    }
}

/// One attribute of a schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Attribute {
    fn new(name: &str, attr_type: AttributeType) -> Self {
        Self {
            name: name.to_string(),
            attr_type,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            description: String::new(),
        }
    }

    /// Must be set in configuration
    pub fn required(name: &str, attr_type: AttributeType) -> Self {
        Self {
            required: true,
            ..Self::new(name, attr_type)
        }
    }

    /// May be set in configuration
    pub fn optional(name: &str, attr_type: AttributeType) -> Self {
        Self {
            optional: true,
            ..Self::new(name, attr_type)
        }
    }

    /// Set by the provider only
    pub fn computed(name: &str, attr_type: AttributeType) -> Self {
        Self {
            computed: true,
            ..Self::new(name, attr_type)
        }
    }

    /// May be set in configuration, otherwise filled in by the provider
    pub fn optional_computed(name: &str, attr_type: AttributeType) -> Self {
        Self {
            optional: true,
            computed: true,
            ..Self::new(name, attr_type)
        }
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn configurable(&self) -> bool {
        self.required || self.optional
    }
}

/// Schema of a provider, resource or data source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Names of the sensitive attributes
    pub fn sensitive_attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|a| a.sensitive)
            .map(|a| a.name.as_str())
    }

    /// Checks a configuration document, collecting every problem found
    pub fn validate_config(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        match config.as_object() {
            Some(object) => validate_object(&self.attributes, object, "", &mut diags),
            None => diags.add_error(
                "Invalid configuration",
                "Configuration must be a JSON object",
            ),
        }
        diags
    }

    /// Like [`Schema::validate_config`], returning the errors as one `Validation` error
    pub fn ensure_valid(&self, config: &Value) -> Result<()> {
        let diags = self.validate_config(config);
        if !diags.has_errors() {
            return Ok(());
        }

        let messages: Vec<String> = diags
            .iter()
            .map(|d| match d.attribute {
                Some(ref attribute) => format!("{} ({attribute})", d.summary),
                None => d.summary.clone(),
            })
            .collect();
        Err(ProviderError::Validation(messages.join("; ")))
    }
}

fn validate_object(
    attributes: &[Attribute],
    object: &Map<String, Value>,
    prefix: &str,
    diags: &mut Diagnostics,
) {
    let path = |name: &str| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        }
    };

    for (key, value) in object {
        let Some(attribute) = attributes.iter().find(|a| &a.name == key) else {
            diags.push(
                Diagnostic::error(
                    format!("Unsupported argument \"{key}\""),
                    "An argument with this name is not expected here.",
                )
                .with_attribute(path(key)),
            );
            continue;
        };

        if !attribute.configurable() && !value.is_null() {
            diags.push(
                Diagnostic::error(
                    format!("Value for unconfigurable attribute \"{key}\""),
                    "This attribute is computed by the provider and cannot be set.",
                )
                .with_attribute(path(key)),
            );
            continue;
        }

        if !attribute.attr_type.accepts(value) {
            diags.push(
                Diagnostic::error(
                    format!("Incorrect attribute value type for \"{key}\""),
                    format!("Expected {}", attribute.attr_type.label()),
                )
                .with_attribute(path(key)),
            );
            continue;
        }

        if let (AttributeType::ObjectList(nested), Value::Array(items)) =
            (&attribute.attr_type, value)
        {
            for (index, item) in items.iter().enumerate() {
                if let Some(item) = item.as_object() {
                    validate_object(nested, item, &format!("{}[{index}]", path(key)), diags);
                }
            }
        }
    }

    for attribute in attributes.iter().filter(|a| a.required) {
        let missing = object.get(&attribute.name).map_or(true, Value::is_null);
        if missing {
            diags.push(
                Diagnostic::error(
                    format!("Missing required argument \"{}\"", attribute.name),
                    "The argument is required, but no definition was found.",
                )
                .with_attribute(path(&attribute.name)),
            );
        }
    }
}
