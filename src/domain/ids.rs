//! Domain identifier types with validation
//!
//! Newtype wrappers for the identifiers the lifecycle harness works with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address of a resource instance in local state
///
/// Written as `<resource_type>.<name>`, e.g. `saviynt_ad_connection_resource.corp`.
///
/// # Examples
///
/// ```
/// use saviynt_provider::domain::ids::ResourceAddress;
/// use std::str::FromStr;
///
/// let address = ResourceAddress::from_str("saviynt_endpoint_resource.hr").unwrap();
/// assert_eq!(address.resource_type(), "saviynt_endpoint_resource");
/// assert_eq!(address.name(), "hr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceAddress {
    resource_type: String,
    name: String,
}

impl ResourceAddress {
    /// Creates a new address from its two parts
    ///
    /// # Returns
    ///
    /// Returns `Err` if either part is empty or contains characters outside
    /// `[A-Za-z0-9_-]`
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Result<Self, String> {
        let resource_type = resource_type.into();
        let name = name.into();

        if resource_type.trim().is_empty() {
            return Err("Resource type cannot be empty".to_string());
        }
        if name.trim().is_empty() {
            return Err("Resource name cannot be empty".to_string());
        }
        if !resource_type
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(format!(
                "Invalid resource type '{resource_type}': only lowercase letters, digits and '_' are allowed"
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(format!(
                "Invalid resource name '{name}': only letters, digits, '_' and '-' are allowed"
            ));
        }

        Ok(Self {
            resource_type,
            name,
        })
    }

    /// Returns the resource type part
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the instance name part
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ResourceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource_type, self.name)
    }
}

impl FromStr for ResourceAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource_type, name) = s.split_once('.').ok_or_else(|| {
            format!("Invalid resource address '{s}'. Expected format: <type>.<name>")
        })?;
        Self::new(resource_type, name)
    }
}

impl TryFrom<String> for ResourceAddress {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResourceAddress> for String {
    fn from(address: ResourceAddress) -> Self {
        address.to_string()
    }
}
