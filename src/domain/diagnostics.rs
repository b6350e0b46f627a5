//! Diagnostics reported back to the operator
//!
//! Every failure in a lifecycle operation is surfaced as a diagnostic with a
//! short summary and a detail line, mirroring what a plan/apply run prints.

use super::errors::{ProviderError, SaviyntError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Operation failed
    Error,
    /// Operation succeeded with a caveat
    Warning,
}

/// A single diagnostic entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Attribute path the diagnostic refers to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    /// Creates a warning diagnostic
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    /// Attaches an attribute path
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}

impl From<&ProviderError> for Diagnostic {
    fn from(err: &ProviderError) -> Self {
        match err {
            ProviderError::Validation(msg) => Diagnostic::error(msg.clone(), err.to_string()),
            ProviderError::Api(SaviyntError::ApiError { message, .. }) => {
                Diagnostic::error("API Call Failed", format!("{err} ({message})"))
            }
            ProviderError::Api(_) => Diagnostic::error("API Call Failed", err.to_string()),
            ProviderError::Authentication(_) => {
                Diagnostic::error("Unable to authenticate", err.to_string())
            }
            ProviderError::Serialization(_) => {
                Diagnostic::error("JSON encoding failed", err.to_string())
            }
            ProviderError::Configuration(_) => {
                Diagnostic::error("Invalid provider configuration", err.to_string())
            }
            ProviderError::State(_) | ProviderError::Io(_) => {
                Diagnostic::error("State error", err.to_string())
            }
            ProviderError::Other(_) => Diagnostic::error("Unexpected error", err.to_string()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(f, "{label}: {}", self.summary)?;
        if let Some(ref attribute) = self.attribute {
            write!(f, "\n\n  with attribute {attribute}")?;
        }
        if !self.detail.is_empty() && self.detail != self.summary {
            write!(f, "\n\n  {}", self.detail)?;
        }
        Ok(())
    }
}

/// Ordered collection of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::error(summary, detail));
    }

    pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::warning(summary, detail));
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

impl From<&ProviderError> for Diagnostics {
    fn from(err: &ProviderError) -> Self {
        Diagnostics(vec![Diagnostic::from(err)])
    }
}
