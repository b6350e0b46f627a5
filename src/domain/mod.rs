//! Domain types shared by every layer of the provider.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Error types** ([`ProviderError`], [`SaviyntError`])
//! - **Diagnostics** ([`Diagnostic`], [`Diagnostics`]) rendered to the operator
//! - **Identifiers** ([`ResourceAddress`])
//! - **Coalescing helpers** ([`values`]) for optional string attributes
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ProviderError>`]:
//!
//! ```rust
//! use saviynt_provider::domain::{ProviderError, Result};
//!
//! fn check_name(prior: &str, planned: &str) -> Result<()> {
//!     if prior != planned {
//!         return Err(ProviderError::Validation(
//!             "Connection name cannot be updated".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

pub mod diagnostics;
pub mod errors;
pub mod ids;
pub mod result;
pub mod values;

// Re-export commonly used types for convenience
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use errors::{ProviderError, SaviyntError};
pub use ids::ResourceAddress;
pub use result::Result;
