//! Managed resources
//!
//! - [`connection`] - generic connection handler, parameterised per connector
//! - [`connectors`] - field tables of the supported connector types
//! - [`endpoint`] - endpoints with their nested lists
//! - [`security_system`] - security systems
//! - [`fields`] - field descriptors and the null-coalescing copiers

pub mod connection;
pub mod connectors;
pub mod endpoint;
pub mod fields;
pub mod security_system;

pub use connection::{ConnectionModel, ConnectionResource, ConnectorSpec};
pub use endpoint::EndpointResource;
pub use fields::FieldSpec;
pub use security_system::SecuritySystemResource;
