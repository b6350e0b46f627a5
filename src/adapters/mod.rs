//! External system integrations.
//!
//! - [`saviynt`] - Saviynt EIC REST API (connections, endpoints, security systems)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate the HTTP dependency and
//! enable testing with fake implementations. Resources only ever see the
//! [`saviynt::SaviyntApi`] trait.
//!
//! ```rust,no_run
//! use saviynt_provider::adapters::saviynt::{SaviyntApi, SaviyntClient};
//! use saviynt_provider::config::{secret_string, ProviderConfig};
//!
//! # async fn example() -> saviynt_provider::domain::Result<()> {
//! let config = ProviderConfig {
//!     server_url: "acme.saviyntcloud.com".to_string(),
//!     username: "admin".to_string(),
//!     password: secret_string("secret".to_string()),
//!     timeout_seconds: 60,
//!     tls_verify: true,
//! };
//!
//! let client = SaviyntClient::login(&config).await?;
//! println!("Logged in to {}", client.base_url());
//! # Ok(())
//! # }
//! ```

pub mod saviynt;
