//! CLI command implementations

pub mod apply;
pub mod common;
pub mod destroy;
pub mod import;
pub mod init;
pub mod read;
pub mod refresh;
pub mod schema;
pub mod show;
pub mod validate;
