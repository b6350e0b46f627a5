//! State storage backends
//!
//! The state is one JSON document. [`FileStateStorage`] writes it next to the
//! target path first and renames it into place, so a crash never leaves a
//! truncated file behind.

use crate::domain::{ProviderError, ResourceAddress, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Current state document format version
pub const STATE_VERSION: u32 = 1;

/// One managed resource instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    pub resource_type: String,
    pub name: String,
    pub attributes: Value,
}

impl ResourceState {
    pub fn new(address: &ResourceAddress, attributes: Value) -> Self {
        Self {
            resource_type: address.resource_type().to_string(),
            name: address.name().to_string(),
            attributes,
        }
    }
}

/// Persisted state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDocument {
    pub version: u32,

    /// Incremented on every write
    pub serial: u64,

    /// Identifies the history this document belongs to
    pub lineage: Uuid,

    pub updated_at: DateTime<Utc>,

    /// Keyed by `<resource_type>.<name>`
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceState>,
}

impl StateDocument {
    pub fn new() -> Self {
        Self {
            version: STATE_VERSION,
            serial: 0,
            lineage: Uuid::new_v4(),
            updated_at: Utc::now(),
            resources: BTreeMap::new(),
        }
    }
}

impl Default for StateDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// State storage abstraction
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Load the document, or `None` if nothing has been stored yet
    ///
    /// # Errors
    ///
    /// Returns a `State` error if the stored document cannot be decoded.
    async fn load(&self) -> Result<Option<StateDocument>>;

    /// Replace the stored document
    async fn save(&self, document: &StateDocument) -> Result<()>;
}

/// JSON file on local disk
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    path: PathBuf,
}

impl FileStateStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl StateStorage for FileStateStorage {
    async fn load(&self) -> Result<Option<StateDocument>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document: StateDocument = serde_json::from_str(&contents).map_err(|e| {
            ProviderError::State(format!(
                "Failed to decode state file {}: {e}",
                self.path.display()
            ))
        })?;

        if document.version > STATE_VERSION {
            return Err(ProviderError::State(format!(
                "State file {} has version {}, newer than supported version {STATE_VERSION}",
                self.path.display(),
                document.version
            )));
        }

        Ok(Some(document))
    }

    async fn save(&self, document: &StateDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let contents = serde_json::to_string_pretty(document)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, contents).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        tracing::debug!(
            path = %self.path.display(),
            serial = document.serial,
            "State saved"
        );
        Ok(())
    }
}

/// In-memory storage for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStateStorage {
    document: Mutex<Option<StateDocument>>,
}

impl MemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStorage for MemoryStateStorage {
    async fn load(&self) -> Result<Option<StateDocument>> {
        Ok(self.document.lock().await.clone())
    }

    async fn save(&self, document: &StateDocument) -> Result<()> {
        *self.document.lock().await = Some(document.clone());
        Ok(())
    }
}
