//! State manager
//!
//! Holds the loaded [`StateDocument`] and writes it back through a
//! [`StateStorage`] after every change.

use super::store::{ResourceState, StateDocument, StateStorage};
use crate::domain::{ResourceAddress, Result};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Local record of managed resources
pub struct StateManager {
    storage: Arc<dyn StateStorage>,
    document: Mutex<StateDocument>,
}

impl StateManager {
    /// Load state from storage, starting a fresh lineage if nothing is stored
    ///
    /// # Arguments
    ///
    /// * `storage` - State storage implementation
    ///
    /// # Errors
    ///
    /// Returns an error if the stored document cannot be read or decoded.
    pub async fn open(storage: Arc<dyn StateStorage>) -> Result<Self> {
        let document = match storage.load().await? {
            Some(document) => document,
            None => {
                let document = StateDocument::new();
                tracing::info!(lineage = %document.lineage, "Starting new state");
                document
            }
        };

        Ok(Self {
            storage,
            document: Mutex::new(document),
        })
    }

    /// Attributes recorded for an address
    pub async fn get(&self, address: &ResourceAddress) -> Option<ResourceState> {
        self.document
            .lock()
            .await
            .resources
            .get(&address.to_string())
            .cloned()
    }

    /// Record attributes for an address, replacing any prior entry
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be saved; the in-memory state
    /// is left as it was.
    pub async fn put(&self, address: &ResourceAddress, attributes: Value) -> Result<()> {
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        staged
            .resources
            .insert(address.to_string(), ResourceState::new(address, attributes));
        self.persist(&mut staged).await?;
        *document = staged;
        Ok(())
    }

    /// Forget an address; returns the removed entry
    ///
    /// Nothing is written when the address was not present.
    pub async fn remove(&self, address: &ResourceAddress) -> Result<Option<ResourceState>> {
        let mut document = self.document.lock().await;
        let mut staged = document.clone();
        let removed = staged.resources.remove(&address.to_string());
        if removed.is_some() {
            self.persist(&mut staged).await?;
            *document = staged;
        }
        Ok(removed)
    }

    /// Every recorded address, sorted
    pub async fn list(&self) -> Vec<ResourceAddress> {
        self.document
            .lock()
            .await
            .resources
            .keys()
            .filter_map(|key| key.parse().ok())
            .collect()
    }

    pub async fn serial(&self) -> u64 {
        self.document.lock().await.serial
    }

    pub async fn snapshot(&self) -> StateDocument {
        self.document.lock().await.clone()
    }

    async fn persist(&self, document: &mut StateDocument) -> Result<()> {
        document.serial += 1;
        document.updated_at = Utc::now();
        self.storage.save(document).await?;

        tracing::debug!(
            serial = document.serial,
            resources = document.resources.len(),
            "State updated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::MemoryStateStorage;
    use serde_json::json;

    fn address(name: &str) -> ResourceAddress {
        ResourceAddress::new("saviynt_security_system_resource", name).unwrap()
    }

    #[tokio::test]
    async fn test_put_get_remove() {
        let storage = Arc::new(MemoryStateStorage::new());
        let manager = StateManager::open(storage.clone()).await.unwrap();

        manager
            .put(&address("hr"), json!({"systemname": "hr"}))
            .await
            .unwrap();
        let entry = manager.get(&address("hr")).await.unwrap();
        assert_eq!(entry.attributes["systemname"], "hr");
        assert_eq!(entry.name, "hr");

        let removed = manager.remove(&address("hr")).await.unwrap();
        assert!(removed.is_some());
        assert!(manager.get(&address("hr")).await.is_none());
        assert_eq!(manager.serial().await, 2);
    }

    #[tokio::test]
    async fn test_serial_increments_and_persists() {
        let storage = Arc::new(MemoryStateStorage::new());
        let manager = StateManager::open(storage.clone()).await.unwrap();
        let lineage = manager.snapshot().await.lineage;

        manager.put(&address("a"), json!({})).await.unwrap();
        manager.put(&address("b"), json!({})).await.unwrap();

        let stored = storage.load().await.unwrap().unwrap();
        assert_eq!(stored.serial, 2);
        assert_eq!(stored.lineage, lineage);

        let reopened = StateManager::open(storage).await.unwrap();
        assert_eq!(reopened.list().await, vec![address("a"), address("b")]);
    }

    #[tokio::test]
    async fn test_remove_missing_does_not_write() {
        let storage = Arc::new(MemoryStateStorage::new());
        let manager = StateManager::open(storage.clone()).await.unwrap();

        assert!(manager.remove(&address("ghost")).await.unwrap().is_none());
        assert!(storage.load().await.unwrap().is_none());
    }

    struct ReadOnlyStorage;

    #[async_trait::async_trait]
    impl StateStorage for ReadOnlyStorage {
        async fn load(&self) -> Result<Option<StateDocument>> {
            let mut document = StateDocument::new();
            document.resources.insert(
                address("hr").to_string(),
                ResourceState::new(&address("hr"), json!({"systemname": "hr"})),
            );
            Ok(Some(document))
        }

        async fn save(&self, _document: &StateDocument) -> Result<()> {
            Err(crate::domain::ProviderError::State(
                "state file is read-only".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_failed_save_leaves_memory_unchanged() {
        let manager = StateManager::open(Arc::new(ReadOnlyStorage)).await.unwrap();

        assert!(manager.put(&address("crm"), json!({})).await.is_err());
        assert!(manager.get(&address("crm")).await.is_none());

        assert!(manager.remove(&address("hr")).await.is_err());
        assert!(manager.get(&address("hr")).await.is_some());

        assert_eq!(manager.serial().await, 0);
    }
}
