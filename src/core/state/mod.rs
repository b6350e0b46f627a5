//! Local state of managed resources

pub mod manager;
pub mod store;

pub use manager::StateManager;
pub use store::{
    FileStateStorage, MemoryStateStorage, ResourceState, StateDocument, StateStorage,
    STATE_VERSION,
};
