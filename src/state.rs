use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{persistence::Mirror, storage::KeyValueStorage, store::Store};

/// Shared handle to the store. Every mutation, including an order write and
/// the customer statistics it implies, runs under a single write guard.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub mirror: Mirror,
}

impl AppState {
    pub fn new(store: Store, mirror: Mirror) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            mirror,
        }
    }

    /// Build state from whatever `storage` currently holds.
    pub async fn load(storage: Arc<dyn KeyValueStorage>, prefix: &str) -> Self {
        let mirror = Mirror::new(storage, prefix);
        let store = mirror.load().await;
        Self::new(store, mirror)
    }
}
