//! In-memory key-value slots

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Process-local slot map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.read().get(key).cloned()
    }

    pub fn set(&self, key: &str, value: String) {
        self.slots.write().insert(key.to_string(), value);
    }

    pub fn remove(&self, key: &str) {
        self.slots.write().remove(key);
    }

    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}
