//! Persistence Layer
//!
//! Serializes the todo collection into a browser key-value store.
//! The backend is a trait so the collection can be tested against an
//! in-memory store without a browser.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::TodoItem;

/// Key prefix for every collection namespace
pub const STORAGE_PREFIX: &str = "todo-leptos-";

/// Abstract string key-value store
///
/// Reads that fail yield `None`; writes are best-effort (the browser
/// storage API is assumed to succeed). `Send + Sync` because handles end
/// up inside Leptos context.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Backend over `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Namespaced JSON codec for one todo collection.
///
/// The whole collection lives under a single key as a JSON object mapping
/// item identifier to item attributes.
#[derive(Clone)]
pub struct TodoStorage {
    key: String,
    backend: Arc<dyn StorageBackend>,
}

impl TodoStorage {
    pub fn new(state_name: &str, backend: impl StorageBackend + 'static) -> Self {
        Self {
            key: format!("{STORAGE_PREFIX}{state_name}"),
            backend: Arc::new(backend),
        }
    }

    /// All persisted todos, in insertion order.
    ///
    /// An absent or unreadable namespace loads as an empty list.
    pub fn load(&self) -> Vec<TodoItem> {
        let mut items: Vec<TodoItem> = self.records().into_values().collect();
        // Identifiers are creation timestamps, so this is insertion order
        items.sort_by_key(|item| item.timestamp);
        items
    }

    /// Upserts one todo's persisted state.
    pub fn put(&self, item: &TodoItem) {
        let mut records = self.records();
        records.insert(item.timestamp.to_string(), item.clone());
        self.store(&records);
    }

    /// Removes one todo by identifier.
    pub fn delete(&self, timestamp: u64) {
        let mut records = self.records();
        records.remove(&timestamp.to_string());
        self.store(&records);
    }

    fn records(&self) -> BTreeMap<String, TodoItem> {
        self.backend
            .read(&self.key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn store(&self, records: &BTreeMap<String, TodoItem>) {
        if let Ok(raw) = serde_json::to_string(records) {
            self.backend.write(&self.key, &raw);
        }
    }
}

/// In-memory backend for tests. Clones share the same entries.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<std::sync::Mutex<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
