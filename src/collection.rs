//! Todo Collection
//!
//! The in-memory todo list, kept in a reactive signal and mirrored into
//! persistent storage after every mutation. Signal updates are what the
//! UI subscribes to, so a mutation here is also the change notification.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::storage::TodoStorage;

/// Signal-backed, storage-mirrored todo list
#[derive(Clone)]
pub struct TodoCollection {
    items: RwSignal<Vec<TodoItem>>,
    storage: TodoStorage,
    // Highest identifier issued or loaded so far; not reactive
    last_timestamp: StoredValue<u64>,
}

impl TodoCollection {
    pub fn new(storage: TodoStorage) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            storage,
            last_timestamp: StoredValue::new(0),
        }
    }

    /// Reactive handle to the items, for `<For>` subscriptions
    pub fn items(&self) -> RwSignal<Vec<TodoItem>> {
        self.items
    }

    /// Populates the list from storage. Called once at startup.
    pub fn load(&self) {
        let loaded = self.storage.load();
        // Loaded items are in timestamp order, so the last one is the max
        self.last_timestamp
            .set_value(loaded.last().map(|item| item.timestamp).unwrap_or(0));
        self.items.set(loaded);
    }

    /// Creates a todo from user input.
    ///
    /// Input that is empty after trimming is ignored and `None` is
    /// returned. The stored text is kept as typed.
    pub fn create(&self, text: &str) -> Option<TodoItem> {
        if text.trim().is_empty() {
            return None;
        }
        let item = TodoItem::new(self.next_timestamp(), text);
        self.storage.put(&item);
        self.items.update(|items| items.push(item.clone()));
        Some(item)
    }

    /// Flips one todo's completed flag and persists its new state.
    pub fn toggle(&self, timestamp: u64) {
        let mut changed = None;
        self.items.update(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.timestamp == timestamp) {
                item.toggle_completed();
                changed = Some(item.clone());
            }
        });
        if let Some(item) = changed {
            self.storage.put(&item);
        }
    }

    /// Deletes one todo: from storage first, then from the list.
    pub fn remove(&self, timestamp: u64) {
        self.storage.delete(timestamp);
        self.items
            .update(|items| items.retain(|item| item.timestamp != timestamp));
    }

    /// Deletes every todo.
    pub fn clear(&self) {
        for item in self.items.get_untracked() {
            self.remove(item.timestamp);
        }
    }

    fn next_timestamp(&self) -> u64 {
        let next = next_timestamp(now_ms(), self.last_timestamp.get_value());
        self.last_timestamp.set_value(next);
        next
    }
}

/// Issues a creation timestamp that is also unique.
///
/// Two todos created within the same millisecond must not collide on
/// identifier, so the clock is bumped past the last issued value.
fn next_timestamp(now_ms: u64, last: u64) -> u64 {
    if now_ms > last {
        now_ms
    } else {
        last + 1
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::collections::HashSet;

    fn collection(backend: &MemoryStorage) -> TodoCollection {
        TodoCollection::new(TodoStorage::new("test-todos", backend.clone()))
    }

    #[test]
    fn create_appends_one_incomplete_item() {
        let backend = MemoryStorage::default();
        let todos = collection(&backend);

        let created = todos.create("Buy milk").expect("item should be created");
        assert_eq!(created.text, "Buy milk");
        assert!(!created.completed);

        let items = todos.items().get_untracked();
        assert_eq!(items, vec![created]);
    }

    #[test]
    fn blank_input_creates_nothing() {
        let backend = MemoryStorage::default();
        let todos = collection(&backend);

        assert!(todos.create("").is_none());
        assert!(todos.create("   \t  ").is_none());
        assert!(todos.items().get_untracked().is_empty());

        // Nothing was persisted either
        let reloaded = collection(&backend);
        reloaded.load();
        assert!(reloaded.items().get_untracked().is_empty());
    }

    #[test]
    fn toggle_flips_and_persists() {
        let backend = MemoryStorage::default();
        let todos = collection(&backend);

        let created = todos.create("Buy milk").unwrap();
        todos.toggle(created.timestamp);
        assert!(todos.items().get_untracked()[0].completed);

        let reloaded = collection(&backend);
        reloaded.load();
        assert!(reloaded.items().get_untracked()[0].completed);

        todos.toggle(created.timestamp);
        assert!(!todos.items().get_untracked()[0].completed);
    }

    #[test]
    fn remove_drops_item_and_record() {
        let backend = MemoryStorage::default();
        let todos = collection(&backend);

        let keep = todos.create("Keep me").unwrap();
        let gone = todos.create("Drop me").unwrap();
        todos.remove(gone.timestamp);

        let items = todos.items().get_untracked();
        assert_eq!(items, vec![keep.clone()]);

        let reloaded = collection(&backend);
        reloaded.load();
        assert_eq!(reloaded.items().get_untracked(), vec![keep]);
    }

    #[test]
    fn clear_empties_collection_and_storage() {
        let backend = MemoryStorage::default();
        let todos = collection(&backend);

        todos.create("One").unwrap();
        todos.create("Two").unwrap();
        todos.create("Three").unwrap();
        todos.clear();

        assert!(todos.items().get_untracked().is_empty());

        let reloaded = collection(&backend);
        reloaded.load();
        assert!(reloaded.items().get_untracked().is_empty());
    }

    #[test]
    fn load_round_trips_items_and_states() {
        let backend = MemoryStorage::default();
        let todos = collection(&backend);

        let first = todos.create("Buy milk").unwrap();
        let second = todos.create("Walk dog").unwrap();
        todos.toggle(first.timestamp);

        let reloaded = collection(&backend);
        reloaded.load();
        let items = reloaded.items().get_untracked();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].timestamp, first.timestamp);
        assert!(items[0].completed);
        assert_eq!(items[1], second);
    }

    #[test]
    fn created_after_reload_does_not_collide() {
        let backend = MemoryStorage::default();
        let todos = collection(&backend);
        let existing = todos.create("Old").unwrap();

        let reloaded = collection(&backend);
        reloaded.load();
        let fresh = reloaded.create("New").unwrap();
        assert_ne!(fresh.timestamp, existing.timestamp);
    }

    #[test]
    fn rapid_creates_get_distinct_identifiers() {
        let todos = collection(&MemoryStorage::default());

        let ids: HashSet<u64> = (0..50)
            .map(|n| todos.create(&format!("Task {n}")).unwrap().timestamp)
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn timestamps_bump_past_a_stalled_clock() {
        assert_eq!(next_timestamp(10, 5), 10);
        assert_eq!(next_timestamp(7, 7), 8);
        assert_eq!(next_timestamp(5, 9), 10);
    }
}
