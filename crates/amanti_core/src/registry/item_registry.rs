//! Registry contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and search APIs over the two item collections.
//! - Keep lookup/merge/removal mechanics inside the storage boundary.
//!
//! # Invariants
//! - `create` is the only path that assigns `id`, `status` and `created_at`.
//! - Lookups, updates and removals target missing ids without failing.
//! - Iteration order equals insertion order; removals shift, never swap.

use crate::model::item::{Item, ItemDraft, ItemId, ItemKind, ItemPatch};
use crate::registry::sources::{Clock, IdSource, SystemClock, UuidIdSource};
use crate::search::keyword::{search_collections, SearchMatches};
use log::debug;

/// Registry contract for item CRUD and search.
pub trait ItemRegistry {
    /// Creates a record in the collection for `kind` and returns it fully
    /// populated. Appends to the end; no duplicate detection, no capacity
    /// limit.
    fn create(&mut self, kind: ItemKind, draft: ItemDraft) -> Item;

    /// Returns the whole collection for `kind` in insertion order.
    fn get_all(&self, kind: ItemKind) -> Vec<Item>;

    /// Returns the first record matching `id`, or `None` when absent.
    fn get(&self, kind: ItemKind, id: ItemId) -> Option<Item>;

    /// Merges `patch` into the record matching `id` and returns the updated
    /// record, or `None` when absent.
    fn update(&mut self, kind: ItemKind, id: ItemId, patch: ItemPatch) -> Option<Item>;

    /// Removes the record matching `id`. Returns whether a record was
    /// removed; remaining records keep their relative order.
    fn remove(&mut self, kind: ItemKind, id: ItemId) -> bool;

    /// Case-insensitive substring search over both collections.
    fn search(&self, query: &str) -> SearchMatches;
}

/// Authoritative in-memory store for both item collections.
///
/// Created empty and living for the process lifetime; nothing is persisted.
/// Single-writer by construction: embedding layers that share one instance
/// across threads must wrap it in a mutex.
pub struct InMemoryItemRegistry {
    lost: Vec<Item>,
    found: Vec<Item>,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl InMemoryItemRegistry {
    /// Creates an empty registry with the default UUID and UTC clock
    /// sources.
    pub fn new() -> Self {
        Self::with_sources(Box::new(UuidIdSource), Box::new(SystemClock))
    }

    /// Creates an empty registry with caller-provided identity and clock
    /// seams. Used by tests that need deterministic ids or timestamps.
    pub fn with_sources(ids: Box<dyn IdSource>, clock: Box<dyn Clock>) -> Self {
        Self {
            lost: Vec::new(),
            found: Vec::new(),
            ids,
            clock,
        }
    }

    /// Total record count across both collections.
    pub fn len(&self) -> usize {
        self.lost.len() + self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lost.is_empty() && self.found.is_empty()
    }

    fn collection(&self, kind: ItemKind) -> &[Item] {
        match kind {
            ItemKind::Lost => &self.lost,
            ItemKind::Found => &self.found,
        }
    }

    fn collection_mut(&mut self, kind: ItemKind) -> &mut Vec<Item> {
        match kind {
            ItemKind::Lost => &mut self.lost,
            ItemKind::Found => &mut self.found,
        }
    }

    fn position(&self, kind: ItemKind, id: ItemId) -> Option<usize> {
        self.collection(kind).iter().position(|item| item.id == id)
    }
}

impl Default for InMemoryItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry for InMemoryItemRegistry {
    fn create(&mut self, kind: ItemKind, draft: ItemDraft) -> Item {
        let item = Item::from_draft(self.ids.next_id(), kind, draft, self.clock.now());
        debug!(
            "event=item_created module=registry status=ok kind={:?} id={}",
            kind, item.id
        );
        self.collection_mut(kind).push(item.clone());
        item
    }

    fn get_all(&self, kind: ItemKind) -> Vec<Item> {
        self.collection(kind).to_vec()
    }

    fn get(&self, kind: ItemKind, id: ItemId) -> Option<Item> {
        self.collection(kind)
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    fn update(&mut self, kind: ItemKind, id: ItemId, patch: ItemPatch) -> Option<Item> {
        let index = self.position(kind, id)?;
        let item = &mut self.collection_mut(kind)[index];
        item.apply(patch);
        debug!(
            "event=item_updated module=registry status=ok kind={:?} id={}",
            kind, id
        );
        Some(item.clone())
    }

    fn remove(&mut self, kind: ItemKind, id: ItemId) -> bool {
        match self.position(kind, id) {
            Some(index) => {
                self.collection_mut(kind).remove(index);
                debug!(
                    "event=item_removed module=registry status=ok kind={:?} id={}",
                    kind, id
                );
                true
            }
            None => false,
        }
    }

    fn search(&self, query: &str) -> SearchMatches {
        search_collections(&self.lost, &self.found, query)
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryItemRegistry, ItemRegistry};
    use crate::model::item::{ItemDraft, ItemKind};
    use crate::registry::sources::{Clock, IdSource};
    use uuid::Uuid;

    struct FixedClock(&'static str);

    impl Clock for FixedClock {
        fn now(&self) -> String {
            self.0.to_string()
        }
    }

    struct FixedIdSource(Uuid);

    impl IdSource for FixedIdSource {
        fn next_id(&self) -> Uuid {
            self.0
        }
    }

    fn draft(title: &str) -> ItemDraft {
        ItemDraft {
            title: title.to_string(),
            description: "desc".to_string(),
            category: "Other".to_string(),
            location: "somewhere".to_string(),
            reported_on: "2024-05-01".to_string(),
            contact_info: "a@b.com".to_string(),
            image_urls: None,
        }
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = InMemoryItemRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn create_uses_injected_sources() {
        let id = Uuid::parse_str("00000000-0000-4000-8000-000000000042").unwrap();
        let mut registry = InMemoryItemRegistry::with_sources(
            Box::new(FixedIdSource(id)),
            Box::new(FixedClock("2024-06-01T00:00:00.000Z")),
        );

        let created = registry.create(ItemKind::Lost, draft("umbrella"));
        assert_eq!(created.id, id);
        assert_eq!(created.created_at, "2024-06-01T00:00:00.000Z");
    }

    #[test]
    fn collections_are_independent_namespaces() {
        let mut registry = InMemoryItemRegistry::new();
        let lost = registry.create(ItemKind::Lost, draft("umbrella"));

        assert!(registry.get(ItemKind::Found, lost.id).is_none());
        assert!(!registry.remove(ItemKind::Found, lost.id));
        assert!(registry.get(ItemKind::Lost, lost.id).is_some());
    }
}
