//! Item use-case service.
//!
//! # Responsibility
//! - Provide the named operations clients call, with the collection kind
//!   baked into each entry point.
//! - Delegate storage and search mechanics to the registry contract.
//!
//! # Invariants
//! - Service APIs never bypass the registry contract.
//! - The service layer stays storage-agnostic.

use crate::model::item::{Item, ItemDraft, ItemId, ItemKind, ItemPatch};
use crate::registry::item_registry::ItemRegistry;
use crate::search::keyword::SearchMatches;

/// Use-case wrapper exposing the lost/found operation set.
pub struct ItemService<R: ItemRegistry> {
    registry: R,
}

impl<R: ItemRegistry> ItemService<R> {
    /// Creates a service over the provided registry implementation.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Creates a lost-item record with status `LOST`.
    pub fn create_lost_item(&mut self, draft: ItemDraft) -> Item {
        self.registry.create(ItemKind::Lost, draft)
    }

    /// Creates a found-item record with status `FOUND`.
    pub fn create_found_item(&mut self, draft: ItemDraft) -> Item {
        self.registry.create(ItemKind::Found, draft)
    }

    /// Returns every lost item in creation order.
    pub fn get_all_lost_items(&self) -> Vec<Item> {
        self.registry.get_all(ItemKind::Lost)
    }

    /// Returns every found item in creation order.
    pub fn get_all_found_items(&self) -> Vec<Item> {
        self.registry.get_all(ItemKind::Found)
    }

    /// Point lookup on the lost collection. `None` when absent.
    pub fn get_lost_item(&self, id: ItemId) -> Option<Item> {
        self.registry.get(ItemKind::Lost, id)
    }

    /// Point lookup on the found collection. `None` when absent.
    pub fn get_found_item(&self, id: ItemId) -> Option<Item> {
        self.registry.get(ItemKind::Found, id)
    }

    /// Merges a patch into a lost item. `None` when absent.
    pub fn update_lost_item(&mut self, id: ItemId, patch: ItemPatch) -> Option<Item> {
        self.registry.update(ItemKind::Lost, id, patch)
    }

    /// Merges a patch into a found item. `None` when absent.
    pub fn update_found_item(&mut self, id: ItemId, patch: ItemPatch) -> Option<Item> {
        self.registry.update(ItemKind::Found, id, patch)
    }

    /// Deletes a lost item, reporting whether anything was removed.
    pub fn delete_lost_item(&mut self, id: ItemId) -> bool {
        self.registry.remove(ItemKind::Lost, id)
    }

    /// Deletes a found item, reporting whether anything was removed.
    pub fn delete_found_item(&mut self, id: ItemId) -> bool {
        self.registry.remove(ItemKind::Found, id)
    }

    /// Keyword search across both collections.
    pub fn search_items(&self, query: &str) -> SearchMatches {
        self.registry.search(query)
    }
}
