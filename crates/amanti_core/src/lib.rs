//! Core domain logic for Amanti, a lost-and-found listing service.
//! This crate is the single source of truth for registry invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{
    Item, ItemDraft, ItemId, ItemKind, ItemPatch, ItemStatus, SUGGESTED_CATEGORIES,
};
pub use registry::item_registry::{InMemoryItemRegistry, ItemRegistry};
pub use registry::sources::{Clock, IdSource, SystemClock, UuidIdSource};
pub use search::keyword::{item_matches, search_collections, SearchMatches};
pub use service::item_service::ItemService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
