//! FFI use-case API for mobile-facing calls.
//!
//! # Responsibility
//! - Expose the lost/found operations to Dart via FRB.
//! - Own the process-global registry instance and its lock.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Absence (missing id, malformed id) is data, never an error.
//! - All access to the shared registry goes through one mutex.

use amanti_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    InMemoryItemRegistry, Item, ItemDraft, ItemId, ItemKind, ItemPatch, ItemService, ItemStatus,
    SUGGESTED_CATEGORIES,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

static SERVICE: OnceLock<Mutex<ItemService<InMemoryItemRegistry>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Category names clients may offer as a picker; the registry accepts any
/// string regardless.
#[flutter_rust_bridge::frb(sync)]
pub fn suggested_categories() -> Vec<String> {
    SUGGESTED_CATEGORIES
        .iter()
        .map(|name| (*name).to_string())
        .collect()
}

/// Wire view of one item record, all fields rendered to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub id: String,
    /// `LOST` or `FOUND` collection membership.
    pub kind: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    /// Date the item was lost or found, as supplied by the reporter.
    pub reported_on: String,
    pub contact_info: String,
    pub image_urls: Vec<String>,
    /// `LOST`, `FOUND`, `RETURNED` or `CLAIMED`.
    pub status: String,
    pub created_at: String,
}

/// Creation input mirrored from the client form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraftInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub reported_on: String,
    pub contact_info: String,
    pub image_urls: Option<Vec<String>>,
}

/// Partial update input; absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatchInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub reported_on: Option<String>,
    pub contact_info: Option<String>,
    pub image_urls: Option<Vec<String>>,
    /// One of `LOST|FOUND|RETURNED|CLAIMED` when present.
    pub status: Option<String>,
}

/// Envelope for create/update flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemActionResponse {
    /// Whether the operation produced/located a record.
    pub ok: bool,
    pub item: Option<ItemRecord>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ItemActionResponse {
    fn success(message: impl Into<String>, item: ItemRecord) -> Self {
        Self {
            ok: true,
            item: Some(item),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item: None,
            message: message.into(),
        }
    }
}

/// Envelope for delete flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDeleteResponse {
    pub deleted: bool,
    pub message: String,
}

/// Envelope for the cross-collection search flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSearchResponse {
    pub lost_items: Vec<ItemRecord>,
    pub found_items: Vec<ItemRecord>,
    pub message: String,
}

/// Creates a lost-item record.
///
/// # FFI contract
/// - Sync call against the shared in-memory registry.
/// - Never panics; always returns a populated envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn create_lost_item(input: ItemDraftInput) -> ItemActionResponse {
    let item = with_service(|service| service.create_lost_item(draft_from_input(input)));
    ItemActionResponse::success("Lost item created.", to_record(item))
}

/// Creates a found-item record.
#[flutter_rust_bridge::frb(sync)]
pub fn create_found_item(input: ItemDraftInput) -> ItemActionResponse {
    let item = with_service(|service| service.create_found_item(draft_from_input(input)));
    ItemActionResponse::success("Found item created.", to_record(item))
}

/// Returns every lost item in creation order.
#[flutter_rust_bridge::frb(sync)]
pub fn get_all_lost_items() -> Vec<ItemRecord> {
    with_service(|service| service.get_all_lost_items())
        .into_iter()
        .map(to_record)
        .collect()
}

/// Returns every found item in creation order.
#[flutter_rust_bridge::frb(sync)]
pub fn get_all_found_items() -> Vec<ItemRecord> {
    with_service(|service| service.get_all_found_items())
        .into_iter()
        .map(to_record)
        .collect()
}

/// Point lookup on the lost collection.
///
/// A malformed or unknown id yields `None`, never an error.
#[flutter_rust_bridge::frb(sync)]
pub fn get_lost_item(id: String) -> Option<ItemRecord> {
    let id = parse_item_id(&id)?;
    with_service(|service| service.get_lost_item(id)).map(to_record)
}

/// Point lookup on the found collection.
#[flutter_rust_bridge::frb(sync)]
pub fn get_found_item(id: String) -> Option<ItemRecord> {
    let id = parse_item_id(&id)?;
    with_service(|service| service.get_found_item(id)).map(to_record)
}

/// Merges a partial update into a lost item.
///
/// Not-found and malformed ids surface as `ok = false` envelopes.
#[flutter_rust_bridge::frb(sync)]
pub fn update_lost_item(id: String, input: ItemPatchInput) -> ItemActionResponse {
    let Some(item_id) = parse_item_id(&id) else {
        return ItemActionResponse::failure("No lost item with that id.");
    };
    let patch = match patch_from_input(input) {
        Ok(patch) => patch,
        Err(message) => return ItemActionResponse::failure(message),
    };
    match with_service(|service| service.update_lost_item(item_id, patch)) {
        Some(item) => ItemActionResponse::success("Lost item updated.", to_record(item)),
        None => ItemActionResponse::failure("No lost item with that id."),
    }
}

/// Merges a partial update into a found item.
#[flutter_rust_bridge::frb(sync)]
pub fn update_found_item(id: String, input: ItemPatchInput) -> ItemActionResponse {
    let Some(item_id) = parse_item_id(&id) else {
        return ItemActionResponse::failure("No found item with that id.");
    };
    let patch = match patch_from_input(input) {
        Ok(patch) => patch,
        Err(message) => return ItemActionResponse::failure(message),
    };
    match with_service(|service| service.update_found_item(item_id, patch)) {
        Some(item) => ItemActionResponse::success("Found item updated.", to_record(item)),
        None => ItemActionResponse::failure("No found item with that id."),
    }
}

/// Deletes a lost item by id.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_lost_item(id: String) -> ItemDeleteResponse {
    let deleted = match parse_item_id(&id) {
        Some(item_id) => with_service(|service| service.delete_lost_item(item_id)),
        None => false,
    };
    delete_response(deleted, "lost")
}

/// Deletes a found item by id.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_found_item(id: String) -> ItemDeleteResponse {
    let deleted = match parse_item_id(&id) {
        Some(item_id) => with_service(|service| service.delete_found_item(item_id)),
        None => false,
    };
    delete_response(deleted, "found")
}

/// Keyword search across both collections.
///
/// An empty query returns every item on both sides.
#[flutter_rust_bridge::frb(sync)]
pub fn search_items(query: String) -> ItemSearchResponse {
    let matches = with_service(|service| service.search_items(&query));
    let lost_items: Vec<_> = matches.lost_items.into_iter().map(to_record).collect();
    let found_items: Vec<_> = matches.found_items.into_iter().map(to_record).collect();
    let message = if lost_items.is_empty() && found_items.is_empty() {
        "No results.".to_string()
    } else {
        format!(
            "Found {} lost and {} found item(s).",
            lost_items.len(),
            found_items.len()
        )
    };
    ItemSearchResponse {
        lost_items,
        found_items,
        message,
    }
}

fn with_service<T>(f: impl FnOnce(&mut ItemService<InMemoryItemRegistry>) -> T) -> T {
    let mutex = SERVICE.get_or_init(|| Mutex::new(ItemService::new(InMemoryItemRegistry::new())));
    // Never panic across the FFI boundary: recover the store from a
    // poisoned lock instead of unwrapping.
    let mut guard: MutexGuard<'_, _> = match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

fn parse_item_id(raw: &str) -> Option<ItemId> {
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            warn!("event=id_parse_failed module=ffi status=miss");
            None
        }
    }
}

fn draft_from_input(input: ItemDraftInput) -> ItemDraft {
    ItemDraft {
        title: input.title,
        description: input.description,
        category: input.category,
        location: input.location,
        reported_on: input.reported_on,
        contact_info: input.contact_info,
        image_urls: input.image_urls,
    }
}

fn patch_from_input(input: ItemPatchInput) -> Result<ItemPatch, String> {
    let status = match input.status {
        Some(raw) => Some(
            parse_status(&raw).ok_or_else(|| format!("unsupported status `{raw}`"))?,
        ),
        None => None,
    };
    Ok(ItemPatch {
        title: input.title,
        description: input.description,
        category: input.category,
        location: input.location,
        reported_on: input.reported_on,
        contact_info: input.contact_info,
        image_urls: input.image_urls,
        status,
    })
}

fn parse_status(value: &str) -> Option<ItemStatus> {
    match value {
        "LOST" => Some(ItemStatus::Lost),
        "FOUND" => Some(ItemStatus::Found),
        "RETURNED" => Some(ItemStatus::Returned),
        "CLAIMED" => Some(ItemStatus::Claimed),
        _ => None,
    }
}

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Lost => "LOST",
        ItemKind::Found => "FOUND",
    }
}

fn status_label(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Lost => "LOST",
        ItemStatus::Found => "FOUND",
        ItemStatus::Returned => "RETURNED",
        ItemStatus::Claimed => "CLAIMED",
    }
}

fn to_record(item: Item) -> ItemRecord {
    ItemRecord {
        id: item.id.to_string(),
        kind: kind_label(item.kind).to_string(),
        title: item.title,
        description: item.description,
        category: item.category,
        location: item.location,
        reported_on: item.reported_on,
        contact_info: item.contact_info,
        image_urls: item.image_urls,
        status: status_label(item.status).to_string(),
        created_at: item.created_at,
    }
}

fn delete_response(deleted: bool, side: &str) -> ItemDeleteResponse {
    let message = if deleted {
        format!("Deleted {side} item.")
    } else {
        format!("No {side} item with that id.")
    };
    ItemDeleteResponse { deleted, message }
}
