//! Item domain model.
//!
//! # Responsibility
//! - Define the canonical lost/found record and its input shapes.
//! - Keep the field-by-field update merge in one place.
//!
//! # Invariants
//! - `id` is stable and never reused within its collection.
//! - `created_at` and `kind` are assigned once and never patched.
//! - The model performs no semantic validation of field contents;
//!   presentation clients own that burden.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a lost-and-found record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Category names offered to clients as a suggestion list.
///
/// Open vocabulary: the registry accepts any category string, this list is
/// purely a UI convenience.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Documents",
    "Jewelry",
    "Pets",
    "Keys",
    "Bags",
    "Books",
    "Other",
];

/// Which of the two parallel collections a record belongs to.
///
/// An item keeps its kind for its whole lifetime; there is no migration
/// between the lost and found sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    /// Reported missing by its owner.
    Lost,
    /// Handed in by a finder.
    Found,
}

impl ItemKind {
    /// Status stamped on a freshly created record of this kind.
    pub fn initial_status(self) -> ItemStatus {
        match self {
            Self::Lost => ItemStatus::Lost,
            Self::Found => ItemStatus::Found,
        }
    }
}

/// Handling stage of an item.
///
/// Free-form: any status may follow any other. Status only changes when an
/// update explicitly supplies one; there is no autonomous transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Lost,
    Found,
    Returned,
    Claimed,
}

/// Canonical lost-and-found record.
///
/// One shape serves both collections; `kind` selects the collection and the
/// wire-level spelling of the date field (`dateLost` vs `dateFound`), which
/// is accepted on input via serde aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable ID assigned at creation.
    pub id: ItemId,
    /// Collection membership, fixed for the record's lifetime.
    pub kind: ItemKind,
    pub title: String,
    pub description: String,
    /// Open vocabulary; see [`SUGGESTED_CATEGORIES`].
    pub category: String,
    pub location: String,
    /// Free-form date the item was lost or found. Never parsed or validated.
    #[serde(alias = "dateLost", alias = "dateFound")]
    pub reported_on: String,
    /// Conventionally an email address or phone number; not validated.
    pub contact_info: String,
    pub image_urls: Vec<String>,
    pub status: ItemStatus,
    /// Creation timestamp string, assigned once by the registry clock.
    pub created_at: String,
}

/// Creation input: everything the caller supplies for a new record.
///
/// `id`, `status` and `created_at` are stamped by the registry, never by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    #[serde(alias = "dateLost", alias = "dateFound")]
    pub reported_on: String,
    pub contact_info: String,
    /// Defaults to an empty list when omitted.
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
}

/// Update input: any subset of the mutable fields.
///
/// Deliberately has no `id`, `kind` or `created_at` member, so a merge can
/// never alter record identity regardless of caller input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "dateLost", alias = "dateFound")]
    pub reported_on: Option<String>,
    pub contact_info: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub status: Option<ItemStatus>,
}

impl Item {
    /// Builds the stored record from caller input plus registry-assigned
    /// identity, status and timestamp.
    pub fn from_draft(id: ItemId, kind: ItemKind, draft: ItemDraft, created_at: String) -> Self {
        Self {
            id,
            kind,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            location: draft.location,
            reported_on: draft.reported_on,
            contact_info: draft.contact_info,
            image_urls: draft.image_urls.unwrap_or_default(),
            status: kind.initial_status(),
            created_at,
        }
    }

    /// Shallow-merges a patch into this record.
    ///
    /// Present fields overwrite, absent fields keep their prior value.
    /// An empty patch leaves the record unchanged.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(reported_on) = patch.reported_on {
            self.reported_on = reported_on;
        }
        if let Some(contact_info) = patch.contact_info {
            self.contact_info = contact_info;
        }
        if let Some(image_urls) = patch.image_urls {
            self.image_urls = image_urls;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
