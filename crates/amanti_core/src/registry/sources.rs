//! Identity and clock seams for the registry.
//!
//! # Responsibility
//! - Keep id generation and timestamping behind swappable traits so tests
//!   can pin both.
//!
//! # Invariants
//! - `next_id` values are unique for the lifetime of a source instance.
//! - `now` output is an opaque string to the registry; it is stored, never
//!   parsed.

use crate::model::item::ItemId;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Supplies a fresh identifier for each created record.
pub trait IdSource: Send {
    fn next_id(&self) -> ItemId;
}

/// Supplies the creation timestamp string.
pub trait Clock: Send {
    fn now(&self) -> String;
}

/// Default id source backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> ItemId {
        Uuid::new_v4()
    }
}

/// Default clock producing RFC 3339 UTC timestamps.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
