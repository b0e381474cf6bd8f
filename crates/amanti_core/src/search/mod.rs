//! Keyword search entry points.
//!
//! # Responsibility
//! - Expose the cross-collection substring search used by the search
//!   operation.
//! - Keep match semantics in one place, shared by every storage backend.

pub mod keyword;
