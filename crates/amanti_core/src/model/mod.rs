//! Domain model for lost-and-found records.
//!
//! # Responsibility
//! - Define the canonical item record shared by the lost and found sides.
//! - Define the creation and update input shapes the registry consumes.
//!
//! # Invariants
//! - Every record is identified by a stable `ItemId`.
//! - `id`, `kind` and `created_at` are fixed at creation; update inputs
//!   cannot name them.

pub mod item;
