//! Registry layer: the authoritative in-memory item store.
//!
//! # Responsibility
//! - Define the registry contract the service layer programs against.
//! - Own the two ordered collections and their CRUD semantics.
//!
//! # Invariants
//! - Absence is data: missing ids surface as `None`/`false`, never errors.
//! - Collections preserve insertion order across updates and removals.

pub mod item_registry;
pub mod sources;
