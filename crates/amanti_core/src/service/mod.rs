//! Core use-case services.
//!
//! # Responsibility
//! - Bind the registry contract to the named lost/found operations exposed
//!   to transport and client layers.
//! - Keep those layers decoupled from storage details.

pub mod item_service;
