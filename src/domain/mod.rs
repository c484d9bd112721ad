//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Call requests and responses, commands, bindings, welcome messages
//! - Traits: Abstractions for the platform (KeyValueStore, Bot, Platform)

pub mod entities;
pub mod traits;
