//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Manifest: App metadata served at install time
//! - Storage: In-memory key-value store
//! - Adapters: Platform integrations (Mattermost, local)
//! - Server: HTTP endpoints

pub mod adapters;
pub mod config;
pub mod manifest;
pub mod server;
pub mod storage;
