//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Command dispatch, the welcome message repository, the binding catalog
//! - Errors: Domain-specific errors

pub mod errors;
pub mod services;
