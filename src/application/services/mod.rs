//! Application services - Business logic orchestration

pub mod binding_catalog;
pub mod command_dispatcher;
pub mod welcome_repository;

pub use binding_catalog::BindingCatalog;
pub use command_dispatcher::CommandDispatcher;
pub use welcome_repository::{WelcomeMessageRepository, STORE_PREFIX};
