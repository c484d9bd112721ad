//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod platform;
pub mod store;

pub use bot::Bot;
pub use platform::Platform;
pub use store::KeyValueStore;
