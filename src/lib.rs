//! Welcome Bot: a Mattermost app that keeps one welcome message per channel.

pub mod application;
pub mod domain;
pub mod infrastructure;
