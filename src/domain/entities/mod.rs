//! Domain entities - Core business objects with no external dependencies

pub mod binding;
pub mod call;
pub mod command;
pub mod response;
pub mod user;
pub mod welcome;

pub use binding::{Binding, Call, Expand, ExpandLevel, Field, FieldType, Form};
pub use call::{CallContext, CallRequest, CallValues, Channel, ChannelType, FieldValue, Team};
pub use command::Command;
pub use response::{CallResponse, ResponseType};
pub use user::User;
pub use welcome::{ScopeKey, WelcomeMessage};
