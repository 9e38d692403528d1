//! Conversation primitives shared by the roles

pub mod entities;

pub use entities::{Message, Role};
