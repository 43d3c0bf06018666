// src/core/mod.rs

//! The central module containing the protocol core of the client.

pub mod command;
pub mod entity;
pub mod errors;
pub mod protocol;

pub use command::{Answer, Command, CommandKind};
pub use errors::MpdError;
