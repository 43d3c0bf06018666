// src/lib.rs

pub mod client;
pub mod config;
pub mod core;

// Re-export
pub use crate::client::{Connection, MpdClient};
pub use crate::core::{Answer, CommandKind, MpdError};
