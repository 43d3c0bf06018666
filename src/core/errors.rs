// src/core/errors.rs

//! Defines the primary error type for the client library.

use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing all failures the client can report to
/// its caller. Server-reported `ACK` lines are not represented here: they
/// retire the in-flight command and are logged, never propagated.
#[derive(Error, Debug, Clone)]
pub enum MpdError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Response line exceeds the maximum length of {0} bytes")]
    LineTooLong(usize),

    #[error("'{0}' cannot be sent as a command")]
    InvalidCommand(String),

    #[error("Connection driver has shut down")]
    Closed,
}

impl PartialEq for MpdError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MpdError::Io(e1), MpdError::Io(e2)) => e1.to_string() == e2.to_string(),
            (MpdError::LineTooLong(n1), MpdError::LineTooLong(n2)) => n1 == n2,
            (MpdError::InvalidCommand(s1), MpdError::InvalidCommand(s2)) => s1 == s2,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

// `std::io::Error` is not cloneable, so it is wrapped in an Arc to allow
// cheap, shared cloning of the error value.
impl From<std::io::Error> for MpdError {
    fn from(e: std::io::Error) -> Self {
        MpdError::Io(Arc::new(e))
    }
}
