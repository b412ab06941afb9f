// src/domain/error.rs
use std::fmt::Display;
use thiserror::Error;

/// Every backend failure collapses into `RequestFailed`; callers never
/// branch on the cause.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to {operation}: {message}")]
    RequestFailed {
        operation: &'static str,
        message: String,
    },
    #[error("Invalid note: {0}")]
    InvalidNote(String),
    #[error("Unknown AI tool: {0}")]
    UnknownTool(String),
}

impl DomainError {
    pub fn request_failed(operation: &'static str, cause: impl Display) -> Self {
        Self::RequestFailed {
            operation,
            message: cause.to_string(),
        }
    }
}
