//! Error types for parentdesk-types

use thiserror::Error;

/// Errors raised while assembling a navigation menu
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Navigation menu has no items")]
    EmptyMenu,

    #[error("Duplicate navigation path: {path}")]
    DuplicatePath { path: String },

    #[error("Invalid navigation path: {path} - {reason}")]
    InvalidPath { path: String, reason: String },
}
