//! Error types for Starpath Core

use crate::limits::ValidationError;
use crate::path::PathId;
use crate::star::StarId;
use thiserror::Error;

/// Result type alias using Starpath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Starpath error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid star attribute: {0}")]
    InvalidAttribute(#[from] ValidationError),

    #[error("Invalid edge: star {0} cannot be connected to itself")]
    InvalidEdge(StarId),

    #[error("Star {star} is not an endpoint of path {path}")]
    NotAnEndpoint { star: StarId, path: PathId },

    #[error("Not enough stars to build paths: found {found}, need at least {required}")]
    InsufficientStars { found: usize, required: usize },

    #[error("Star not found: {0}")]
    StarNotFound(String),

    #[error("Catalog error on line {line}: {message}")]
    Catalog { line: usize, message: String },
}

impl Error {
    pub(crate) fn catalog(line: usize, message: impl Into<String>) -> Self {
        Self::Catalog {
            line,
            message: message.into(),
        }
    }
}
