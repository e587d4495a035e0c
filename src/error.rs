//! Error types for document generation.

use std::io;
use thiserror::Error;

/// Errors raised while classifying or writing an extension document.
#[derive(Debug, Error)]
pub enum DocError {
    /// The output sink rejected a write or flush. The document in progress is
    /// abandoned and the sink should not be reused.
    #[error("failed to write documentation: {0}")]
    Io(#[from] io::Error),

    /// A category name did not match any of the five extension categories.
    #[error("unknown extension category: {0}")]
    UnknownCategory(String),

    #[error("unknown format: {0}. Use xml or json")]
    UnknownFormat(String),
}

impl From<quick_xml::Error> for DocError {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(inner) => {
                DocError::Io(io::Error::new(inner.kind(), inner.to_string()))
            }
            other => DocError::Io(io::Error::other(other)),
        }
    }
}

impl From<serde_json::Error> for DocError {
    fn from(err: serde_json::Error) -> Self {
        DocError::Io(io::Error::other(err))
    }
}

pub type Result<T> = std::result::Result<T, DocError>;
