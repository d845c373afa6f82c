//! Error types for pathcopy.

use pathcopy_path::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A `*_with` operation was handed something that is not a function.
    #[error("{verb}: transform must be a function, got {found}")]
    InvalidTransform {
        verb: &'static str,
        found: &'static str,
    },
    #[error("INVALID_PATH: {0}")]
    InvalidPath(#[from] ParseError),
}
