//! Error types for exit compilation and per-exit coercion.

use exit_coerce_core::{CoercionError, ShapeError};
use thiserror::Error;

/// Errors raised while building an [`ExitSet`](crate::ExitSet) or coercing
/// an exit's output.
#[derive(Debug, Error)]
pub enum ExitError {
    /// No exit with this name is declared.
    #[error("unknown exit: {0}")]
    UnknownExit(String),

    /// Two descriptors share a name.
    #[error("duplicate exit: {0}")]
    DuplicateExit(String),

    /// Neither the configured default exit nor `success` is declared.
    #[error("no default exit declared (looked for `{0}`)")]
    NoDefaultExit(String),

    /// The exit's example literal cannot be read as a shape.
    #[error("exit `{exit}` declares an invalid example: {source}")]
    InvalidExample { exit: String, source: ShapeError },

    /// The exit's output could not be coerced.
    #[error("exit `{exit}` output could not be coerced: {source}")]
    Coercion { exit: String, source: CoercionError },

    /// Exit descriptors are not valid JSON objects.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results with [`ExitError`].
pub type Result<T> = std::result::Result<T, ExitError>;
