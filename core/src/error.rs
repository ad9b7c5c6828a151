//! Error types for shape inference and coercion.
//!
//! Primitive mismatches are never errors: they resolve through the fallback
//! rules in [`coerce`](crate::coerce). What remains here are malformed
//! examples, actual values nested past the configured depth, and config
//! file failures.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// One step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Dictionary member.
    Key(String),
    /// Sequence element.
    Index(usize),
}

/// Location inside a nested example or actual value, rendered as `$.foo[2].bar`.
///
/// # Examples
///
/// ```
/// use exit_coerce_core::{Path, Segment};
///
/// let mut path = Path::root();
/// path.push(Segment::Key("items".into()));
/// path.push(Segment::Index(2));
/// assert_eq!(path.to_string(), "$.items[2]");
/// assert_eq!(path.depth(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The empty path (`$`).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.0.pop()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

/// An example literal that cannot be read as a shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Array examples hold at most one representative element.
    #[error("array example at {path} has {len} elements, expected at most one")]
    AmbiguousArray { path: Path, len: usize },
}

/// An actual value that cannot be reconciled with its shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// The actual value nests deeper than [`CoercionConfig::max_depth`](crate::CoercionConfig).
    #[error("nesting exceeds {max_depth} levels at {path} (expected {example})")]
    TooDeep {
        path: Path,
        max_depth: usize,
        /// Rendering of the shape declared at `path`.
        example: String,
        /// The actual value found at `path`.
        actual: Value,
    },
}

impl CoercionError {
    /// Location of the offending value.
    pub fn path(&self) -> &Path {
        match self {
            Self::TooDeep { path, .. } => path,
        }
    }
}

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed example literal.
    #[error("invalid example: {0}")]
    Shape(#[from] ShapeError),

    /// Actual value could not be coerced.
    #[error("coercion failed: {0}")]
    Coercion(#[from] CoercionError),

    /// Config file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file YAML failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
