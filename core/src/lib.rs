//! Example-driven coercion of exit values.
//!
//! An exit declares an *example* value instead of a schema: `"hello"` means
//! "a string", `{"votes": 123}` means "a dictionary with a numeric `votes`",
//! `[true]` means "a sequence of booleans". This crate coerces whatever a
//! computation actually produced into that shape.
//!
//! - [`ExampleShape`] — the shape read once from an example literal.
//! - [`Coercer`] — recursive coercion with a [`CoercionConfig`].
//! - [`coerce`] — one-shot helper with default settings.
//!
//! Coercion never fails on primitive mismatches; every case has a fallback
//! (text, `0`, `false`, a zeroed structure, a filtered sequence). The only
//! [`CoercionError`] is exceeding the configured nesting depth.
//!
//! # Example
//!
//! ```
//! use exit_coerce_core::*;
//! use serde_json::json;
//!
//! let shape = ExampleShape::from_example(&json!({"foo": ["stuff"], "someArray": ["*"]})).unwrap();
//! let coercer = Coercer::default();
//!
//! let actual = json!({"foo": ["hi"], "someArray": [1234, "x"]});
//! assert_eq!(coercer.coerce(&shape, Some(&actual)).unwrap(), actual);
//!
//! let zeroed = coercer.coerce(&shape, Some(&json!(0))).unwrap();
//! assert_eq!(zeroed, json!({"foo": [], "someArray": []}));
//! ```

mod coerce;
mod config;
mod error;
mod number;
mod shape;

pub use coerce::{Coercer, coerce};
pub use config::{CoercionConfig, DEFAULT_MAX_DEPTH};
pub use error::{CoercionError, Error, Path, Result, Segment, ShapeError};
pub use number::{MAX_SAFE_INTEGER, format_number, number_value, parse_numeric};
pub use shape::{ANY_ELEMENT, ExampleShape};
