//! Exit descriptors and per-exit output coercion.
//!
//! A machine declares named exits, each with an optional example literal.
//! [`ExitSet`] compiles those examples once and coerces whatever the
//! machine body hands to an exit into the declared shape, tagging failures
//! with the exit name so the caller can report them.
//!
//! Invoking the machine and delivering results to callbacks is the caller's
//! business; this crate stops at the coerced value.
//!
//! # Example
//!
//! ```
//! use exit_coerce_core::CoercionConfig;
//! use exit_coerce_exits::{ExitDescriptor, ExitSet};
//! use serde_json::json;
//!
//! let exits = ExitSet::from_descriptors(
//!     [
//!         ("then", ExitDescriptor::with_example(json!({"title": "scott", "votes": 123}))),
//!         ("notFound", ExitDescriptor::void()),
//!     ],
//!     CoercionConfig::default(),
//! )
//! .unwrap()
//! .with_default_exit("then");
//!
//! let found = exits
//!     .coerce_default(Some(&json!({"title": "thing", "votes": null})))
//!     .unwrap();
//! assert_eq!(found, json!({"title": "thing", "votes": 0}));
//! ```

mod descriptor;
mod error;
mod exit_set;

pub use descriptor::{Exit, ExitDescriptor};
pub use error::{ExitError, Result};
pub use exit_set::{DEFAULT_EXIT, ExitSet};
