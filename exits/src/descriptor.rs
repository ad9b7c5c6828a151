//! Exit descriptors and compiled exits.

use exit_coerce_core::ExampleShape;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ExitError, Result};

/// Declared output channel of a machine.
///
/// Field names follow the declaration format (`friendlyName`, `example`,
/// `void`). Unknown fields are ignored.
///
/// # Examples
///
/// ```
/// use exit_coerce_exits::ExitDescriptor;
/// use serde_json::json;
///
/// let then: ExitDescriptor = serde_json::from_value(json!({
///     "friendlyName": "then",
///     "example": {"title": "scott", "votes": 123}
/// }))
/// .unwrap();
/// assert_eq!(then.friendly_name.as_deref(), Some("then"));
/// assert!(!then.void);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExitDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Example literal describing the output shape. `None` declares no shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Exit carries no output; any value passes through untouched.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub void: bool,
}

impl ExitDescriptor {
    /// Descriptor with an example literal.
    pub fn with_example(example: Value) -> Self {
        Self {
            example: Some(example),
            ..Self::default()
        }
    }

    /// Descriptor for an exit without output.
    pub fn void() -> Self {
        Self {
            void: true,
            ..Self::default()
        }
    }

    pub fn with_friendly_name(mut self, name: &str) -> Self {
        self.friendly_name = Some(name.to_string());
        self
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// An exit whose example has been read into a shape.
#[derive(Debug, Clone)]
pub struct Exit {
    name: String,
    descriptor: ExitDescriptor,
    shape: ExampleShape,
}

impl Exit {
    /// Reads the descriptor's example into a shape.
    ///
    /// Void exits and exits without an example get [`ExampleShape::Any`].
    ///
    /// # Errors
    ///
    /// Returns [`ExitError::InvalidExample`] for a malformed example.
    pub fn compile(name: impl Into<String>, descriptor: ExitDescriptor) -> Result<Self> {
        let name = name.into();
        let shape = match (&descriptor.example, descriptor.void) {
            (Some(example), false) => {
                ExampleShape::from_example(example).map_err(|source| ExitError::InvalidExample {
                    exit: name.clone(),
                    source,
                })?
            }
            _ => ExampleShape::Any,
        };
        Ok(Self {
            name,
            descriptor,
            shape,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Friendly name when declared, otherwise the exit name.
    pub fn label(&self) -> &str {
        self.descriptor
            .friendly_name
            .as_deref()
            .unwrap_or(&self.name)
    }

    pub fn descriptor(&self) -> &ExitDescriptor {
        &self.descriptor
    }

    pub fn shape(&self) -> &ExampleShape {
        &self.shape
    }

    pub fn is_void(&self) -> bool {
        self.descriptor.void
    }
}
