//! Recursive coercion of actual values into example shapes.
//!
//! The shape decides the target type; the actual value's own type only picks
//! the fallback. Primitive mismatches always resolve:
//!
//! | Shape | Absent / `null` | Mismatch |
//! |---|---|---|
//! | string | `""` | numbers and booleans as text, composites as JSON text |
//! | number | `0` | numeric strings parsed, booleans as `1`/`0`, anything else `0` |
//! | boolean | `false` | `"true"`/`"false"` parsed, other strings `false`, numbers by non-zero, composites `true` |
//! | dictionary | base dictionary | base dictionary |
//! | sequence | `[]` | `[]` |
//!
//! Dictionaries keep only declared keys, in declared order. Sequence
//! elements that the element shape does not [accept](ExampleShape::accepts)
//! are dropped.

use serde_json::{Map, Value};
use tracing::trace;

use crate::config::CoercionConfig;
use crate::error::{CoercionError, Path, Segment};
use crate::number::{format_number, number_value, parse_numeric};
use crate::shape::ExampleShape;

/// Coerces actual values with a fixed [`CoercionConfig`].
///
/// Stateless apart from its settings; share one across threads freely.
///
/// # Examples
///
/// ```
/// use exit_coerce_core::{Coercer, CoercionConfig, ExampleShape};
/// use serde_json::json;
///
/// let coercer = Coercer::new(CoercionConfig::default());
/// let shape = ExampleShape::from_example(&json!({"votes": 123, "title": "scott"})).unwrap();
///
/// let result = coercer
///     .coerce(&shape, Some(&json!({"title": "thing", "votes": null, "extra": true})))
///     .unwrap();
/// assert_eq!(result, json!({"votes": 0, "title": "thing"}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Coercer {
    config: CoercionConfig,
}

impl Coercer {
    pub fn new(config: CoercionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoercionConfig {
        &self.config
    }

    /// Coerces `actual` into `shape`. `None` stands for an absent value.
    ///
    /// An absent actual under [`ExampleShape::Any`] comes back as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`CoercionError::TooDeep`] when coercion would descend past
    /// [`CoercionConfig::max_depth`].
    pub fn coerce(
        &self,
        shape: &ExampleShape,
        actual: Option<&Value>,
    ) -> Result<Value, CoercionError> {
        let mut path = Path::root();
        Ok(self
            .coerce_at(shape, actual, &mut path)?
            .unwrap_or(Value::Null))
    }

    /// Reads `example` as a shape, then coerces `actual` into it.
    ///
    /// # Errors
    ///
    /// Returns [`Shape`](crate::Error::Shape) for a malformed example and
    /// [`Coercion`](crate::Error::Coercion) when coercion fails.
    pub fn coerce_example(&self, example: &Value, actual: Option<&Value>) -> crate::Result<Value> {
        let shape = ExampleShape::from_example(example)?;
        Ok(self.coerce(&shape, actual)?)
    }

    fn coerce_at(
        &self,
        shape: &ExampleShape,
        actual: Option<&Value>,
        path: &mut Path,
    ) -> Result<Option<Value>, CoercionError> {
        let value = match shape {
            ExampleShape::Any => return Ok(actual.cloned()),
            ExampleShape::Str => string_value(actual),
            ExampleShape::Num => self.number(actual, path),
            ExampleShape::Bool => bool_value(actual),
            ExampleShape::Dict(fields) => match actual {
                Some(object @ Value::Object(members)) => {
                    self.check_depth(shape, object, path)?;
                    let mut out = Map::with_capacity(fields.len());
                    for (key, member) in fields {
                        path.push(Segment::Key(key.clone()));
                        let coerced = self.coerce_at(member, members.get(key), path)?;
                        path.pop();
                        if let Some(value) = coerced {
                            out.insert(key.clone(), value);
                        }
                    }
                    Value::Object(out)
                }
                _ => shape.base_value(),
            },
            ExampleShape::List(element) => match actual {
                Some(Value::Array(items)) if element.is_any() => Value::Array(items.clone()),
                Some(array @ Value::Array(items)) => {
                    self.check_depth(shape, array, path)?;
                    let mut out = Vec::with_capacity(items.len());
                    for (idx, item) in items.iter().enumerate() {
                        if !element.accepts(item, self.config.trim_numeric_strings) {
                            trace!(
                                path = %path,
                                index = idx,
                                expected = %element,
                                "dropping incompatible sequence element"
                            );
                            continue;
                        }
                        path.push(Segment::Index(idx));
                        let coerced = self.coerce_at(element, Some(item), path)?;
                        path.pop();
                        out.extend(coerced);
                    }
                    Value::Array(out)
                }
                _ => Value::Array(Vec::new()),
            },
        };
        Ok(Some(value))
    }

    fn check_depth(
        &self,
        shape: &ExampleShape,
        actual: &Value,
        path: &Path,
    ) -> Result<(), CoercionError> {
        if path.depth() >= self.config.max_depth {
            return Err(CoercionError::TooDeep {
                path: path.clone(),
                max_depth: self.config.max_depth,
                example: shape.to_string(),
                actual: actual.clone(),
            });
        }
        Ok(())
    }

    fn number(&self, actual: Option<&Value>, path: &Path) -> Value {
        match actual {
            None | Some(Value::Null) => Value::from(0),
            Some(Value::Number(n)) => Value::Number(n.clone()),
            Some(Value::Bool(b)) => Value::from(u8::from(*b)),
            Some(Value::String(text)) => {
                match parse_numeric(text, self.config.trim_numeric_strings) {
                    Some(parsed) => number_value(parsed),
                    None => {
                        trace!(path = %path, actual = %text, "non-numeric string coerced to 0");
                        Value::from(0)
                    }
                }
            }
            Some(other) => {
                trace!(path = %path, actual = %other, "composite value coerced to 0");
                Value::from(0)
            }
        }
    }
}

fn string_value(actual: Option<&Value>) -> Value {
    Value::String(match actual {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(n)) => format_number(n),
        Some(Value::Bool(b)) => b.to_string(),
        Some(composite) => composite.to_string(),
    })
}

fn bool_value(actual: Option<&Value>) -> Value {
    Value::Bool(match actual {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(text)) => text == "true",
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::Array(_) | Value::Object(_)) => true,
    })
}

/// Coerces `actual` into the shape of `example` with default settings.
///
/// # Errors
///
/// Returns [`Shape`](crate::Error::Shape) for a malformed example and
/// [`Coercion`](crate::Error::Coercion) when coercion fails.
///
/// # Examples
///
/// ```
/// use exit_coerce_core::coerce;
/// use serde_json::json;
///
/// assert_eq!(coerce(&json!(4), Some(&json!("100"))).unwrap(), json!(100));
/// assert_eq!(coerce(&json!({}), Some(&json!(0))).unwrap(), json!({}));
/// assert_eq!(coerce(&json!([true]), Some(&json!(0))).unwrap(), json!([]));
/// assert_eq!(coerce(&json!([]), None).unwrap(), json!([]));
/// ```
pub fn coerce(example: &Value, actual: Option<&Value>) -> crate::Result<Value> {
    Coercer::default().coerce_example(example, actual)
}
