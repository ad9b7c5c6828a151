//! Example-derived shapes.
//!
//! An example literal is read once into an [`ExampleShape`]; coercion then
//! matches on the shape instead of inspecting the literal again.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{Path, Segment, ShapeError};
use crate::number::parse_numeric;

/// Sentinel element of an array example meaning "any element, unchanged".
pub const ANY_ELEMENT: &str = "*";

/// Shape implied by an example literal.
///
/// # Examples
///
/// ```
/// use exit_coerce_core::ExampleShape;
/// use serde_json::json;
///
/// let shape = ExampleShape::from_example(&json!({"foo": ["stuff"], "bar": {"baz": 12412}})).unwrap();
/// assert_eq!(shape.base_value(), json!({"foo": [], "bar": {"baz": 0}}));
/// assert_eq!(shape.to_string(), "{foo: [string], bar: {baz: number}}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleShape {
    /// String example.
    Str,
    /// Number example.
    Num,
    /// Boolean example.
    Bool,
    /// Dictionary example; members keep the example's key order.
    Dict(Vec<(String, ExampleShape)>),
    /// Array example with its element shape.
    List(Box<ExampleShape>),
    /// No declared shape.
    Any,
}

impl ExampleShape {
    /// Reads the shape of an example literal.
    ///
    /// `null` means no declared shape. `[]` and `["*"]` accept any element.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::AmbiguousArray`] when an array example (at any
    /// depth) has more than one element.
    pub fn from_example(example: &Value) -> Result<Self, ShapeError> {
        let mut path = Path::root();
        Self::read(example, &mut path)
    }

    fn read(example: &Value, path: &mut Path) -> Result<Self, ShapeError> {
        Ok(match example {
            Value::Null => Self::Any,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Num,
            Value::String(_) => Self::Str,
            Value::Object(members) => {
                let mut fields = Vec::with_capacity(members.len());
                for (key, member) in members {
                    path.push(Segment::Key(key.clone()));
                    let shape = Self::read(member, path)?;
                    path.pop();
                    fields.push((key.clone(), shape));
                }
                Self::Dict(fields)
            }
            Value::Array(elements) => match elements.as_slice() {
                [] => Self::List(Box::new(Self::Any)),
                [Value::String(s)] if s == ANY_ELEMENT => Self::List(Box::new(Self::Any)),
                [element] => {
                    path.push(Segment::Index(0));
                    let shape = Self::read(element, path)?;
                    path.pop();
                    Self::List(Box::new(shape))
                }
                _ => {
                    return Err(ShapeError::AmbiguousArray {
                        path: path.clone(),
                        len: elements.len(),
                    });
                }
            },
        })
    }

    /// Canonical empty value of this shape.
    ///
    /// Dictionary members of shape [`Any`](Self::Any) are left out; a bare
    /// `Any` yields `null`.
    pub fn base_value(&self) -> Value {
        match self {
            Self::Str => Value::String(String::new()),
            Self::Num => Value::from(0),
            Self::Bool => Value::Bool(false),
            Self::Dict(fields) => Value::Object(
                fields
                    .iter()
                    .filter(|(_, shape)| !shape.is_any())
                    .map(|(key, shape)| (key.clone(), shape.base_value()))
                    .collect::<Map<String, Value>>(),
            ),
            Self::List(_) => Value::Array(Vec::new()),
            Self::Any => Value::Null,
        }
    }

    /// Whether `value` can stand as an element of a sequence of this shape.
    ///
    /// Sequence elements that fail this check are dropped during coercion
    /// instead of being forced into shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use exit_coerce_core::ExampleShape;
    /// use serde_json::json;
    ///
    /// assert!(ExampleShape::Bool.accepts(&json!("true"), true));
    /// assert!(!ExampleShape::Bool.accepts(&json!(0), true));
    /// assert!(ExampleShape::Num.accepts(&json!("4.5"), true));
    /// ```
    pub fn accepts(&self, value: &Value, trim_numeric: bool) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (Self::Str, Value::String(_) | Value::Number(_) | Value::Bool(_)) => true,
            (Self::Num, Value::Number(_)) => true,
            (Self::Num, Value::String(text)) => parse_numeric(text, trim_numeric).is_some(),
            (Self::Bool, Value::Bool(_)) => true,
            (Self::Bool, Value::String(text)) => text == "true" || text == "false",
            (Self::Dict(_), Value::Object(_)) => true,
            (Self::List(_), Value::Array(_)) => true,
            _ => false,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns `true` for dictionary and sequence shapes.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Dict(_) | Self::List(_))
    }
}

impl fmt::Display for ExampleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => f.write_str("string"),
            Self::Num => f.write_str("number"),
            Self::Bool => f.write_str("boolean"),
            Self::Any => f.write_str(ANY_ELEMENT),
            Self::List(element) => write!(f, "[{element}]"),
            Self::Dict(fields) => {
                f.write_str("{")?;
                for (idx, (key, shape)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {shape}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl TryFrom<&Value> for ExampleShape {
    type Error = ShapeError;

    fn try_from(example: &Value) -> Result<Self, Self::Error> {
        Self::from_example(example)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn shape(example: Value) -> ExampleShape {
        ExampleShape::from_example(&example).unwrap()
    }

    #[test]
    fn test_primitive_examples() {
        assert_eq!(shape(json!("foo")), ExampleShape::Str);
        assert_eq!(shape(json!("*")), ExampleShape::Str);
        assert_eq!(shape(json!(123)), ExampleShape::Num);
        assert_eq!(shape(json!(-1.5)), ExampleShape::Num);
        assert_eq!(shape(json!(false)), ExampleShape::Bool);
        assert_eq!(shape(Value::Null), ExampleShape::Any);
    }

    #[test]
    fn test_array_examples() {
        assert_eq!(shape(json!([])), ExampleShape::List(Box::new(ExampleShape::Any)));
        assert_eq!(shape(json!(["*"])), ExampleShape::List(Box::new(ExampleShape::Any)));
        assert_eq!(shape(json!([true])), ExampleShape::List(Box::new(ExampleShape::Bool)));
        assert_eq!(
            shape(json!([["x"]])),
            ExampleShape::List(Box::new(ExampleShape::List(Box::new(ExampleShape::Str))))
        );
    }

    #[test]
    fn test_dict_keeps_declared_order() {
        let shape = shape(json!({"zeta": 1, "alpha": "a", "mid": [1]}));
        let ExampleShape::Dict(fields) = shape else {
            panic!("expected dictionary shape");
        };
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_multi_element_array_is_rejected_with_path() {
        let err = ExampleShape::from_example(&json!({"tags": [{"ids": [1, 2]}]})).unwrap_err();
        let ShapeError::AmbiguousArray { path, len } = err;
        assert_eq!(len, 2);
        assert_eq!(path.to_string(), "$.tags[0].ids");
    }

    #[test]
    fn test_base_values() {
        assert_eq!(shape(json!("bar")).base_value(), json!(""));
        assert_eq!(shape(json!(12)).base_value(), json!(0));
        assert_eq!(shape(json!(true)).base_value(), json!(false));
        assert_eq!(shape(json!({})).base_value(), json!({}));
        assert_eq!(shape(json!(["*"])).base_value(), json!([]));
        assert_eq!(shape(json!({"foo": "bar"})).base_value(), json!({"foo": ""}));
        assert_eq!(
            shape(json!({"foo": ["x"], "bar": {"baz": 1}, "free": null})).base_value(),
            json!({"foo": [], "bar": {"baz": 0}})
        );
        assert_eq!(ExampleShape::Any.base_value(), Value::Null);
    }

    #[test]
    fn test_accepts_element_kinds() {
        assert!(ExampleShape::Str.accepts(&json!(1), true));
        assert!(!ExampleShape::Str.accepts(&json!(null), true));
        assert!(!ExampleShape::Str.accepts(&json!({}), true));
        assert!(ExampleShape::Num.accepts(&json!(" 7 "), true));
        assert!(!ExampleShape::Num.accepts(&json!(" 7 "), false));
        assert!(!ExampleShape::Num.accepts(&json!("seven"), true));
        assert!(!ExampleShape::Num.accepts(&json!(true), true));
        assert!(!ExampleShape::Bool.accepts(&json!("yes"), true));
        assert!(shape(json!({})).accepts(&json!({"a": 1}), true));
        assert!(!shape(json!({})).accepts(&json!([]), true));
        assert!(shape(json!([])).accepts(&json!([1]), true));
        assert!(ExampleShape::Any.accepts(&Value::Null, true));
    }

    #[test]
    fn test_display() {
        assert_eq!(shape(json!(["*"])).to_string(), "[*]");
        assert_eq!(shape(json!({"a": [1], "b": false})).to_string(), "{a: [number], b: boolean}");
    }
}
