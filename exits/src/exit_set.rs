//! Named exits sharing one coercer.

use exit_coerce_core::{Coercer, CoercionConfig};
use serde_json::{Map, Value};
use tracing::debug;

use crate::descriptor::{Exit, ExitDescriptor};
use crate::error::{ExitError, Result};

/// Exit used when no default exit is configured.
pub const DEFAULT_EXIT: &str = "success";

/// Compiled exits of one machine, in declaration order.
///
/// # Examples
///
/// ```
/// use exit_coerce_core::CoercionConfig;
/// use exit_coerce_exits::ExitSet;
/// use serde_json::json;
///
/// let exits = ExitSet::from_json(
///     &json!({
///         "success": {"example": 4},
///         "error": {"example": "world"}
///     }),
///     CoercionConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(exits.coerce("success", Some(&json!("100"))).unwrap(), json!(100));
/// assert_eq!(exits.coerce_default(None).unwrap(), json!(0));
/// ```
#[derive(Debug, Clone)]
pub struct ExitSet {
    exits: Vec<Exit>,
    default_exit: Option<String>,
    coercer: Coercer,
}

impl ExitSet {
    /// Compiles every descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ExitError::DuplicateExit`] when a name repeats and
    /// [`ExitError::InvalidExample`] for the first malformed example.
    pub fn from_descriptors<I, S>(descriptors: I, config: CoercionConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ExitDescriptor)>,
        S: Into<String>,
    {
        let mut exits: Vec<Exit> = Vec::new();
        for (name, descriptor) in descriptors {
            let exit = Exit::compile(name, descriptor)?;
            if exits.iter().any(|e| e.name() == exit.name()) {
                return Err(ExitError::DuplicateExit(exit.name().to_string()));
            }
            exits.push(exit);
        }
        debug!(exits = exits.len(), max_depth = config.max_depth, "compiled exit set");

        Ok(Self {
            exits,
            default_exit: None,
            coercer: Coercer::new(config),
        })
    }

    /// Compiles the `exits` object of a machine declaration.
    ///
    /// # Errors
    ///
    /// Returns [`ExitError::Json`] when `exits` is not an object of
    /// descriptors, plus everything [`from_descriptors`](Self::from_descriptors)
    /// returns.
    pub fn from_json(exits: &Value, config: CoercionConfig) -> Result<Self> {
        let members: Map<String, Value> = serde_json::from_value(exits.clone())?;
        let descriptors = members
            .into_iter()
            .map(|(name, desc)| Ok((name, serde_json::from_value::<ExitDescriptor>(desc)?)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_descriptors(descriptors, config)
    }

    /// Names the exit [`coerce_default`](Self::coerce_default) uses.
    pub fn with_default_exit(mut self, name: &str) -> Self {
        self.default_exit = Some(name.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.name() == name)
    }

    /// Exit names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.exits.iter().map(Exit::name)
    }

    pub fn len(&self) -> usize {
        self.exits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exits.is_empty()
    }

    /// The configured default exit, falling back to [`DEFAULT_EXIT`].
    pub fn default_exit(&self) -> Option<&Exit> {
        self.get(self.default_exit_name())
    }

    fn default_exit_name(&self) -> &str {
        self.default_exit.as_deref().unwrap_or(DEFAULT_EXIT)
    }

    /// Coerces `actual` into the shape declared by exit `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ExitError::UnknownExit`] for an undeclared exit and
    /// [`ExitError::Coercion`] when coercion fails.
    pub fn coerce(&self, name: &str, actual: Option<&Value>) -> Result<Value> {
        let Some(exit) = self.get(name) else {
            debug!(exit = name, "unknown exit requested");
            return Err(ExitError::UnknownExit(name.to_string()));
        };
        self.coerce_exit(exit, actual)
    }

    /// Coerces `actual` through the [default exit](Self::default_exit).
    ///
    /// # Errors
    ///
    /// Returns [`ExitError::NoDefaultExit`] when the default exit is not
    /// declared and [`ExitError::Coercion`] when coercion fails.
    pub fn coerce_default(&self, actual: Option<&Value>) -> Result<Value> {
        let exit = self
            .default_exit()
            .ok_or_else(|| ExitError::NoDefaultExit(self.default_exit_name().to_string()))?;
        self.coerce_exit(exit, actual)
    }

    fn coerce_exit(&self, exit: &Exit, actual: Option<&Value>) -> Result<Value> {
        self.coercer
            .coerce(exit.shape(), actual)
            .map_err(|source| ExitError::Coercion {
                exit: exit.name().to_string(),
                source,
            })
    }
}
