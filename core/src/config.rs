//! Coercion settings.
//!
//! # Example YAML
//!
//! ```yaml
//! max_depth: 64
//! trim_numeric_strings: true
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default nesting budget, matching `serde_json`'s own recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for a [`Coercer`](crate::Coercer).
///
/// Missing fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use exit_coerce_core::CoercionConfig;
///
/// let config: CoercionConfig = serde_yaml::from_str("max_depth: 8").unwrap();
/// assert_eq!(config.max_depth, 8);
/// assert!(config.trim_numeric_strings);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionConfig {
    /// How many dictionary/sequence levels coercion may descend.
    pub max_depth: usize,
    /// Ignore surrounding whitespace when reading numeric strings.
    pub trim_numeric_strings: bool,
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trim_numeric_strings: true,
        }
    }
}

impl CoercionConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::Error::Io) if the file cannot be read, or
    /// [`Yaml`](crate::Error::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::Error::Io) if the file cannot be written, or
    /// [`Yaml`](crate::Error::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
