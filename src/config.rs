//! Tree Configuration
//!
//! Settings that shape prediction: the label reported when a walk leaves
//! the tree, and whether batch prediction runs on the rayon pool.
use crate::constants::UNKNOWN_LABEL;
use crate::errors::TreeError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_unknown_label() -> String {
    UNKNOWN_LABEL.to_string()
}
fn default_parallel() -> bool {
    true
}

/// Configuration for a [`Tree`](crate::tree::Tree).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Label returned when the walk falls off the tree.
    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,
    /// Whether batch prediction runs in parallel.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            unknown_label: default_unknown_label(),
            parallel: default_parallel(),
        }
    }
}

impl TreeConfig {
    /// Set the label returned when prediction leaves the tree.
    pub fn set_unknown_label<S: Into<String>>(mut self, unknown_label: S) -> Self {
        self.unknown_label = unknown_label.into();
        self
    }

    /// Set whether batch prediction runs in parallel.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save a configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), TreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Dump a configuration as a json object
    fn json_dump(&self) -> Result<String, TreeError> {
        serde_json::to_string(self).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from a json string
    fn from_json(json_str: &str) -> Result<Self, TreeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| TreeError::UnableToRead(e.to_string()))
    }

    /// Load a configuration from a path to a json object.
    ///
    /// * `path` - Path to load the configuration from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let json_str = fs::read_to_string(path).map_err(|e| TreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for TreeConfig {}
