//! Run configuration.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration:
//!
//! ```toml
//! input = "skills-data.csv"
//! json_output = "network_3d.json"
//! obj_output = "network_3d.obj"
//!
//! [layout]
//! kind = "force"
//! iterations = 100
//! spring_length = 3.0
//! repulsion_strength = 50.0
//! seed = 7
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::LayoutParams;
use crate::{Error, Result};

/// Paths and layout settings for one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub input: PathBuf,
    pub json_output: PathBuf,
    pub obj_output: PathBuf,
    pub layout: LayoutParams,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("skills-data.csv"),
            json_output: PathBuf::from("network_3d.json"),
            obj_output: PathBuf::from("network_3d.obj"),
            layout: LayoutParams::default(),
        }
    }
}

impl NetworkConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(format!("config file not found: {}", path.display())));
        }
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Resolve relative paths against `base` (typically the config file's
    /// directory).
    pub fn relative_to(mut self, base: &Path) -> Self {
        for p in [&mut self.input, &mut self.json_output, &mut self.obj_output] {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let l = &self.layout;
        if !l.spring_length.is_finite() || l.spring_length < 0.0 {
            return Err(Error::Config(format!("spring_length must be >= 0, got {}", l.spring_length)));
        }
        if !l.repulsion_strength.is_finite() {
            return Err(Error::Config("repulsion_strength must be finite".into()));
        }
        Ok(())
    }
}
