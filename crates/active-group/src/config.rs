#![forbid(unsafe_code)]

//! Group options loaded from TOML.
//!
//! ```toml
//! no_nesting = true
//! default_active = 1
//! custom_styles = "display: flex;"
//! custom_component_styles = "padding: 0 1;"
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface early.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::props::GroupProps;

/// Errors from loading [`GroupOptions`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read group options from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid group options: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Serializable subset of [`GroupProps`]: everything except the children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupOptions {
    pub no_nesting: bool,
    pub default_active: Option<usize>,
    pub custom_styles: Option<String>,
    pub custom_component_styles: Option<String>,
}

impl GroupOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

impl GroupProps {
    /// Apply loaded options. Children are left as they are.
    #[must_use]
    pub fn with_options(mut self, options: GroupOptions) -> Self {
        self.no_nesting = options.no_nesting;
        self.default_active = options.default_active;
        self.custom_styles = options.custom_styles;
        self.custom_component_styles = options.custom_component_styles;
        self
    }

    /// Extract the option subset of these props.
    #[must_use]
    pub fn options(&self) -> GroupOptions {
        GroupOptions {
            no_nesting: self.no_nesting,
            default_active: self.default_active,
            custom_styles: self.custom_styles.clone(),
            custom_component_styles: self.custom_component_styles.clone(),
        }
    }
}
