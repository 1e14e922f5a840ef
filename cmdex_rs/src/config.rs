//! File-backed example lists.
//!
//! Examples can be kept next to a program instead of in code:
//!
//! ```toml
//! [[example]]
//! args = "init"
//! description = "Initialise app data."
//!
//! [[example]]
//! command = "version"
//! args = "--json"
//! description = "Print version details as JSON."
//! ```
//!
//! JSON files use the same entries under an `examples` array.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::app::App;
use crate::error::ConfigError;

/// Parsed examples file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ExamplesFile {
    #[serde(alias = "examples")]
    pub example: Vec<ExampleEntry>,
}

/// One example and the command it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleEntry {
    /// Command path; empty for the program itself.
    #[serde(default)]
    pub command: String,
    pub args: String,
    pub description: String,
}

impl ExamplesFile {
    /// Load from `path`, choosing the format by extension.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let is_toml = match extension.as_deref() {
            Some("toml") => true,
            Some("json") => false,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };
        debug!(
            path = %path.display(),
            entries = file.example.len(),
            "loaded examples file"
        );
        Ok(file)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Register every entry on `app`, in file order.
    pub fn apply(&self, app: &mut App) {
        for entry in &self.example {
            app.command(&entry.command)
                .example(entry.args.clone(), entry.description.clone());
        }
    }

    /// Build a new registry for `context` holding this file's examples.
    pub fn into_app(self, context: impl Into<String>) -> App {
        let mut app = App::new(context);
        self.apply(&mut app);
        app
    }
}
