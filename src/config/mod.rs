mod hook;
mod templates;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::Language;

pub use hook::{Hook, SYSTEM_LANGUAGE};

/// File name the hook runner looks for at the project root.
pub const CONFIG_FILE_NAME: &str = ".pre-commit-config.yaml";

/// Repo name for hooks defined inline rather than fetched from a remote.
pub const LOCAL_REPO: &str = "local";

/// Top-level hook runner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub repos: Vec<Repo>,
    /// Stop running hooks after the first failure. Defaults to `true`.
    #[serde(default = "default_true")]
    pub fail_fast: bool,
}

/// A named group of hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub repo: String,
    /// Revision to check out; only meaningful for remote repos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    pub hooks: Vec<Hook>,
}

/// Errors that can occur when rendering, parsing, or writing a config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to render config: {0}")]
    Render(#[source] serde_yaml::Error),
    #[error("invalid config YAML: {0}")]
    Parse(#[source] serde_yaml::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn default_true() -> bool {
    true
}

impl Document {
    /// The built-in template for `language`.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Python => templates::python(),
            Language::Rust => templates::rust(),
            Language::Go => templates::go(),
        }
    }

    /// A fail-fast document with all `hooks` in a single `local` repo.
    pub fn local(hooks: Vec<Hook>) -> Self {
        Document {
            repos: vec![Repo {
                repo: LOCAL_REPO.to_string(),
                rev: None,
                hooks,
            }],
            fail_fast: true,
        }
    }

    /// Every hook across all repos, in document order.
    pub fn hooks(&self) -> impl Iterator<Item = &Hook> {
        self.repos.iter().flat_map(|r| r.hooks.iter())
    }

    /// Render to YAML text.
    pub fn render(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(ConfigError::Render)
    }

    /// Parse YAML text produced by [`Document::render`] (or written by hand).
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Render and write to `path`, creating or truncating the file.
    ///
    /// A failed write may leave a partial file behind.
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let rendered = self.render()?;
        std::fs::write(path, rendered).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
