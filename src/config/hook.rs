use serde::{Deserialize, Serialize};

use crate::domain::Stage;

/// Execution environment tag for hooks that run a command already on `$PATH`.
pub const SYSTEM_LANGUAGE: &str = "system";

/// One command the hook runner executes.
///
/// Optional fields are left out of the rendered YAML when unset, so the hook
/// runner applies its own defaults for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub id: String,
    pub name: String,
    /// Shell command to execute.
    pub entry: String,
    pub language: String,
    /// Extra arguments appended to `entry`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_filenames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<Stage>>,
    /// File-type filters (`identify` tags such as `python`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Path regex filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
}

impl Hook {
    /// A `system` hook whose display name equals its id.
    pub fn system(id: &str, entry: &str) -> Self {
        Hook {
            id: id.to_string(),
            name: id.to_string(),
            entry: entry.to_string(),
            language: SYSTEM_LANGUAGE.to_string(),
            args: None,
            always_run: None,
            verbose: None,
            pass_filenames: None,
            stages: None,
            types: None,
            files: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args = Some(to_strings(args));
        self
    }

    /// Run even when no staged file matches the filters.
    pub fn always_run(mut self) -> Self {
        self.always_run = Some(true);
        self
    }

    pub fn verbose(mut self) -> Self {
        self.verbose = Some(true);
        self
    }

    /// Do not append the changed file paths to the command line.
    pub fn no_filenames(mut self) -> Self {
        self.pass_filenames = Some(false);
        self
    }

    pub fn stages(mut self, stages: &[Stage]) -> Self {
        self.stages = Some(stages.to_vec());
        self
    }

    pub fn types(mut self, types: &[&str]) -> Self {
        self.types = Some(to_strings(types));
        self
    }

    pub fn files(mut self, pattern: &str) -> Self {
        self.files = Some(pattern.to_string());
        self
    }

    /// Whether this hook is attached to `stage`.
    #[cfg(test)]
    pub fn runs_at(&self, stage: Stage) -> bool {
        self.stages
            .as_deref()
            .is_some_and(|stages| stages.contains(&stage))
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
