use std::path::{Path, PathBuf};

use crate::config::{ConfigError, Document, CONFIG_FILE_NAME};
use crate::domain::{Language, UnsupportedLanguage};
use crate::guard::Guard;
use crate::root::{self, RootError};

/// Inputs for one generation run, straight from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Language name as typed; resolved case-insensitively.
    pub lang: String,
    /// Replace an existing config file.
    pub force: bool,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written { path: PathBuf, overwritten: bool },
    /// The config already existed and `force` was not set. Not an error.
    Skipped { path: PathBuf },
}

/// Fatal errors. The binary reports them and exits non-zero.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(
        code(pre_commit_init::no_project_root),
        help("run inside a git repository, or create one with `git init`")
    )]
    Root(#[from] RootError),

    #[error(transparent)]
    #[diagnostic(
        code(pre_commit_init::unsupported_language),
        help("supported languages: {}", Language::supported_names())
    )]
    Language(#[from] UnsupportedLanguage),

    #[error(transparent)]
    #[diagnostic(code(pre_commit_init::write_failed))]
    Config(#[from] ConfigError),
}

/// Generate the config for the project enclosing `cwd`.
///
/// The existing-file check runs before the language is resolved, so a
/// present config is left alone even when the language is unknown.
pub fn generate(options: &GenerateOptions, cwd: &Path) -> Result<Outcome, GenerateError> {
    let root = root::find_project_root(cwd)?;
    let path = root.join(CONFIG_FILE_NAME);

    let guard = Guard::check(&path, options.force);
    if guard == Guard::Skip {
        tracing::info!(
            "{} already exists, skipping (use -f to overwrite)",
            path.display()
        );
        return Ok(Outcome::Skipped { path });
    }

    let language: Language = options.lang.parse()?;
    tracing::debug!(%language, root = %root.display(), "rendering template");

    Document::for_language(language).write(&path)?;

    let overwritten = guard == Guard::Overwrite;
    if overwritten {
        tracing::info!("overwrote {}", path.display());
    } else {
        tracing::info!("wrote {}", path.display());
    }
    Ok(Outcome::Written { path, overwritten })
}

/// Run [`generate`] from the process working directory.
pub fn run(options: &GenerateOptions) -> Result<Outcome, GenerateError> {
    let cwd = std::env::current_dir().map_err(RootError::CurrentDir)?;
    generate(options, &cwd)
}
