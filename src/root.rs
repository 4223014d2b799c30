use std::path::{Path, PathBuf};

use crate::domain::NormalizedPath;

/// Entry whose presence marks a project root.
///
/// Usually a directory; worktrees and submodules use a `.git` file instead.
pub const MARKER: &str = ".git";

/// Error from locating the project root.
#[derive(Debug, thiserror::Error)]
pub enum RootError {
    #[error("cannot get current working directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("could not find a .git directory in {} or any parent", .0.display())]
    NotFound(PathBuf),
}

/// Walk from `start` up to the filesystem root and return the first
/// directory containing [`MARKER`].
///
/// `start` is normalized first so every step strictly shortens the path.
/// A relative `start` is resolved against the current working directory.
pub fn find_project_root(start: &Path) -> Result<PathBuf, RootError> {
    let base = if start.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().map_err(RootError::CurrentDir)?
    };

    let start_dir = NormalizedPath::new(start, &base);
    // One probe per component, plus the root itself.
    let max_steps = start_dir.as_path().components().count() + 1;

    let mut dir = Some(start_dir);
    for _ in 0..max_steps {
        let Some(current) = dir else { break };
        let candidate = current.as_path().join(MARKER);
        tracing::trace!(path = %candidate.display(), "probing for marker");
        if candidate.exists() {
            tracing::debug!(root = %current.as_path().display(), "found project root");
            return Ok(current.into_path_buf());
        }
        dir = current.parent();
    }

    Err(RootError::NotFound(start.to_path_buf()))
}
