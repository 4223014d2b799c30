use std::path::{Component, Path, PathBuf};

/// A lexically normalized directory path.
///
/// Relative paths are resolved against a base directory, then `.` and `..`
/// components are collapsed logically (no filesystem access, symlinks are
/// not followed). `..` at the root stays at the root.
///
/// Because every `..` is folded away, [`NormalizedPath::parent`] strictly
/// shortens the path and reaches `None` at the filesystem root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath(pub(crate) PathBuf);

impl NormalizedPath {
    /// Normalize `raw` against `base`.
    pub fn new(raw: &Path, base: &Path) -> Self {
        let joined = if raw.is_absolute() {
            raw.to_path_buf()
        } else {
            base.join(raw)
        };

        let mut out = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
                Component::CurDir => {}
                Component::ParentDir => {
                    out.pop();
                }
                Component::Normal(part) => out.push(part),
            }
        }
        NormalizedPath(out)
    }

    /// The enclosing directory, or `None` at the filesystem root.
    pub fn parent(&self) -> Option<NormalizedPath> {
        self.0.parent().map(|p| NormalizedPath(p.to_path_buf()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}
