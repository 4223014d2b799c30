use std::path::Path;

/// What to do with the output path.
///
/// The check is advisory: nothing stops another process from creating the
/// file between the check and the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Nothing there yet.
    Create,
    /// A file exists and `force` was given.
    Overwrite,
    /// A file exists and `force` was not given.
    Skip,
}

impl Guard {
    pub fn check(path: &Path, force: bool) -> Self {
        match (path.exists(), force) {
            (false, _) => Guard::Create,
            (true, true) => Guard::Overwrite,
            (true, false) => Guard::Skip,
        }
    }
}
