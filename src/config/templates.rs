//! Built-in hook templates, one per supported language.
//!
//! Test runners attach to both `commit` and `push` and always run with the
//! file list suppressed. Formatters and linters attach to `commit` only and
//! are filtered by file type.

use super::{Document, Hook};
use crate::domain::Stage;

const COMMIT: &[Stage] = &[Stage::Commit];
const COMMIT_AND_PUSH: &[Stage] = &[Stage::Commit, Stage::Push];

pub(super) fn python() -> Document {
    Document::local(vec![
        Hook::system("pytest", "pytest -n auto --quiet")
            .always_run()
            .verbose()
            .no_filenames()
            .stages(COMMIT_AND_PUSH),
        Hook::system("black", "black --check")
            .types(&["python"])
            .files(r"\.pyi?$")
            .stages(COMMIT),
        Hook::system("flake8", "flake8")
            .types(&["python"])
            .stages(COMMIT),
    ])
}

pub(super) fn rust() -> Document {
    Document::local(vec![
        Hook::system("cargo-test", "cargo test")
            .named("cargo test")
            .always_run()
            .verbose()
            .no_filenames()
            .stages(COMMIT_AND_PUSH),
        Hook::system("cargo-fmt", "cargo fmt --all -- --check")
            .named("cargo fmt")
            .types(&["rust"])
            .no_filenames()
            .stages(COMMIT),
        Hook::system("cargo-clippy", "cargo clippy")
            .named("cargo clippy")
            .args(&["--all-targets", "--", "-D", "warnings"])
            .types(&["rust"])
            .no_filenames()
            .stages(COMMIT),
    ])
}

pub(super) fn go() -> Document {
    Document::local(vec![
        Hook::system("go-test", "go test ./...")
            .named("go test")
            .always_run()
            .verbose()
            .no_filenames()
            .stages(COMMIT_AND_PUSH),
        Hook::system("gofmt", "gofmt -l -w")
            .types(&["go"])
            .stages(COMMIT),
        Hook::system("go-vet", "go vet ./...")
            .named("go vet")
            .types(&["go"])
            .no_filenames()
            .stages(COMMIT),
    ])
}
