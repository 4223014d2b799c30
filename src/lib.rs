pub mod config;
pub mod domain;
pub mod guard;
pub mod logging;
pub mod root;

pub(crate) mod cli;

pub use cli::generate::{generate, run, GenerateError, GenerateOptions, Outcome};
