pub mod language;
pub mod path;
pub mod stage;

pub use language::{Language, UnsupportedLanguage};
pub use path::NormalizedPath;
pub use stage::Stage;
