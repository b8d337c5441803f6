pub mod error;
pub mod language;
pub mod preprocess;
pub mod types;

pub use error::LoadError;
pub use language::{ScriptConverter, Transcriber};
pub use types::{ExampleLine, LoadStats, VocabEntry};
