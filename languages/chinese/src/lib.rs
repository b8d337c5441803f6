pub mod convert;
pub mod examples;
pub mod frequency;
pub mod prompt;
pub mod transcribe;

pub use convert::ZhConverter;
pub use examples::{ExampleValidator, Rejection};
pub use frequency::{FrequencyLoader, FrequencyTable, SkipReason, SkippedRow};
pub use transcribe::PinyinTranscriber;
