pub mod cloze;

pub use cloze::{clean_cloze, translation_prompt};
