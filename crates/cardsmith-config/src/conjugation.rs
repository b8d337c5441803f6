use serde::{Deserialize, Serialize};

fn default_deck() -> String {
    "Spanish::Conjugation".to_string()
}

fn default_prompt_field() -> usize {
    1
}

fn default_english_field() -> usize {
    2
}

fn default_skip_first() -> usize {
    7
}

fn default_max_tokens() -> u32 {
    60
}

fn default_temperature() -> f32 {
    1.0
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConjugationConfig {
    #[serde(default = "default_deck")]
    pub deck: String,
    /// Position of the cloze sentence field
    #[serde(default = "default_prompt_field")]
    pub prompt_field: usize,
    /// Position of the field receiving the translation
    #[serde(default = "default_english_field")]
    pub english_field: usize,
    /// Intro cards at the start of the deck
    #[serde(default = "default_skip_first")]
    pub skip_first: usize,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for ConjugationConfig {
    fn default() -> Self {
        Self {
            deck: default_deck(),
            prompt_field: default_prompt_field(),
            english_field: default_english_field(),
            skip_first: default_skip_first(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}
