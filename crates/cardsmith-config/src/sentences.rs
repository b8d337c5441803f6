use serde::{Deserialize, Serialize};

fn default_deck() -> String {
    "All::Mandarin::sentences".to_string()
}

fn default_max_tokens() -> u32 {
    60
}

fn default_temperature() -> f32 {
    0.8
}

/// Field positions of the subs2srs sentence note type
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SentenceFields {
    pub hanzi: usize,
    pub pinyin: usize,
    pub english: usize,
    pub target_definition: usize,
    pub unknowns: usize,
    pub unknowns_count: usize,
}

impl Default for SentenceFields {
    fn default() -> Self {
        Self {
            hanzi: 2,
            pinyin: 4,
            english: 5,
            target_definition: 10,
            unknowns: 11,
            unknowns_count: 12,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SentenceConfig {
    #[serde(default = "default_deck")]
    pub deck: String,
    #[serde(default)]
    pub fields: SentenceFields,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            deck: default_deck(),
            fields: SentenceFields::default(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}
