use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:8765".to_string()
}

fn default_deck() -> String {
    "Chinese Characters".to_string()
}

fn default_model() -> String {
    "Chinese Character Model".to_string()
}

fn default_tags() -> Vec<String> {
    vec!["cardsmith".to_string()]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnkiConfig {
    /// AnkiConnect URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Deck the character cards are added to
    #[serde(default = "default_deck")]
    pub deck: String,
    /// Note type created for character cards
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            deck: default_deck(),
            model: default_model(),
            tags: default_tags(),
        }
    }
}
