use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3:8b-instruct-q4_0".to_string()
}

fn default_max_tokens() -> u32 {
    200
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Ollama base URL
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Overrides the built-in system prompt when non-empty
    #[serde(default)]
    pub system_prompt: String,
    /// Sampling for example generation
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_model(),
            system_prompt: String::new(),
            max_tokens: default_max_tokens(),
            temperature: 0.0,
        }
    }
}
