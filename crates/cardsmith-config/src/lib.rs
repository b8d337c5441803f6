use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::conjugation::ConjugationConfig;
use self::frequency::FrequencyConfig;
use self::generator::GeneratorConfig;
use self::sentences::SentenceConfig;

pub mod anki;
pub mod conjugation;
pub mod frequency;
pub mod generator;
pub mod sentences;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub anki: AnkiConfig,
    pub generator: GeneratorConfig,
    pub frequency: FrequencyConfig,
    pub sentences: SentenceConfig,
    pub conjugation: ConjugationConfig,
}

impl Config {
    /// Read a JSON config file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::warn!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Override connection settings from a key lookup (the process environment in practice)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ANKI_URL") {
            self.anki.url = url;
        }
        if let Some(deck) = lookup("ANKI_DECK") {
            self.anki.deck = deck;
        }
        if let Some(url) = lookup("OLLAMA_URL") {
            self.generator.url = url;
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            self.generator.model = model;
        }
        if let Some(path) = lookup("CHAR_FREQ_PATH") {
            self.frequency.path = PathBuf::from(path);
        }
        if let Some(limit) = lookup("CHAR_LIMIT").and_then(|v| v.parse().ok()) {
            self.frequency.limit = Some(limit);
        }
    }
}
