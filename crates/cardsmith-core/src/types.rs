use std::fmt;

use serde::{Deserialize, Serialize};

/// One ranked row of a character frequency list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub rank: u32,
    pub character: String,
    pub frequency: u64,
    /// Cumulative frequency percentage, 0.0-100.0
    pub cumulative_frequency: f64,
    pub pronunciation: String,
    pub gloss: String,
    pub examples: Vec<ExampleLine>,
}

impl VocabEntry {
    /// Examples in canonical form, one per line (the deck's Examples field)
    pub fn examples_field(&self) -> String {
        self.examples
            .iter()
            .map(ExampleLine::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }
}

/// A validated usage example: `surface (pronunciation) - gloss`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExampleLine {
    pub surface: String,
    pub pronunciation: String,
    pub gloss: String,
}

impl fmt::Display for ExampleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.surface, self.pronunciation, self.gloss)
    }
}

/// Aggregate counts reported by the frequency loader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub parsed: usize,
    pub missing_pronunciation: usize,
    pub missing_gloss: usize,
    pub skipped: usize,
}

impl LoadStats {
    pub fn record(&mut self, entry: &VocabEntry) {
        self.parsed += 1;
        if entry.pronunciation.is_empty() {
            self.missing_pronunciation += 1;
        }
        if entry.gloss.is_empty() {
            self.missing_gloss += 1;
        }
    }
}
