use std::borrow::Cow;
use std::path::Path;

use cardsmith_core::{LoadError, LoadStats, VocabEntry};
use encoding_rs::Encoding;

/// Encodings tried in order when none is configured
pub const DEFAULT_ENCODINGS: &[&str] = &["gb18030", "gbk", "gb2312", "utf-8"];

const COMMENT_MARKER: &str = "/*";
const MIN_FIELDS: usize = 4;

/// Why a row of the frequency list was not turned into an entry
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error("expected at least 4 fields, found {0}")]
    TooFewFields(usize),

    #[error("empty character field")]
    EmptyCharacter,

    #[error("character field starts with a replacement character")]
    Mojibake,

    #[error("invalid rank: {0:?}")]
    InvalidRank(String),

    #[error("invalid frequency: {0:?}")]
    InvalidFrequency(String),

    #[error("invalid cumulative frequency: {0:?}")]
    InvalidCumulativeFrequency(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the decoded text
    pub line: usize,
    pub reason: SkipReason,
}

/// Parsed character frequency list
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    pub entries: Vec<VocabEntry>,
    /// Encoding that decoded the whole resource
    pub encoding: &'static Encoding,
    pub stats: LoadStats,
    pub skipped: Vec<SkippedRow>,
}

impl FrequencyTable {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Loader for tab-separated `rank  character  frequency  cumulative  [pinyin  [english]]` lists
pub struct FrequencyLoader {
    encodings: Vec<&'static Encoding>,
}

impl FrequencyLoader {
    /// Loader trying the GB family first, then UTF-8
    pub fn new() -> Self {
        Self::with_encodings(DEFAULT_ENCODINGS)
    }

    /// Loader with an explicit priority list of encoding labels
    pub fn with_encodings<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut encodings: Vec<&'static Encoding> = Vec::new();

        for label in labels {
            match Encoding::for_label(label.as_ref().trim().as_bytes()) {
                // gb2312 resolves to GBK, no point decoding twice
                Some(encoding) if encodings.contains(&encoding) => {}
                Some(encoding) => encodings.push(encoding),
                None => tracing::warn!("Unknown encoding label: {}", label.as_ref()),
            }
        }

        Self { encodings }
    }

    /// Names of the encodings this loader tries, in order
    pub fn encoding_names(&self) -> Vec<String> {
        self.encodings.iter().map(|e| e.name().to_string()).collect()
    }

    /// Read and parse a frequency list from disk
    pub fn load_from_file(&self, path: &Path) -> Result<FrequencyTable, LoadError> {
        tracing::info!("Loading frequency list from: {}", path.display());
        let bytes = std::fs::read(path)?;

        let table = self
            .load_bytes(&bytes)
            .ok_or_else(|| LoadError::UnreadableResource {
                path: path.to_path_buf(),
                tried: self.encoding_names(),
            })?;

        tracing::info!(
            "Parsed {} characters from {} ({})",
            table.stats.parsed,
            path.display(),
            table.encoding_name()
        );
        tracing::info!("Characters missing pinyin: {}", table.stats.missing_pronunciation);
        tracing::info!("Characters missing English definition: {}", table.stats.missing_gloss);
        if table.stats.skipped > 0 {
            tracing::warn!("Skipped {} malformed rows", table.stats.skipped);
        }

        Ok(table)
    }

    /// Decode and parse an in-memory resource, `None` if no encoding fits
    pub fn load_bytes(&self, bytes: &[u8]) -> Option<FrequencyTable> {
        let (text, encoding) = self.decode(bytes)?;
        Some(parse_table(&text, encoding))
    }

    /// First encoding that decodes every byte without replacement
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<(Cow<'a, str>, &'static Encoding)> {
        self.encodings.iter().find_map(|&encoding| {
            match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
                Some(text) => Some((text, encoding)),
                None => {
                    tracing::debug!("Frequency list is not valid {}", encoding.name());
                    None
                }
            }
        })
    }
}

impl Default for FrequencyLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse already decoded text, keeping valid rows in file order
pub fn parse_table(text: &str, encoding: &'static Encoding) -> FrequencyTable {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    let mut stats = LoadStats::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        match parse_row(line) {
            Ok(entry) => {
                stats.record(&entry);
                entries.push(entry);
            }
            Err(reason) => {
                tracing::debug!("Skipping line {}: {}", index + 1, reason);
                stats.skipped += 1;
                skipped.push(SkippedRow {
                    line: index + 1,
                    reason,
                });
            }
        }
    }

    FrequencyTable {
        entries,
        encoding,
        stats,
        skipped,
    }
}

/// Parse a single data row
pub fn parse_row(line: &str) -> Result<VocabEntry, SkipReason> {
    let parts: Vec<&str> = line.trim().split('\t').collect();
    if parts.len() < MIN_FIELDS {
        return Err(SkipReason::TooFewFields(parts.len()));
    }

    let character = parts[1].trim();
    if character.is_empty() {
        return Err(SkipReason::EmptyCharacter);
    }
    if character.starts_with(char::REPLACEMENT_CHARACTER) {
        return Err(SkipReason::Mojibake);
    }

    let rank = parts[0]
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|rank| *rank > 0)
        .ok_or_else(|| SkipReason::InvalidRank(parts[0].to_string()))?;

    let frequency = parts[2]
        .trim()
        .parse::<u64>()
        .map_err(|_| SkipReason::InvalidFrequency(parts[2].to_string()))?;

    let cumulative_frequency = parts[3]
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| (0.0..=100.0).contains(value))
        .ok_or_else(|| SkipReason::InvalidCumulativeFrequency(parts[3].to_string()))?;

    Ok(VocabEntry {
        rank,
        character: character.to_string(),
        frequency,
        cumulative_frequency,
        pronunciation: optional_field(&parts, 4),
        gloss: optional_field(&parts, 5),
        examples: Vec::new(),
    })
}

fn optional_field(parts: &[&str], index: usize) -> String {
    parts
        .get(index)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
