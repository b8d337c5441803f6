use cardsmith_core::{ExampleLine, Transcriber};

/// Examples kept per character
pub const MAX_EXAMPLES: usize = 3;

/// Longest accepted example word, in characters
pub const MAX_SURFACE_CHARS: usize = 8;

const MIN_LINE_CHARS: usize = 4;

/// Why a candidate line of model output was dropped
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("line shorter than 4 characters")]
    TooShort,

    #[error("no opening parenthesis")]
    MissingParenthesis,

    #[error("no hyphen before a definition")]
    MissingHyphen,

    #[error("word does not contain the target character")]
    MissingTarget,

    #[error("word has {0} characters, expected 2 to 8")]
    BadLength(usize),

    #[error("word has no pinyin")]
    NoPronunciation,

    #[error("example already collected")]
    Duplicate,
}

/// Filters free-form model output down to well-formed `word (pinyin) - gloss` examples.
///
/// The pinyin written by the model is ignored and regenerated from the word,
/// so only the word and the gloss are taken from the raw line.
pub struct ExampleValidator<T> {
    transcriber: T,
    max_examples: usize,
}

impl<T: Transcriber> ExampleValidator<T> {
    pub fn new(transcriber: T) -> Self {
        Self {
            transcriber,
            max_examples: MAX_EXAMPLES,
        }
    }

    /// Lower the example limit; values above [`MAX_EXAMPLES`] are clamped
    pub fn with_max_examples(mut self, max_examples: usize) -> Self {
        self.max_examples = max_examples.min(MAX_EXAMPLES);
        self
    }

    /// Up to three accepted examples for `target`, in the order they appear
    pub fn validate(&self, raw: &str, target: &str) -> Vec<ExampleLine> {
        let mut accepted = Vec::new();

        for line in raw.lines() {
            if accepted.len() >= self.max_examples {
                break;
            }
            if let Ok(example) = self.evaluate(line, target, &accepted) {
                accepted.push(example);
            }
        }

        accepted
    }

    /// Every line of `raw` with its outcome, without the example limit
    pub fn candidates<'a>(
        &self,
        raw: &'a str,
        target: &str,
    ) -> Vec<(&'a str, Result<ExampleLine, Rejection>)> {
        let mut accepted = Vec::new();
        let mut outcomes = Vec::new();

        for line in raw.lines() {
            let outcome = self.evaluate(line, target, &accepted);
            if let Ok(example) = &outcome {
                accepted.push(example.clone());
            }
            outcomes.push((line, outcome));
        }

        outcomes
    }

    fn evaluate(
        &self,
        line: &str,
        target: &str,
        accepted: &[ExampleLine],
    ) -> Result<ExampleLine, Rejection> {
        let example = self.parse_line(line, target)?;
        if accepted.contains(&example) {
            return Err(Rejection::Duplicate);
        }
        Ok(example)
    }

    /// Check one line on its own, ignoring duplicates
    pub fn parse_line(&self, line: &str, target: &str) -> Result<ExampleLine, Rejection> {
        let line = line.trim();
        if line.chars().count() < MIN_LINE_CHARS {
            return Err(Rejection::TooShort);
        }

        let (word, _) = line.split_once('(').ok_or(Rejection::MissingParenthesis)?;
        let surface = strip_quotes(word);

        let (_, gloss) = line.split_once('-').ok_or(Rejection::MissingHyphen)?;
        let gloss = gloss.trim();

        if !surface.contains(target) {
            return Err(Rejection::MissingTarget);
        }

        let length = surface.chars().count();
        if length <= 1 || length > MAX_SURFACE_CHARS {
            return Err(Rejection::BadLength(length));
        }

        let pronunciation = self.transcriber.pronounce(surface);
        if pronunciation.is_empty() {
            return Err(Rejection::NoPronunciation);
        }

        Ok(ExampleLine {
            surface: surface.to_string(),
            pronunciation,
            gloss: gloss.to_string(),
        })
    }
}

/// Strip surrounding whitespace and quotes: `'好人'` and `"好人"` both give `好人`
fn strip_quotes(word: &str) -> &str {
    word.trim()
        .trim_matches('\'')
        .trim()
        .trim_matches('"')
        .trim()
}
