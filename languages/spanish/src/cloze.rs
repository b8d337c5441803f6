use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<]+?>").unwrap());

/// Decorations used by the conjugation deck's card layout
static DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[{}⇠↧→…〰⊙↬↫()]").unwrap());

const CLOZE_SEPARATOR: &str = "::";

/// Turn a cloze prompt field into a plain sentence.
///
/// `Yo {{c1::era::ser}} feliz<br>` becomes `Yo era feliz`: markup and
/// decoration go away and each cloze keeps only its answer.
pub fn clean_cloze(field: &str) -> String {
    let text: String = field.nfc().collect();
    let text = text.replace('\n', "");
    let text = HTML_TAG.replace_all(&text, "");
    let text = DECORATION.replace_all(&text, "");

    text.split_whitespace()
        .map(|part| {
            if part.contains(CLOZE_SEPARATOR) {
                part.split(CLOZE_SEPARATOR).nth(1).unwrap_or_default()
            } else {
                part
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Completion-style prompt; the reply's first line is the translation
pub fn translation_prompt(sentence: &str) -> String {
    format!("Spanish Sentence: {sentence}\nEnglish Translation:")
}
