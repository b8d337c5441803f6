use cardsmith_core::Transcriber;
use pinyin::ToPinyin;

/// Tone-marked pinyin, one syllable per Han character.
///
/// Runs of other non-whitespace characters are passed through as a single
/// group so that mixed text such as `T恤` still transcribes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinTranscriber;

impl Transcriber for PinyinTranscriber {
    fn transcribe(&self, text: &str) -> Vec<String> {
        let mut groups = Vec::new();
        let mut passthrough = String::new();

        for ch in text.chars() {
            if let Some(syllable) = ch.to_pinyin() {
                flush(&mut passthrough, &mut groups);
                groups.push(syllable.with_tone().to_string());
            } else if ch.is_whitespace() {
                flush(&mut passthrough, &mut groups);
            } else {
                passthrough.push(ch);
            }
        }
        flush(&mut passthrough, &mut groups);

        groups
    }
}

fn flush(passthrough: &mut String, groups: &mut Vec<String>) {
    if !passthrough.is_empty() {
        groups.push(std::mem::take(passthrough));
    }
}
