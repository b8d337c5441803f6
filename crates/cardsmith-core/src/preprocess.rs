use unicode_normalization::UnicodeNormalization;

/// Cleanup applied to free-text model replies before they are stored
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        let text: String = text.nfc().collect();

        text.replace(['\n', '\r'], " ").trim().to_string()
    }
}

/// Keeps the reply as-is apart from normalization
pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Drops a leading `Answer:`-style label from a translation reply
pub struct AnswerPreprocessor;

impl Preprocessor for AnswerPreprocessor {
    fn process(&self, text: &str) -> String {
        DefaultPreprocessor.process(strip_label(text))
    }
}

/// Drop a single-word prefix such as `Translation:`; times like `3:00` stay intact
fn strip_label(text: &str) -> &str {
    match text.trim_start().split_once(':') {
        Some((label, rest)) if is_label(label) => rest,
        _ => text,
    }
}

fn is_label(label: &str) -> bool {
    !label.is_empty() && label.chars().count() <= 20 && label.chars().all(char::is_alphabetic)
}

/// First non-empty line of a reply
pub fn first_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collapses_line_breaks() {
        assert_eq!(DefaultPreprocessor.process("  I am\nhere \r\n"), "I am here");
        assert_eq!(DefaultPreprocessor.process("   "), "");
    }

    #[test]
    fn test_answer_prefix_is_dropped() {
        assert_eq!(AnswerPreprocessor.process("Answer: I like tea."), "I like tea.");
        assert_eq!(AnswerPreprocessor.process("I like tea."), "I like tea.");
    }

    #[test]
    fn test_answer_keeps_colons_after_label() {
        assert_eq!(
            AnswerPreprocessor.process("Translation: He said: go home"),
            "He said: go home"
        );
    }

    #[test]
    fn test_answer_without_label_is_untouched() {
        assert_eq!(
            AnswerPreprocessor.process("The meeting starts at 3:00 pm."),
            "The meeting starts at 3:00 pm."
        );
        assert_eq!(AnswerPreprocessor.process("He said: go home"), "He said: go home");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("\n  I was tired.\nNote: imperfect"), "I was tired.");
        assert_eq!(first_line(""), "");
    }
}
