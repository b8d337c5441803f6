//! Prompts sent to the generator for Chinese cards.

/// System prompt for example generation
pub const EXAMPLE_SYSTEM_PROMPT: &str = "You are a helpful Chinese language assistant. \
Provide clear, accurate examples of Chinese words and phrases.";

/// Ask for three `word (pinyin) - definition` lines built around `character`
pub fn example_prompt(character: &str) -> String {
    format!(
        "Generate exactly three examples following this EXACT format:
'Chinese word in simplified chinese characters' (pinyin) - English definition

Rules:
- Each example MUST be 2-4 characters long in simplified Chinese
- Each example MUST contain '{character}'
- Each example MUST include pinyin in parentheses
- Each example MUST include English definition after a hyphen
- Put each example on a new line
- NO additional text or explanations

Example format:
example (pinyin) - english definition"
    )
}

pub fn sentence_translation_prompt(sentence: &str) -> String {
    format!("Translate the Chinese sentence '{sentence}' to English.")
}

pub fn word_translation_prompt(word: &str) -> String {
    format!("Translate the Chinese word '{word}' to English.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_prompt_names_character() {
        let prompt = example_prompt("好");
        assert!(prompt.contains("MUST contain '好'"));
        assert!(prompt.ends_with("example (pinyin) - english definition"));
    }

    #[test]
    fn test_translation_prompts() {
        assert_eq!(
            sentence_translation_prompt("我很好"),
            "Translate the Chinese sentence '我很好' to English."
        );
        assert_eq!(
            word_translation_prompt("熊猫"),
            "Translate the Chinese word '熊猫' to English."
        );
    }
}
