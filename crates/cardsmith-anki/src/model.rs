use cardsmith_core::VocabEntry;
use serde::{Deserialize, Serialize};

const CHARACTER_CSS: &str = r#"
.card {
    font-family: custom;
    font-size: 30px;
    text-align: center;
    color: black;
    background-color: white;
}

@font-face {
    font-family: custom;
    src: url('_huwawenkaiti.ttf');
}

.card:first-of-type {
    font-size: 80px;
}

.info {
    font-size: 24px;
    margin-top: 20px;
}

hr {
    margin: 20px 0;
}
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub name: String,
    pub front: String,
    pub back: String,
}

/// An Anki note type: ordered fields, card templates and styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteModel {
    pub name: String,
    pub fields: Vec<String>,
    pub templates: Vec<CardTemplate>,
    pub css: String,
}

impl NoteModel {
    /// Character card: hanzi on the front, pinyin/definition/examples/rank on the back
    pub fn chinese_character(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: ["Character", "Pinyin", "English", "Examples", "Rank"]
                .into_iter()
                .map(String::from)
                .collect(),
            templates: vec![CardTemplate {
                name: "Character Card".to_string(),
                front: "{{Character}}".to_string(),
                back: "{{Character}}\n\
                       <hr>\n\
                       <div class=\"info\">\n\
                       <div>{{Pinyin}}</div>\n\
                       <div>{{English}}</div>\n\
                       <div style=\"white-space: pre-line;\">{{Examples}}</div>\n\
                       <div>[Rank: {{Rank}}]</div>\n\
                       </div>"
                    .to_string(),
            }],
            css: CHARACTER_CSS.trim_start().to_string(),
        }
    }
}

/// A note ready to be added to a deck
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub deck: String,
    pub model: String,
    /// Field name/value pairs in model order
    pub fields: Vec<(String, String)>,
    pub tags: Vec<String>,
}

impl Note {
    /// Fill the character model's fields from a frequency entry
    pub fn for_entry(deck: &str, model: &NoteModel, entry: &VocabEntry) -> Self {
        let values = [
            entry.character.clone(),
            entry.pronunciation.clone(),
            entry.gloss.clone(),
            entry.examples_field(),
            entry.rank.to_string(),
        ];

        Self {
            deck: deck.to_string(),
            model: model.name.clone(),
            fields: model.fields.iter().cloned().zip(values).collect(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: &[String]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use cardsmith_core::ExampleLine;

    use super::*;

    #[test]
    fn test_note_for_entry() {
        let model = NoteModel::chinese_character("Chinese Character Model");
        let entry = VocabEntry {
            rank: 42,
            character: "好".to_string(),
            frequency: 1000,
            cumulative_frequency: 20.5,
            pronunciation: "hao3".to_string(),
            gloss: "good".to_string(),
            examples: vec![ExampleLine {
                surface: "你好".to_string(),
                pronunciation: "nǐ hǎo".to_string(),
                gloss: "hello".to_string(),
            }],
        };

        let note = Note::for_entry("Chinese Characters", &model, &entry)
            .with_tags(&["cardsmith".to_string()]);

        assert_eq!(note.model, "Chinese Character Model");
        assert_eq!(note.field("Character"), Some("好"));
        assert_eq!(note.field("Pinyin"), Some("hao3"));
        assert_eq!(note.field("English"), Some("good"));
        assert_eq!(note.field("Examples"), Some("你好 (nǐ hǎo) - hello"));
        assert_eq!(note.field("Rank"), Some("42"));
        assert_eq!(note.tags, vec!["cardsmith"]);
    }

    #[test]
    fn test_character_model_layout() {
        let model = NoteModel::chinese_character("Chinese Character Model");
        assert_eq!(model.fields.len(), 5);
        assert_eq!(model.templates[0].front, "{{Character}}");
        assert!(model.templates[0].back.contains("[Rank: {{Rank}}]"));
        assert!(model.css.starts_with(".card"));
    }
}
