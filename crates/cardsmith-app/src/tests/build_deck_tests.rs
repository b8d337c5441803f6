use std::io::Write;

use cardsmith_config::Config;
use cardsmith_core::VocabEntry;
use cardsmith_lang_chinese::ExampleValidator;

use super::fakes::{CharTranscriber, FakeGenerator, FakeStore};
use crate::commands::build_deck::{build_deck, load_entries};
use crate::state::AppState;

fn entry(rank: u32, character: &str) -> VocabEntry {
    VocabEntry {
        rank,
        character: character.to_string(),
        frequency: 1000 / rank as u64,
        cumulative_frequency: rank as f64,
        pronunciation: String::new(),
        gloss: "gloss".to_string(),
        examples: Vec::new(),
    }
}

const GOOD_REPLY: &str = "Here are three examples:\n\
    '好人' (hǎo rén) - good person\n\
    你好 (nǐ hǎo) - hello\n\
    好吃 (hǎo chī) - delicious\n\
    好看 (hǎo kàn) - good-looking";

#[tokio::test]
async fn test_build_deck_attaches_examples() {
    let state = AppState::new(Config::default());
    let generator = FakeGenerator::default()
        .reply("'好'", GOOD_REPLY)
        .reply("'人'", "Sorry, I can only answer in English.");
    let store = FakeStore::default();
    let validator = ExampleValidator::new(CharTranscriber);

    let report = build_deck(
        &state,
        vec![entry(1, "好"), entry(2, "人")],
        &generator,
        &store,
        &validator,
    )
    .await
    .unwrap();

    assert_eq!(report.added, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(report.missing, vec!["人"]);
    assert!(!report.interrupted);

    assert_eq!(*store.decks.lock().unwrap(), vec!["Chinese Characters"]);
    assert_eq!(*store.models.lock().unwrap(), vec!["Chinese Character Model"]);

    let added = store.added();
    assert_eq!(added[0].field("Character"), Some("好"));
    assert_eq!(
        added[0].field("Examples"),
        Some("好人 (好 人) - good person\n你好 (你 好) - hello\n好吃 (好 吃) - delicious")
    );
    assert_eq!(added[0].field("Rank"), Some("1"));
    assert_eq!(added[1].field("Examples"), Some(""));
    assert_eq!(added[1].tags, vec!["cardsmith"]);
}

#[tokio::test]
async fn test_generation_failure_is_missing_not_fatal() {
    let state = AppState::new(Config::default());
    let generator = FakeGenerator::default()
        .fail_on("'的'")
        .reply("'好'", GOOD_REPLY);
    let store = FakeStore::default();
    let validator = ExampleValidator::new(CharTranscriber);

    let report = build_deck(
        &state,
        vec![entry(1, "的"), entry(2, "好")],
        &generator,
        &store,
        &validator,
    )
    .await
    .unwrap();

    assert_eq!(report.added, 2);
    assert_eq!(report.missing, vec!["的"]);
    assert_eq!(generator.prompt_count(), 2);
}

#[tokio::test]
async fn test_refused_note_is_counted() {
    let state = AppState::new(Config::default());
    let generator = FakeGenerator::default().reply("'好'", GOOD_REPLY);
    let store = FakeStore {
        refuse: Some("的".to_string()),
        ..Default::default()
    };
    let validator = ExampleValidator::new(CharTranscriber);

    let report = build_deck(
        &state,
        vec![entry(1, "的"), entry(2, "好")],
        &generator,
        &store,
        &validator,
    )
    .await
    .unwrap();

    assert_eq!(report.added, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(store.added()[0].field("Character"), Some("好"));
}

#[tokio::test]
async fn test_cancelled_build_stops_before_first_entry() {
    let state = AppState::new(Config::default());
    state.cancel.cancel();

    let generator = FakeGenerator::default();
    let store = FakeStore::default();
    let validator = ExampleValidator::new(CharTranscriber);

    let report = build_deck(&state, vec![entry(1, "好")], &generator, &store, &validator)
        .await
        .unwrap();

    assert!(report.interrupted);
    assert_eq!(report.added, 0);
    assert_eq!(generator.prompt_count(), 0);
}

#[test]
fn test_load_entries_applies_limit() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "/* rank\tchar\tfreq\tcumulative */").unwrap();
    writeln!(file, "1\ta\t300\t30.0").unwrap();
    writeln!(file, "2\tb\t200\t50.0").unwrap();
    writeln!(file, "3\tc\t100\t60.0").unwrap();

    let encodings = vec!["utf-8".to_string()];
    let entries = load_entries(file.path(), &encodings, Some(2)).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].character, "b");
}

#[test]
fn test_load_entries_rejects_empty_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "/* only a header */").unwrap();

    let encodings = vec!["utf-8".to_string()];
    let err = load_entries(file.path(), &encodings, None).unwrap_err();

    assert!(err.to_string().contains("No characters found"));
}
