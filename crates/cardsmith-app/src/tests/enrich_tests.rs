use cardsmith_config::Config;

use super::fakes::{CharTranscriber, FakeConverter, FakeGenerator, FakeStore, note};
use crate::commands::enrich_conjugation::enrich_conjugation;
use crate::commands::enrich_sentences::{SentenceTask, enrich_sentences};
use crate::state::AppState;

// Default sentence layout: hanzi 2, pinyin 4, english 5, target 10, unknowns 11, count 12
const FIELDS: usize = 13;

#[tokio::test]
async fn test_simplify_then_pinyin_uses_converted_text() {
    let state = AppState::new(Config::default());
    let store = FakeStore::with_notes(vec![
        note(1, FIELDS, &[(2, "漢字")]),
        note(2, FIELDS, &[(2, "你好"), (4, "nǐ hǎo")]),
    ]);
    let generator = FakeGenerator::default();

    let counts = enrich_sentences(
        &state,
        &[SentenceTask::Simplify, SentenceTask::Pinyin],
        &store,
        &generator,
        &CharTranscriber,
        &FakeConverter,
    )
    .await
    .unwrap();

    assert_eq!(counts, vec![(SentenceTask::Simplify, 1), (SentenceTask::Pinyin, 1)]);
    assert_eq!(store.value(1, 2), "汉字");
    assert_eq!(store.value(1, 4), "汉 字");
    assert_eq!(store.value(2, 4), "nǐ hǎo");
    assert_eq!(generator.prompt_count(), 0);
}

#[tokio::test]
async fn test_english_fills_only_empty_fields() {
    let state = AppState::new(Config::default());
    let store = FakeStore::with_notes(vec![
        note(1, FIELDS, &[(2, "我很好")]),
        note(2, FIELDS, &[(2, "你好"), (5, "Hello")]),
    ]);
    let generator = FakeGenerator::default().reply("'我很好'", "Answer: I am fine.");

    let counts = enrich_sentences(
        &state,
        &[SentenceTask::English],
        &store,
        &generator,
        &CharTranscriber,
        &FakeConverter,
    )
    .await
    .unwrap();

    assert_eq!(counts, vec![(SentenceTask::English, 1)]);
    assert_eq!(store.value(1, 5), "I am fine.");
    assert_eq!(store.value(2, 5), "Hello");
    assert_eq!(
        *generator.prompts.lock().unwrap(),
        vec!["Translate the Chinese sentence '我很好' to English."]
    );
}

#[tokio::test]
async fn test_target_definition_needs_single_unknown() {
    let state = AppState::new(Config::default());
    let store = FakeStore::with_notes(vec![
        note(1, FIELDS, &[(2, "熊猫很可爱"), (11, "熊猫"), (12, "1")]),
        note(2, FIELDS, &[(2, "他们在开会"), (11, "开会 他们"), (12, "2")]),
    ]);
    let generator = FakeGenerator::default().reply("'熊猫'", "panda");

    let counts = enrich_sentences(
        &state,
        &[SentenceTask::TargetDefinition],
        &store,
        &generator,
        &CharTranscriber,
        &FakeConverter,
    )
    .await
    .unwrap();

    assert_eq!(counts, vec![(SentenceTask::TargetDefinition, 1)]);
    assert_eq!(store.value(1, 10), "panda");
    assert_eq!(store.value(2, 10), "");
}

#[tokio::test]
async fn test_failed_translation_leaves_note_alone() {
    let state = AppState::new(Config::default());
    let store = FakeStore::with_notes(vec![note(1, FIELDS, &[(2, "我很好")])]);
    let generator = FakeGenerator::default().fail_on("我很好");

    let counts = enrich_sentences(
        &state,
        &[SentenceTask::English],
        &store,
        &generator,
        &CharTranscriber,
        &FakeConverter,
    )
    .await
    .unwrap();

    assert_eq!(counts, vec![(SentenceTask::English, 0)]);
    assert!(store.updates().is_empty());
}

#[tokio::test]
async fn test_conjugation_skips_intro_cards() {
    let state = AppState::new(Config::default());
    let mut notes: Vec<_> = (1..=7)
        .map(|id| note(id, 3, &[(1, "Intro card")]))
        .collect();
    notes.push(note(8, 3, &[(1, "Yo {{c1::era::ser}} feliz<br>")]));
    notes.push(note(9, 3, &[(1, "<div>Ellos {{c1::hablaban::hablar}}</div>")]));
    let store = FakeStore::with_notes(notes);

    let generator = FakeGenerator::default()
        .reply("Yo era feliz", " I was happy.\nNote: imperfect tense")
        .reply("Ellos hablaban", "They were talking.");

    let count = enrich_conjugation(&state, &store, &generator).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        store.updates(),
        vec![
            (8, "F2".to_string(), "I was happy.".to_string()),
            (9, "F2".to_string(), "They were talking.".to_string()),
        ]
    );
    assert_eq!(
        generator.prompts.lock().unwrap()[0],
        "Spanish Sentence: Yo era feliz\nEnglish Translation:"
    );
}
