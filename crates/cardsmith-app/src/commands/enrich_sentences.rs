use cardsmith_anki::{NoteInfo, NoteStore, deck_query};
use cardsmith_core::preprocess::{AnswerPreprocessor, Preprocessor};
use cardsmith_core::{ScriptConverter, Transcriber};
use cardsmith_lang_chinese::prompt::{sentence_translation_prompt, word_translation_prompt};
use cardsmith_llm::{Generator, SamplingParams};
use clap::ValueEnum;

use super::field_at;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SentenceTask {
    /// Convert traditional characters in the sentence to simplified
    Simplify,
    /// Fill an empty pinyin field
    Pinyin,
    /// Fill an empty English translation
    English,
    /// Define the single unknown word of a sentence
    TargetDefinition,
}

/// Collaborators shared by every sentence task
struct Tools<'a> {
    store: &'a dyn NoteStore,
    generator: &'a dyn Generator,
    transcriber: &'a dyn Transcriber,
    converter: &'a dyn ScriptConverter,
    params: SamplingParams,
}

/// Run each task over every note of the sentence deck; returns the number of notes updated per task
pub async fn enrich_sentences(
    state: &AppState,
    tasks: &[SentenceTask],
    store: &dyn NoteStore,
    generator: &dyn Generator,
    transcriber: &dyn Transcriber,
    converter: &dyn ScriptConverter,
) -> anyhow::Result<Vec<(SentenceTask, usize)>> {
    let config = &state.config.sentences;
    let tools = Tools {
        store,
        generator,
        transcriber,
        converter,
        params: SamplingParams::new(config.max_tokens, config.temperature),
    };

    let mut ids = store.find_notes(&deck_query(&config.deck)).await?;
    ids.sort_unstable();
    tracing::info!("Found {} notes in {}", ids.len(), config.deck);

    let mut counts = Vec::new();
    for &task in tasks {
        if state.is_cancelled() {
            break;
        }

        // Re-read so each task sees the previous task's updates
        let notes = store.notes_info(&ids).await?;
        let mut count = 0;

        for note in &notes {
            if state.is_cancelled() {
                tracing::warn!("Interrupted during {:?}", task);
                break;
            }
            if run_task(state, task, &tools, note).await? {
                count += 1;
            }
        }

        match task {
            SentenceTask::Simplify => tracing::info!(
                "Converted traditional characters to simplified in {} notes.",
                count
            ),
            SentenceTask::Pinyin => {
                tracing::info!("Added pinyin to {} notes (which had no pinyin).", count)
            }
            SentenceTask::English => {
                tracing::info!("Added english to {} notes (which had no english).", count)
            }
            SentenceTask::TargetDefinition => {
                tracing::info!("Added target english definitions to {} notes.", count)
            }
        }
        counts.push((task, count));
    }

    Ok(counts)
}

/// Apply one task to one note, true when the note was updated
async fn run_task(
    state: &AppState,
    task: SentenceTask,
    tools: &Tools<'_>,
    note: &NoteInfo,
) -> anyhow::Result<bool> {
    let fields = &state.config.sentences.fields;
    let Some((_, sentence)) = field_at(note, fields.hanzi) else {
        return Ok(false);
    };

    let update = match task {
        SentenceTask::Simplify => {
            if tools.converter.has_traditional(sentence) {
                field_at(note, fields.hanzi)
                    .map(|(name, _)| (name, tools.converter.to_simplified(sentence)))
            } else {
                None
            }
        }
        SentenceTask::Pinyin => match field_at(note, fields.pinyin) {
            Some((name, "")) if !sentence.trim().is_empty() => {
                Some((name, tools.transcriber.pronounce(sentence)))
            }
            _ => None,
        },
        SentenceTask::English => match field_at(note, fields.english) {
            Some((name, "")) => translate(tools, &sentence_translation_prompt(sentence))
                .await
                .map(|english| (name, english)),
            _ => None,
        },
        SentenceTask::TargetDefinition => {
            let unknown = match (
                field_at(note, fields.unknowns),
                field_at(note, fields.unknowns_count),
            ) {
                (Some((_, word)), Some((_, "1"))) => word,
                _ => return Ok(false),
            };
            match field_at(note, fields.target_definition) {
                Some((name, _)) => translate(tools, &word_translation_prompt(unknown))
                    .await
                    .map(|english| (name, english)),
                None => None,
            }
        }
    };

    let Some((name, value)) = update else {
        return Ok(false);
    };

    tracing::debug!("Note {}: {} -> {}", note.note_id, sentence, value);
    tools
        .store
        .update_note_fields(note.note_id, &[(name.to_string(), value)])
        .await?;
    Ok(true)
}

/// Ask for a translation, `None` when the model fails or says nothing
async fn translate(tools: &Tools<'_>, prompt: &str) -> Option<String> {
    match tools.generator.generate(prompt, &tools.params).await {
        Ok(reply) => {
            let english = AnswerPreprocessor.process(&reply);
            (!english.is_empty()).then_some(english)
        }
        Err(e) => {
            tracing::warn!("Translation failed: {}", e);
            None
        }
    }
}
