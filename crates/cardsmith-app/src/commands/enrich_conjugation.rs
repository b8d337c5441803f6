use cardsmith_anki::{NoteStore, deck_query};
use cardsmith_core::preprocess::first_line;
use cardsmith_lang_spanish::{clean_cloze, translation_prompt};
use cardsmith_llm::{Generator, SamplingParams};

use super::field_at;
use crate::state::AppState;

/// Write an English translation of each conjugation prompt; returns the number of notes updated
pub async fn enrich_conjugation(
    state: &AppState,
    store: &dyn NoteStore,
    generator: &dyn Generator,
) -> anyhow::Result<usize> {
    let config = &state.config.conjugation;
    let params = SamplingParams::new(config.max_tokens, config.temperature);

    let mut ids = store.find_notes(&deck_query(&config.deck)).await?;
    ids.sort_unstable();
    let notes = store.notes_info(&ids).await?;
    tracing::info!("Found {} notes in {}", notes.len(), config.deck);

    let mut count = 0;
    for note in notes.iter().skip(config.skip_first) {
        if state.is_cancelled() {
            tracing::warn!("Interrupted after {} notes", count);
            break;
        }

        let (Some((_, prompt)), Some((english_field, _))) = (
            field_at(note, config.prompt_field),
            field_at(note, config.english_field),
        ) else {
            continue;
        };

        let sentence = clean_cloze(prompt);
        if sentence.is_empty() {
            continue;
        }

        let english = match generator.generate(&translation_prompt(&sentence), &params).await {
            Ok(reply) => first_line(&reply),
            Err(e) => {
                tracing::warn!("Translation failed for note {}: {}", note.note_id, e);
                continue;
            }
        };

        tracing::info!("Original: {}", sentence);
        tracing::info!("English: {}", english);
        store
            .update_note_fields(note.note_id, &[(english_field.to_string(), english)])
            .await?;
        count += 1;
    }

    tracing::info!("Added target english definitions to {} notes.", count);
    Ok(count)
}
