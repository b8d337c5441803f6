use std::path::Path;

use anyhow::Context;
use cardsmith_anki::{NoteModel, NoteStore};
use cardsmith_core::{Transcriber, VocabEntry};
use cardsmith_lang_chinese::prompt::example_prompt;
use cardsmith_lang_chinese::{ExampleValidator, FrequencyLoader};
use cardsmith_llm::{Generator, SamplingParams};

use crate::state::AppState;

#[derive(Debug, Default)]
pub struct BuildReport {
    pub added: usize,
    pub failed: usize,
    /// Characters left without a validated example
    pub missing: Vec<String>,
    pub interrupted: bool,
}

/// Load the frequency list, refusing one without a single usable row
pub fn load_entries(
    path: &Path,
    encodings: &[String],
    limit: Option<usize>,
) -> anyhow::Result<Vec<VocabEntry>> {
    let loader = FrequencyLoader::with_encodings(encodings);
    let table = loader
        .load_from_file(path)
        .with_context(|| format!("Failed to load frequency list {}", path.display()))?;

    if table.is_empty() {
        anyhow::bail!("No characters found in {}", path.display());
    }

    let mut entries = table.entries;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    Ok(entries)
}

/// Generate examples for every entry and add one character note each
pub async fn build_deck<T: Transcriber>(
    state: &AppState,
    entries: Vec<VocabEntry>,
    generator: &dyn Generator,
    store: &dyn NoteStore,
    validator: &ExampleValidator<T>,
) -> anyhow::Result<BuildReport> {
    let anki = &state.config.anki;
    let params = SamplingParams::new(
        state.config.generator.max_tokens,
        state.config.generator.temperature,
    );
    let model = NoteModel::chinese_character(&anki.model);

    store.ensure_deck(&anki.deck).await?;
    store.ensure_model(&model).await?;

    let total = entries.len();
    let mut report = BuildReport::default();

    let provider = generator.metadata();
    tracing::info!(
        "Generating examples for {} characters with {} ({})",
        total,
        provider.name,
        provider.model
    );
    for (index, mut entry) in entries.into_iter().enumerate() {
        if state.is_cancelled() {
            report.interrupted = true;
            break;
        }

        tracing::info!(
            "Processing character {} ({}/{})",
            entry.character,
            index + 1,
            total
        );

        match generator.generate(&example_prompt(&entry.character), &params).await {
            Ok(raw) => {
                tracing::debug!("Raw examples for {}:\n{}", entry.character, raw);
                entry.examples = validator.validate(&raw, &entry.character);
            }
            Err(e) => {
                tracing::warn!("Generation failed for {}: {}", entry.character, e);
            }
        }

        if entry.has_examples() {
            tracing::debug!("Valid examples:\n{}", entry.examples_field());
        } else {
            tracing::warn!("No valid examples found for {}", entry.character);
            report.missing.push(entry.character.clone());
        }

        match cardsmith_anki::add_entry(store, &anki.deck, &model, &entry, &anki.tags).await {
            Ok(note_id) => {
                tracing::debug!("Added {} as note {}", entry.character, note_id);
                report.added += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to add {}: {}", entry.character, e);
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        "Created deck {} with {} characters ({} failed)",
        anki.deck,
        report.added,
        report.failed
    );
    if !report.missing.is_empty() {
        tracing::info!("Missing characters: {:?}", report.missing);
    }
    if report.interrupted {
        tracing::warn!("Stopped early after {} of {} characters", report.added + report.failed, total);
    }

    Ok(report)
}
