mod client;
mod model;

pub use client::{AnkiConnectClient, FieldValue, NoteInfo};
pub use model::{CardTemplate, Note, NoteModel};

use anyhow::Result;
use async_trait::async_trait;
use cardsmith_core::VocabEntry;

/// Flashcard store the pipelines write to
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Create the deck unless it already exists
    async fn ensure_deck(&self, deck: &str) -> Result<()>;

    /// Create the note type unless one with the same name exists
    async fn ensure_model(&self, model: &NoteModel) -> Result<()>;

    async fn add_note(&self, note: &Note) -> Result<u64>;

    /// Note ids matching an Anki search query
    async fn find_notes(&self, query: &str) -> Result<Vec<u64>>;

    async fn notes_info(&self, ids: &[u64]) -> Result<Vec<NoteInfo>>;

    /// Overwrite the named fields of one note, leaving the others alone
    async fn update_note_fields(&self, id: u64, fields: &[(String, String)]) -> Result<()>;
}

/// Add a character card for a frequency list entry
pub async fn add_entry(
    store: &dyn NoteStore,
    deck: &str,
    model: &NoteModel,
    entry: &VocabEntry,
    tags: &[String],
) -> Result<u64> {
    let note = Note::for_entry(deck, model, entry).with_tags(tags);
    store.add_note(&note).await
}

/// Search query for every note of a deck
pub fn deck_query(deck: &str) -> String {
    format!("\"deck:{}\"", deck)
}
