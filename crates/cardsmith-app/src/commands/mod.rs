use cardsmith_anki::NoteInfo;

pub mod build_deck;
pub mod check;
pub mod enrich_conjugation;
pub mod enrich_sentences;

/// Field name and value at `index`, logging notes that lack it
fn field_at<'a>(note: &'a NoteInfo, index: usize) -> Option<(&'a str, &'a str)> {
    let field = note.field_at(index);
    if field.is_none() {
        tracing::warn!("Note {} has no field at position {}", note.note_id, index);
    }
    field
}
