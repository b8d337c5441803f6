/// Phonetic transcription of logographic text
pub trait Transcriber: Send + Sync {
    /// Break text into syllable groups with tone marks
    fn transcribe(&self, text: &str) -> Vec<String>;

    /// Space-joined transcription, empty when nothing could be transcribed
    fn pronounce(&self, text: &str) -> String {
        self.transcribe(text)
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Traditional/simplified script conversion
pub trait ScriptConverter: Send + Sync {
    fn to_simplified(&self, text: &str) -> String;

    /// Whether converting would change the text
    fn has_traditional(&self, text: &str) -> bool {
        self.to_simplified(text) != text
    }
}
