use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Could not decode {} with any of: {}", .path.display(), .tried.join(", "))]
    UnreadableResource { path: PathBuf, tried: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
