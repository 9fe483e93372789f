use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Notes file not found: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("Malformed notes file {}: {}", .path.display(), .detail)]
    Malformed { path: PathBuf, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No note at index {0}")]
    NotFound(usize),
}

pub type Result<T> = std::result::Result<T, NoteError>;
