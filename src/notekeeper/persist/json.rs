use super::{write_atomic, Serializer};
use crate::error::{NoteError, Result};
use crate::model::Note;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON backend: the collection persisted as a JSON array of note objects.
pub struct JsonSerializer {
    path: PathBuf,
}

impl JsonSerializer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Serializer for JsonSerializer {
    fn read(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Err(NoteError::FileMissing(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| NoteError::Malformed {
            path: self.path.clone(),
            detail: e.to_string(),
        })
    }

    fn write(&mut self, notes: &[Note]) -> Result<()> {
        let content = serde_json::to_string_pretty(notes).map_err(|e| NoteError::Malformed {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;
        write_atomic(&self.path, &content)
    }
}
