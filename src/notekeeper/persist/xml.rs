use super::{write_atomic, Serializer};
use crate::error::{NoteError, Result};
use crate::model::Note;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Wire shape of the XML document: a `<notes>` root with one `<note>`
/// element per record.
#[derive(Serialize, Deserialize)]
#[serde(rename = "notes")]
struct NotesDoc {
    #[serde(rename = "note", default)]
    notes: Vec<Note>,
}

/// XML backend: the collection persisted as a `<notes>` document.
pub struct XmlSerializer {
    path: PathBuf,
}

impl XmlSerializer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Serializer for XmlSerializer {
    fn read(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Err(NoteError::FileMissing(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        let doc: NotesDoc = quick_xml::de::from_str(&content).map_err(|e| NoteError::Malformed {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;
        Ok(doc.notes)
    }

    fn write(&mut self, notes: &[Note]) -> Result<()> {
        let doc = NotesDoc {
            notes: notes.to_vec(),
        };
        let body = quick_xml::se::to_string(&doc).map_err(|e| NoteError::Malformed {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;
        write_atomic(&self.path, &format!("{}\n{}", XML_DECLARATION, body))
    }
}
