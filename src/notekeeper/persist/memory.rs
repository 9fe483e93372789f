use super::Serializer;
use crate::error::Result;
use crate::model::Note;

/// In-memory persistence for testing and development.
/// Does NOT persist data beyond the instance.
#[derive(Default)]
pub struct MemorySerializer {
    saved: Vec<Note>,
}

impl MemorySerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the "file" contents, as if written by a previous session.
    pub fn with_saved(saved: Vec<Note>) -> Self {
        Self { saved }
    }

    pub fn saved(&self) -> &[Note] {
        &self.saved
    }
}

impl Serializer for MemorySerializer {
    fn read(&self) -> Result<Vec<Note>> {
        Ok(self.saved.clone())
    }

    fn write(&mut self, notes: &[Note]) -> Result<()> {
        self.saved = notes.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::api::NoteApi;
    use crate::model::NoteFields;

    use super::*;

    pub fn fields(
        title: &str,
        priority: i32,
        category: &str,
        body: &str,
        date: &str,
    ) -> NoteFields {
        NoteFields::new(title, priority, category, body, date)
    }

    /// An empty manager over in-memory persistence.
    pub fn empty_api() -> NoteApi<MemorySerializer> {
        NoteApi::new(MemorySerializer::new())
    }

    /// Five notes; "Code App" and "Swim - Pool" are archived, favourited
    /// and finished.
    pub fn populated_api() -> NoteApi<MemorySerializer> {
        let mut api = empty_api();
        api.add(fields("Learning Rust", 5, "College", "Chapter 1 assignment", "1/1/2023"));
        api.add(fields("Summer Holiday to France", 1, "Holiday", "holiday, food, sun", "10/6/2022"));
        api.add(fields("Code App", 4, "Work", "Add, functions, classes", "6/2/2023"));
        api.add(fields("Test App", 4, "Work", "test functionality and view UI", "12/3/2023"));
        api.add(fields("Swim - Pool", 3, "Hobby", "Practice front-stroke", "1/5/2023"));

        for i in [2, 4] {
            assert!(api.archive(i));
            assert!(api.favourite(i));
            assert!(api.finish(i));
        }
        api
    }
}
