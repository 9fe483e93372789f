//! # Collection Manager
//!
//! [`NoteApi`] is the entry point for all note operations. It owns the
//! ordered in-memory list and one bound [`Serializer`], chosen at
//! construction and fixed for the manager's lifetime.
//!
//! ## Addressing
//!
//! Operations address notes by their zero-based position in the list. All
//! index-based operations share one bounds check over `[0, len)`; a miss is
//! reported as `None`/`false`, never as an error. Positions shift on
//! deletion, so callers must re-resolve indices after any mutation that
//! changes the list size. Each note also carries a stable `id` that survives
//! re-ordering; [`NoteApi::find_by_id`] resolves it.
//!
//! ## Persistence
//!
//! `load` wholesale-replaces the list with the deserialized file contents
//! and `store` writes the list back verbatim. Both fail with an explicit
//! [`NoteError`](crate::error::NoteError) kind; a failed `load` leaves the
//! in-memory list untouched.

use crate::error::Result;
use crate::model::{Note, NoteFields};
use crate::persist::Serializer;

/// The collection manager: an ordered, index-addressed note list bound to
/// one persistence backend.
///
/// Generic over [`Serializer`] so tests can run against
/// [`MemorySerializer`](crate::persist::memory::MemorySerializer) while the
/// binary uses the JSON or XML backend.
pub struct NoteApi<S: Serializer> {
    notes: Vec<Note>,
    next_id: u64,
    serializer: S,
}

impl<S: Serializer> NoteApi<S> {
    pub fn new(serializer: S) -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
            serializer,
        }
    }

    /// Append a new note and return its assigned id.
    pub fn add(&mut self, fields: NoteFields) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(Note::new(id, fields));
        id
    }

    pub fn find_by_index(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Bounds-checked removal. Returns the removed note; later notes shift
    /// down one position.
    pub fn delete_by_index(&mut self, index: usize) -> Option<Note> {
        if index < self.notes.len() {
            Some(self.notes.remove(index))
        } else {
            None
        }
    }

    /// Replace a note's content fields, leaving its id and status flags
    /// unchanged. Returns whether the update applied.
    pub fn update_by_index(&mut self, index: usize, fields: NoteFields) -> bool {
        let Some(existing) = self.notes.get(index) else {
            return false;
        };
        let updated = existing.with_fields(fields);
        self.notes[index] = updated;
        true
    }

    /// Flip-once archive: fails on an invalid index or an already-archived
    /// note.
    pub fn archive(&mut self, index: usize) -> bool {
        self.flag_once(index, |n| n.archived, |n| n.archived = true)
    }

    /// Flip-once favourite; same failure rules as [`NoteApi::archive`].
    pub fn favourite(&mut self, index: usize) -> bool {
        self.flag_once(index, |n| n.favourited, |n| n.favourited = true)
    }

    /// Flip-once finish; same failure rules as [`NoteApi::archive`].
    pub fn finish(&mut self, index: usize) -> bool {
        self.flag_once(index, |n| n.finished, |n| n.finished = true)
    }

    fn flag_once(
        &mut self,
        index: usize,
        is_set: impl Fn(&Note) -> bool,
        set: impl FnOnce(&mut Note),
    ) -> bool {
        match self.notes.get_mut(index) {
            Some(note) if !is_set(note) => {
                set(note);
                true
            }
            _ => false,
        }
    }

    pub fn count(&self) -> usize {
        self.notes.len()
    }

    pub fn count_archived(&self) -> usize {
        self.notes.iter().filter(|n| n.archived).count()
    }

    pub fn count_active(&self) -> usize {
        self.notes.iter().filter(|n| !n.archived).count()
    }

    pub fn count_favourited(&self) -> usize {
        self.notes.iter().filter(|n| n.favourited).count()
    }

    pub fn count_finished(&self) -> usize {
        self.notes.iter().filter(|n| n.finished).count()
    }

    pub fn count_by_priority(&self, priority: i32) -> usize {
        self.notes.iter().filter(|n| n.priority == priority).count()
    }

    /// Exact, case-sensitive category match.
    pub fn count_by_category(&self, category: &str) -> usize {
        self.notes.iter().filter(|n| n.category == category).count()
    }

    /// Exact, case-sensitive title match.
    pub fn count_by_title(&self, title: &str) -> usize {
        self.notes.iter().filter(|n| n.title == title).count()
    }

    pub fn list_all(&self) -> String {
        if self.notes.is_empty() {
            "No notes stored".to_string()
        } else {
            self.render(|_| true)
        }
    }

    pub fn list_archived(&self) -> String {
        if self.count_archived() == 0 {
            "No archived notes stored".to_string()
        } else {
            self.render(|n| n.archived)
        }
    }

    pub fn list_active(&self) -> String {
        if self.count_active() == 0 {
            "No active notes stored".to_string()
        } else {
            self.render(|n| !n.archived)
        }
    }

    pub fn list_favourited(&self) -> String {
        if self.count_favourited() == 0 {
            "No favourited notes stored".to_string()
        } else {
            self.render(|n| n.favourited)
        }
    }

    pub fn list_finished(&self) -> String {
        if self.count_finished() == 0 {
            "No notes marked as finished".to_string()
        } else {
            self.render(|n| n.finished)
        }
    }

    pub fn list_by_priority(&self, priority: i32) -> String {
        if self.count_by_priority(priority) == 0 {
            format!("No notes with priority: {}", priority)
        } else {
            self.render(|n| n.priority == priority)
        }
    }

    pub fn list_by_category(&self, category: &str) -> String {
        if self.count_by_category(category) == 0 {
            format!("No notes with category: {}", category)
        } else {
            self.render(|n| n.category == category)
        }
    }

    /// Case-insensitive substring match over titles, rendered like the
    /// list operations.
    pub fn search_by_title(&self, term: &str) -> String {
        let needle = term.to_lowercase();
        let rendered = self.render(|n| n.title.to_lowercase().contains(&needle));
        if rendered.is_empty() {
            format!("No notes match title: {}", term)
        } else {
            rendered
        }
    }

    /// Case-insensitive substring match over categories.
    pub fn search_by_category(&self, term: &str) -> String {
        let needle = term.to_lowercase();
        let rendered = self.render(|n| n.category.to_lowercase().contains(&needle));
        if rendered.is_empty() {
            format!("No notes match category: {}", term)
        } else {
            rendered
        }
    }

    /// Replace the list with the file contents. On failure the in-memory
    /// list is untouched.
    pub fn load(&mut self) -> Result<()> {
        let notes = self.serializer.read()?;
        self.next_id = notes.iter().map(|n| n.id).max().map_or(1, |m| m + 1);
        self.notes = notes;
        Ok(())
    }

    /// Write the current list to the bound file, replacing it.
    pub fn store(&mut self) -> Result<()> {
        self.serializer.write(&self.notes)
    }

    // Each line carries the note's position in the FULL list, not its
    // position within the filtered subset.
    fn render(&self, keep: impl Fn(&Note) -> bool) -> String {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, n)| keep(n))
            .map(|(i, n)| format!("{}: {}", i, n))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
