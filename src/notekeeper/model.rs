use serde::{Deserialize, Serialize};
use std::fmt;

/// The mutable content of a note: everything except identity and status
/// flags. Used as the payload for both `add` and `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: String,
    /// Intended range 1 (low) to 5 (high); not enforced by the type.
    pub priority: i32,
    pub category: String,
    pub body: String,
    /// Free-form date label, not validated or parsed.
    pub date: String,
}

impl NoteFields {
    pub fn new(
        title: impl Into<String>,
        priority: i32,
        category: impl Into<String>,
        body: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            priority,
            category: category.into(),
            body: body.into(),
            date: date.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable identity, assigned once at creation and kept across
    /// re-ordering and persistence. Never reused within one collection.
    pub id: u64,
    pub title: String,
    pub priority: i32,
    pub category: String,
    pub body: String,
    pub date: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub favourited: bool,
    #[serde(default)]
    pub finished: bool,
}

impl Note {
    pub fn new(id: u64, fields: NoteFields) -> Self {
        Self {
            id,
            title: fields.title,
            priority: fields.priority,
            category: fields.category,
            body: fields.body,
            date: fields.date,
            archived: false,
            favourited: false,
            finished: false,
        }
    }

    /// Copy-with-changes: the note's content replaced, identity and status
    /// flags carried over unchanged.
    pub fn with_fields(&self, fields: NoteFields) -> Self {
        Self {
            id: self.id,
            title: fields.title,
            priority: fields.priority,
            category: fields.category,
            body: fields.body,
            date: fields.date,
            archived: self.archived,
            favourited: self.favourited,
            finished: self.finished,
        }
    }

    pub fn fields(&self) -> NoteFields {
        NoteFields {
            title: self.title.clone(),
            priority: self.priority,
            category: self.category.clone(),
            body: self.body.clone(),
            date: self.date.clone(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.archived {
            flags.push("archived");
        }
        if self.favourited {
            flags.push("favourited");
        }
        if self.finished {
            flags.push("finished");
        }
        write!(
            f,
            "{} (priority {}, {}, {})",
            self.title, self.priority, self.category, self.date
        )?;
        if !flags.is_empty() {
            write!(f, " [{}]", flags.join(", "))?;
        }
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}
