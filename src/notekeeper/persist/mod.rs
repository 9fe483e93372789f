//! # Persistence Layer
//!
//! This module defines the persistence abstraction for notekeeper. The
//! [`Serializer`] trait allows the collection manager to work with different
//! storage formats.
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind a trait to:
//! - Enable **testing** with `MemorySerializer` (no filesystem needed)
//! - Allow **interchangeable formats** (JSON, XML) without changing the
//!   collection manager
//! - Keep collection logic **decoupled** from file details
//!
//! ## Implementations
//!
//! - [`json::JsonSerializer`]: the whole collection as a JSON array of note
//!   objects in one file
//! - [`xml::XmlSerializer`]: a `<notes>` document with one `<note>` element
//!   per record
//! - [`memory::MemorySerializer`]: in-memory, for testing and development
//!
//! ## Whole-File Discipline
//!
//! Each backend targets a single file path fixed at construction. `read`
//! loads the complete collection; `write` replaces the complete file via a
//! temp file in the same directory followed by a rename, so a failed write
//! never corrupts the previous contents. An empty collection round-trips in
//! both formats.

use crate::error::Result;
use crate::model::Note;
use std::fs;
use std::path::Path;

pub mod json;
pub mod memory;
pub mod xml;

/// Abstract interface for whole-collection persistence.
///
/// Implementations read and write the entire note list against one bound
/// file; there is no partial-write or append protocol.
pub trait Serializer {
    /// Read the complete collection from the bound file.
    fn read(&self) -> Result<Vec<Note>>;

    /// Replace the bound file with the given collection.
    fn write(&mut self, notes: &[Note]) -> Result<()>;
}

/// Write `contents` to `path` through a sibling temp file and a rename.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
