//! # Notekeeper Architecture
//!
//! Notekeeper is a **UI-agnostic note-keeping library**: the `nk` binary is a
//! thin clap client over a library that owns all of the actual behavior.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, colours output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection Manager (api.rs)                                │
//! │  - Owns the ordered in-memory note list                     │
//! │  - add/find/update/delete, flag setters, counts, listings,  │
//! │    search; index-addressed with one shared bounds check     │
//! │  - Bounds misses are sentinels (Option/bool), never errors  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Layer (persist/)                               │
//! │  - Abstract Serializer trait: whole-collection read/write   │
//! │  - JsonSerializer, XmlSerializer (production),              │
//! │    MemorySerializer (testing)                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Notes carry a stable `id` assigned from a monotonic counter, decoupled
//! from storage position. Operations address notes by their zero-based
//! position in the list (which shifts on deletion); listings prefix each
//! line with that position so the next command can use it.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, and never touches stdout/stderr or `std::process::exit`. The
//! only I/O is the `Serializer` reading or writing its bound file, and that
//! is behind a trait so tests can run entirely in memory.
//!
//! ## Module Overview
//!
//! - [`api`]: the collection manager, entry point for all operations
//! - [`model`]: core data types (`Note`, `NoteFields`)
//! - [`persist`]: serialization trait and the JSON/XML/memory backends
//! - [`error`]: error types

pub mod api;
pub mod error;
pub mod model;
pub mod persist;
