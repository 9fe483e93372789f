use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nk")]
#[command(about = "Command-line note keeper with JSON and XML storage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Notes file to operate on
    #[arg(short, long, global = true, default_value = "notes.json")]
    pub file: PathBuf,

    /// Storage format (never auto-detected from the file)
    #[arg(long, global = true, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Xml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note
    #[command(alias = "a")]
    Add {
        /// Title of the note
        title: String,

        /// Priority, 1 (low) to 5 (high)
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(i32).range(1..=5))]
        priority: i32,

        #[arg(short, long, default_value = "General")]
        category: String,

        /// Note text
        #[arg(short, long, default_value = "")]
        body: String,

        /// Date label (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List notes, optionally filtered by status or attribute
    #[command(alias = "ls")]
    List {
        #[arg(long, conflicts_with_all = ["archived", "favourited", "finished", "priority", "category"])]
        active: bool,

        #[arg(long)]
        archived: bool,

        #[arg(long)]
        favourited: bool,

        #[arg(long)]
        finished: bool,

        #[arg(long)]
        priority: Option<i32>,

        /// Exact category match
        #[arg(long)]
        category: Option<String>,
    },

    /// Update a note's content fields (omitted fields keep their value)
    Update {
        /// Position of the note in the full listing
        index: usize,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=5))]
        priority: Option<i32>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        body: Option<String>,

        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Position of the note in the full listing
        index: usize,
    },

    /// Archive a note (fails if already archived)
    Archive { index: usize },

    /// Favourite a note (fails if already favourited)
    #[command(alias = "fav")]
    Favourite { index: usize },

    /// Mark a note as finished (fails if already finished)
    Finish { index: usize },

    /// Search titles for a substring, case-insensitively
    Search {
        term: String,

        /// Search categories instead of titles
        #[arg(long)]
        category: bool,
    },

    /// Count notes, with the same filters as list
    Count {
        #[arg(long)]
        active: bool,

        #[arg(long)]
        archived: bool,

        #[arg(long)]
        favourited: bool,

        #[arg(long)]
        finished: bool,

        #[arg(long)]
        priority: Option<i32>,

        /// Exact category match
        #[arg(long)]
        category: Option<String>,

        /// Exact title match
        #[arg(long)]
        title: Option<String>,
    },
}
