use clap::Parser;
use colored::*;
use notekeeper::api::NoteApi;
use notekeeper::error::{NoteError, Result};
use notekeeper::model::NoteFields;
use notekeeper::persist::json::JsonSerializer;
use notekeeper::persist::xml::XmlSerializer;
use notekeeper::persist::Serializer;

mod args;
use args::{Cli, Commands, Format};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.format {
        Format::Json => dispatch(NoteApi::new(JsonSerializer::new(&cli.file)), cli),
        Format::Xml => dispatch(NoteApi::new(XmlSerializer::new(&cli.file)), cli),
    }
}

fn dispatch<S: Serializer>(mut api: NoteApi<S>, cli: Cli) -> Result<()> {
    match api.load() {
        Ok(()) => log::debug!("loaded {} notes from {}", api.count(), cli.file.display()),
        // First run: no file yet, start from an empty collection.
        Err(NoteError::FileMissing(_)) => {
            log::debug!("no notes file at {}, starting empty", cli.file.display())
        }
        Err(e) => return Err(e),
    }

    let mutated = match cli.command {
        Commands::Add {
            title,
            priority,
            category,
            body,
            date,
        } => handle_add(&mut api, title, priority, category, body, date),
        Commands::List {
            active,
            archived,
            favourited,
            finished,
            priority,
            category,
        } => {
            handle_list(&api, active, archived, favourited, finished, priority, category);
            false
        }
        Commands::Update {
            index,
            title,
            priority,
            category,
            body,
            date,
        } => handle_update(&mut api, index, title, priority, category, body, date)?,
        Commands::Delete { index } => handle_delete(&mut api, index)?,
        Commands::Archive { index } => handle_flag(&mut api, index, Flag::Archive)?,
        Commands::Favourite { index } => handle_flag(&mut api, index, Flag::Favourite)?,
        Commands::Finish { index } => handle_flag(&mut api, index, Flag::Finish)?,
        Commands::Search { term, category } => {
            let rendered = if category {
                api.search_by_category(&term)
            } else {
                api.search_by_title(&term)
            };
            println!("{}", rendered);
            false
        }
        Commands::Count {
            active,
            archived,
            favourited,
            finished,
            priority,
            category,
            title,
        } => {
            handle_count(&api, active, archived, favourited, finished, priority, category, title);
            false
        }
    };

    if mutated {
        api.store()?;
        log::debug!("stored {} notes to {}", api.count(), cli.file.display());
    }
    Ok(())
}

fn handle_add<S: Serializer>(
    api: &mut NoteApi<S>,
    title: String,
    priority: i32,
    category: String,
    body: String,
    date: Option<String>,
) -> bool {
    let date = date.unwrap_or_else(|| chrono::Local::now().format("%d/%m/%Y").to_string());
    let id = api.add(NoteFields::new(title, priority, category, body, date));
    let note = api.find_by_id(id).expect("just added");
    println!("{} {}", "Added:".green(), note);
    true
}

#[allow(clippy::too_many_arguments)]
fn handle_list<S: Serializer>(
    api: &NoteApi<S>,
    active: bool,
    archived: bool,
    favourited: bool,
    finished: bool,
    priority: Option<i32>,
    category: Option<String>,
) {
    let rendered = if active {
        api.list_active()
    } else if archived {
        api.list_archived()
    } else if favourited {
        api.list_favourited()
    } else if finished {
        api.list_finished()
    } else if let Some(p) = priority {
        api.list_by_priority(p)
    } else if let Some(c) = category {
        api.list_by_category(&c)
    } else {
        api.list_all()
    };
    println!("{}", rendered);
}

fn handle_update<S: Serializer>(
    api: &mut NoteApi<S>,
    index: usize,
    title: Option<String>,
    priority: Option<i32>,
    category: Option<String>,
    body: Option<String>,
    date: Option<String>,
) -> Result<bool> {
    let existing = api
        .find_by_index(index)
        .ok_or(NoteError::NotFound(index))?
        .fields();

    let fields = NoteFields::new(
        title.unwrap_or(existing.title),
        priority.unwrap_or(existing.priority),
        category.unwrap_or(existing.category),
        body.unwrap_or(existing.body),
        date.unwrap_or(existing.date),
    );
    api.update_by_index(index, fields);
    let note = api.find_by_index(index).expect("bounds already checked");
    println!("{} {}: {}", "Updated".green(), index, note);
    Ok(true)
}

fn handle_delete<S: Serializer>(api: &mut NoteApi<S>, index: usize) -> Result<bool> {
    let removed = api
        .delete_by_index(index)
        .ok_or(NoteError::NotFound(index))?;
    println!("{} {}", "Deleted:".green(), removed);
    Ok(true)
}

enum Flag {
    Archive,
    Favourite,
    Finish,
}

fn handle_flag<S: Serializer>(api: &mut NoteApi<S>, index: usize, flag: Flag) -> Result<bool> {
    if api.find_by_index(index).is_none() {
        return Err(NoteError::NotFound(index));
    }

    let (applied, verb) = match flag {
        Flag::Archive => (api.archive(index), "archived"),
        Flag::Favourite => (api.favourite(index), "favourited"),
        Flag::Finish => (api.finish(index), "finished"),
    };

    let note = api.find_by_index(index).expect("bounds already checked");
    if applied {
        println!("{} {}: {}", format!("Note {}", verb).green(), index, note);
    } else {
        println!("{} {}: {}", format!("Already {}", verb).yellow(), index, note);
    }
    Ok(applied)
}

#[allow(clippy::too_many_arguments)]
fn handle_count<S: Serializer>(
    api: &NoteApi<S>,
    active: bool,
    archived: bool,
    favourited: bool,
    finished: bool,
    priority: Option<i32>,
    category: Option<String>,
    title: Option<String>,
) {
    let count = if active {
        api.count_active()
    } else if archived {
        api.count_archived()
    } else if favourited {
        api.count_favourited()
    } else if finished {
        api.count_finished()
    } else if let Some(p) = priority {
        api.count_by_priority(p)
    } else if let Some(c) = category {
        api.count_by_category(&c)
    } else if let Some(t) = title {
        api.count_by_title(&t)
    } else {
        api.count()
    };
    println!("{}", count);
}
