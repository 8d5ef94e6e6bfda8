// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use application::{LanguageSettings, NoteRepository, NoteStore, NoteViewModel};
use cli::args::{Args, Command, NoteFields};
use domain::{Note, NoteColor};
use infrastructure::config::default_config_path;
use infrastructure::{Config, ContentRenderer, SqliteNoteStore, TomlPreferences};
use ports::HtmlPresenter;
use tracing::{debug, info};
use util::media::resolve_image_reference;
use util::text::{extract_first_line, format_local_datetime, truncate_chars};

const PREVIEW_CHARS: usize = 40;

pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Execute `args`, writing user-facing output to `out`
pub fn run_with_output<W: Write>(args: Args, out: &mut W) -> Result<()> {
    debug!(?args, "Starting notekeep with arguments");

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    match args.command {
        Command::New { fields } => {
            handle_new(&mut open_view_model(&args.database, &config)?, &fields, out)
        }
        Command::Edit {
            note_id,
            fields,
            remove_image,
            remove_link,
        } => handle_edit(
            &mut open_view_model(&args.database, &config)?,
            note_id,
            &fields,
            remove_image,
            remove_link,
            out,
        ),
        Command::Delete { note_id } => {
            handle_delete(&mut open_view_model(&args.database, &config)?, note_id, out)
        }
        Command::List { search } => handle_list(
            &mut open_view_model(&args.database, &config)?,
            search.as_deref(),
            &config,
            out,
        ),
        Command::View { note_id, json } => handle_view(
            &mut open_view_model(&args.database, &config)?,
            note_id,
            json,
            &config,
            out,
        ),
        Command::Language { code } => handle_language(&config, code.as_deref(), out),
    }
}

fn open_view_model(
    database: &Option<PathBuf>,
    config: &Config,
) -> Result<NoteViewModel<SqliteNoteStore>> {
    let database_path = resolve_database_path(database.clone(), config)?;
    let store = SqliteNoteStore::open(&database_path)?;
    Ok(NoteViewModel::new(NoteRepository::new(store)))
}

fn resolve_database_path(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match flag {
        Some(path) => {
            debug!(?path, "Using provided database path");
            Ok(path)
        }
        None => config.database_path(),
    }
}

/// Copy the given fields onto the current draft
fn apply_fields<S: NoteStore>(vm: &mut NoteViewModel<S>, fields: &NoteFields) -> Result<()> {
    if let Some(title) = &fields.title {
        vm.set_title(title)?;
    }
    if let Some(body) = &fields.body {
        vm.set_body(body)?;
    }
    if let Some(color) = &fields.color {
        vm.set_color(color.parse::<NoteColor>()?)?;
    }
    if let Some(image) = &fields.image {
        vm.attach_image(&resolve_image_reference(image)?)?;
    }
    if let Some(link) = &fields.link {
        vm.attach_link(link)?;
    }
    Ok(())
}

fn handle_new<S: NoteStore, W: Write>(
    vm: &mut NoteViewModel<S>,
    fields: &NoteFields,
    out: &mut W,
) -> Result<()> {
    vm.new_note();
    apply_fields(vm, fields)?;
    let note = vm.save()?;
    writeln!(out, "Created note {}: {}", note.id, note.title)?;
    Ok(())
}

fn handle_edit<S: NoteStore, W: Write>(
    vm: &mut NoteViewModel<S>,
    note_id: i64,
    fields: &NoteFields,
    remove_image: bool,
    remove_link: bool,
    out: &mut W,
) -> Result<()> {
    vm.edit_note(note_id)?;
    apply_fields(vm, fields)?;
    if remove_image {
        vm.remove_image()?;
    }
    if remove_link {
        vm.remove_link()?;
    }
    let note = vm.save()?;
    writeln!(out, "Updated note {}: {}", note.id, note.title)?;
    Ok(())
}

fn handle_delete<S: NoteStore, W: Write>(
    vm: &mut NoteViewModel<S>,
    note_id: i64,
    out: &mut W,
) -> Result<()> {
    vm.edit_note(note_id)?;
    vm.delete()?;
    writeln!(out, "Deleted note {}", note_id)?;
    Ok(())
}

fn handle_list<S: NoteStore, W: Write>(
    vm: &mut NoteViewModel<S>,
    search: Option<&str>,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let live = match search {
        Some(pattern) => vm.search(pattern)?,
        None => vm.all_notes()?,
    };
    let notes = live.current();
    info!(count = notes.len(), "Listing notes");

    if notes.is_empty() {
        writeln!(out, "No notes")?;
        return Ok(());
    }
    for note in &notes {
        writeln!(out, "{}", list_line(note, &config.display.datetime_format))?;
    }
    Ok(())
}

fn list_line(note: &Note, datetime_format: &str) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        note.id,
        format_local_datetime(&note.timestamp, datetime_format),
        note.title,
        truncate_chars(&extract_first_line(&note.body), PREVIEW_CHARS)
    )
}

fn handle_view<S: NoteStore, W: Write>(
    vm: &mut NoteViewModel<S>,
    note_id: i64,
    json: bool,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    info!(note_id, "Viewing note");
    let note = vm.repository().get_note(note_id)?;
    debug!(?note, "Retrieved note");

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&note)?)?;
        return Ok(());
    }

    let presenter = HtmlPresenter::with_datetime_format(&config.display.datetime_format);
    let html = presenter.render(&note);

    let mut renderer = ContentRenderer::new();
    let temp_path = renderer.create_temp_file(&html)?;
    renderer.open_in_browser(&temp_path)?;
    Ok(())
}

fn handle_language<W: Write>(config: &Config, code: Option<&str>, out: &mut W) -> Result<()> {
    let preferences = TomlPreferences::load(config.preferences_path()?)?;
    let mut settings = LanguageSettings::new(preferences);

    match code {
        Some(code) => {
            let changed = settings.select(code)?;
            let language = settings.current();
            if changed {
                writeln!(out, "Language set to {} ({})", language.title(), language.code())?;
            } else {
                writeln!(out, "Language is already {} ({})", language.title(), language.code())?;
            }
        }
        None => {
            for choice in settings.choices() {
                let marker = if choice.selected { "*" } else { " " };
                writeln!(
                    out,
                    "{} {}\t{}\t{}",
                    marker,
                    choice.language.code(),
                    choice.language.title(),
                    choice.language.hint()
                )?;
            }
        }
    }
    Ok(())
}
