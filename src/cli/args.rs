// src/cli/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the note database (optional)
    #[arg(short, long, value_name = "DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Path to the config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Editable note fields shared by `new` and `edit`
#[derive(ClapArgs, Debug, Clone, Default, PartialEq)]
pub struct NoteFields {
    /// Note title, unique among notes
    #[arg(short, long)]
    pub title: Option<String>,

    /// Note text
    #[arg(short, long)]
    pub body: Option<String>,

    /// Indicator color as #RRGGBB or #AARRGGBB
    #[arg(short, long, value_name = "HEX")]
    pub color: Option<String>,

    /// Image file path or URI to attach
    #[arg(short, long, value_name = "IMAGE")]
    pub image: Option<String>,

    /// Web link to attach
    #[arg(short, long, value_name = "URL")]
    pub link: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new note
    New {
        #[command(flatten)]
        fields: NoteFields,
    },

    /// Change an existing note
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        #[command(flatten)]
        fields: NoteFields,

        /// Detach the image
        #[arg(long, conflicts_with = "image")]
        remove_image: bool,

        /// Detach the web link
        #[arg(long, conflicts_with = "link")]
        remove_link: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// List notes, most recent first
    List {
        /// Only notes whose title or text contains this
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Show a note in the browser
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output note as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// Show the UI languages or switch to another one
    Language {
        /// Language code to switch to (en, ru, ar, es, fr, zh)
        #[arg(value_name = "CODE")]
        code: Option<String>,
    },
}
