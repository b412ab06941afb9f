// src/cli/args.rs
use crate::domain::{AiTool, NoteId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Backend origin, e.g. http://localhost:8080 (overrides the config file)
    #[arg(short, long, value_name = "URL", global = true)]
    pub backend: Option<String>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all notes
    List {
        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search notes by title or content
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    View {
        #[arg(value_name = "NOTE_ID", value_parser = NoteId::parse)]
        note_id: NoteId,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note, then list all notes
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(long, default_value = "")]
        content: String,
    },

    /// Edit a note; omitted fields keep their current value
    Edit {
        #[arg(value_name = "NOTE_ID", value_parser = NoteId::parse)]
        note_id: NoteId,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a note after confirmation
    Delete {
        #[arg(value_name = "NOTE_ID", value_parser = NoteId::parse)]
        note_id: NoteId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Run an AI tool (summarize, ideas, improve, answer) on text
    Ai {
        #[arg(value_name = "TOOL")]
        tool: AiTool,

        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Render a page and open it in the browser
    Open {
        /// Route such as /notes, /notes/3 or /notes?query=milk
        #[arg(value_name = "ROUTE", default_value = "/")]
        route: String,
    },

    /// Serve the web interface
    Serve {
        /// Listen address (overrides the config file)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}
