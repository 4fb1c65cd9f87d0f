use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "tablo")]
#[command(about = "Single-user note and task board with due-date reminders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the board's JSON documents
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the whole board
    Board {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Poll for due tasks and ring them in the terminal
    Watch {
        /// Run a single check and exit
        #[arg(long)]
        once: bool,

        /// Override the poll interval
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Create a note
    Add {
        title: String,

        #[arg(default_value = "")]
        content: String,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Rm { id: Uuid },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Create a task
    Add {
        title: String,

        #[arg(default_value = "")]
        content: String,

        /// Due date: RFC 3339, "YYYY-MM-DD HH:MM", or "YYYY-MM-DD" (UTC)
        #[arg(long, value_name = "WHEN")]
        due: Option<String>,

        /// Repeat rule, e.g. "1 month" or "3 days" (requires --due)
        #[arg(long, value_name = "RULE")]
        every: Option<String>,
    },

    /// List tasks
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Complete a task (a repeating task is renewed)
    Done { id: Uuid },

    /// Silence a ringing task until the next poll
    Ack { id: Uuid },

    /// Delete a task
    Rm { id: Uuid },
}
