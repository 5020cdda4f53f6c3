use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    if GIT_HASH.is_empty() {
        VERSION
    } else {
        Box::leak(format!("{} ({})", VERSION, GIT_HASH).into_boxed_str())
    }
}

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "A local-first personal diary for the command line", long_about = None)]
#[command(version = version_string())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Storage directory (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entries, most recent first
    #[command(alias = "ls")]
    List,

    /// Write a new entry
    #[command(alias = "n")]
    New {
        /// Title of the entry
        #[arg(short, long)]
        title: String,

        /// Body text
        #[arg(short, long, default_value = "")]
        content: String,

        /// Free-form weather label (e.g. "☀️ clear")
        #[arg(short, long)]
        weather: Option<String>,

        /// Free-form mood label (e.g. "😊 happy")
        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Show a single entry in full
    #[command(alias = "v")]
    Show {
        /// Entry id, or a unique prefix of one
        id: String,
    },

    /// Edit an entry; omitted flags keep their current value
    #[command(alias = "e")]
    Edit {
        /// Entry id, or a unique prefix of one
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long)]
        weather: Option<String>,

        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry id, or a unique prefix of one
        id: String,
    },

    /// Show or set configuration (keys: date-format, relative-times)
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}
