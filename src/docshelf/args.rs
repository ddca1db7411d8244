use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "docshelf")]
#[command(version = get_version())]
#[command(about = "A positional document catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog root directory (defaults to the platform data dir)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add files to the end of the shelf
    #[command(alias = "a")]
    Add {
        /// Files to add
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },

    /// List documents in shelf order
    #[command(alias = "ls")]
    List {
        /// Only show documents whose name contains the term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one document's details
    Show {
        /// Shelf position of the document
        position: usize,
    },

    /// Move a document to a new position
    #[command(alias = "mv")]
    Move {
        /// Current shelf position
        position: usize,

        /// Target shelf position
        new_position: usize,
    },

    /// Delete one or more documents
    #[command(alias = "rm")]
    Delete {
        /// Shelf positions of the documents (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Print the stored blob path of one or more documents
    Path {
        /// Shelf positions of the documents
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Verify and repair the shelf order
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., content-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize a catalog root
    Init,
}
