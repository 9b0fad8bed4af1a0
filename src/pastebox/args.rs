use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pastebox")]
#[command(version = env!("PASTEBOX_LONG_VERSION"))]
#[command(about = "Keep, search and reuse short text pastes locally", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new paste
    #[command(visible_alias = "new", alias = "n")]
    Create {
        /// Title of the paste
        #[arg(required = false)]
        title: Option<String>,

        /// Content of the paste
        #[arg(required = false)]
        content: Option<String>,

        /// Use this id instead of generating one
        #[arg(long)]
        id: Option<String>,

        /// Read the content from stdin
        #[arg(long, conflicts_with = "content")]
        stdin: bool,
    },

    /// List pastes
    #[command(alias = "ls")]
    List {
        /// Only show pastes matching this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search pastes by title and content
    Search { term: String },

    /// View one or more pastes in full
    #[command(alias = "v")]
    View {
        /// Ids of the pastes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Change the title and/or content of a paste
    #[command(visible_alias = "edit", alias = "e")]
    Update {
        /// Id of the paste
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,

        /// Read the new content from stdin
        #[arg(long, conflicts_with = "content")]
        stdin: bool,
    },

    /// Delete one or more pastes
    #[command(alias = "rm")]
    Delete {
        /// Ids of the pastes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete every paste and remove the stored file
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Print the location of the paste file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (slot, preview-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
