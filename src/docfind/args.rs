use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "docfind")]
#[command(about = "Search, filter and sort a doctor directory from the command line", long_about = None)]
#[command(version, long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("GIT_HASH"), " ", env!("GIT_COMMIT_DATE"), ")"
))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the configured doctors endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List doctors, optionally filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Search doctors by name (case-insensitive substring)
        #[arg(short, long)]
        search: Option<String>,

        /// Keep one consultation mode: "video" or "clinic"
        #[arg(short, long)]
        consultation: Option<String>,

        /// Keep doctors with any of these specialties (repeatable)
        #[arg(short = 'p', long = "specialty")]
        specialties: Vec<String>,

        /// Sort key: "fees" or "experience"
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort order: "asc" or "desc"
        #[arg(long)]
        sort_order: Option<String>,

        /// Restore a shared view from its query string instead of flags
        #[arg(
            short,
            long,
            conflicts_with_all = ["search", "consultation", "specialties", "sort_by", "sort_order"]
        )]
        query: Option<String>,

        /// Print the shareable query string under the listing
        #[arg(long)]
        show_query: bool,
    },

    /// Show name suggestions for a partial search term
    Suggest {
        /// Partial doctor name
        term: String,
    },

    /// List every specialty present in the directory
    Specialties,

    /// Get or set configuration
    Config {
        /// Configuration key (endpoint, debounce-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
