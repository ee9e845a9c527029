use clap::{Parser, Subcommand};

pub const DEFAULT_ROOT: &str = "data/specs";

#[derive(Parser)]
#[command(name = "specsift")]
#[command(version)]
#[command(about = "Keyword retrieval over qualification specification text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank stored specification passages against a query
    Search {
        /// Subject identifier (resolves to <root>/<subject>.txt)
        subject: String,

        /// Free-text query
        query: String,

        /// Maximum passages to return
        #[arg(short, long, default_value_t = 3)]
        limit: usize,

        /// Storage root for specification text
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: String,
    },

    /// Show chunk boundaries for a stored specification
    Chunks {
        /// Subject identifier
        subject: String,

        /// Storage root for specification text
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: String,
    },

    /// Show the keyword sequence extracted from a query
    Keywords {
        /// Free-text query
        query: String,
    },

    /// List subjects with stored specification text
    Subjects {
        /// Storage root for specification text
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: String,
    },

    /// Print version information
    Version,
}
