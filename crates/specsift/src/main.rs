mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            subject,
            query,
            limit,
            root,
        } => commands::search::run(&subject, &query, limit, &root),
        Commands::Chunks { subject, root } => commands::chunks::run(&subject, &root),
        Commands::Keywords { query } => commands::keywords::run(&query),
        Commands::Subjects { root } => commands::subjects::run(&root),
        Commands::Version => commands::version::run(),
    }
}
