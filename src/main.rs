//! # notesync CLI
//!
//! ```bash
//! notesync --config ./config/notesync.toml sync            # run one ingestion pass
//! notesync --config ./config/notesync.toml sync --dry-run  # parse only, touch nothing
//! notesync --config ./config/notesync.toml resolve         # print the resolved item name
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use notesync::client::NoteServerClient;
use notesync::config::load_config;
use notesync::ingest::run_sync;
use notesync::resolve::resolve_note;
use notesync::storage::HttpStorage;

/// notesync — ingest structured entries from a Joplin-style note server
/// into a storage API.
#[derive(Parser)]
#[command(
    name = "notesync",
    about = "Ingest structured entries from a note server into a storage API",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/notesync.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one ingestion pass: fetch the configured note, emit its
    /// entries to storage, and clear the note body.
    Sync {
        /// Parse and print entries without emitting or clearing.
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve the configured note path and print the opaque item name.
    ///
    /// Diagnostic command for verifying credentials and the note path
    /// without changing anything.
    Resolve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Sync { dry_run } => {
            let sink = HttpStorage::new(&config.storage)?;
            let report = run_sync(&config, &sink, dry_run).await?;
            if report.failed > 0 {
                std::process::exit(1);
            }
        }
        Commands::Resolve => {
            config.notes.validate_required()?;
            let client = NoteServerClient::new(&config.notes)?;
            let token = client
                .authenticate(&config.notes.email, &config.notes.password)
                .await?;
            let item_name = resolve_note(&client, &token, &config.notes.note_path).await?;
            println!("{}", item_name);
        }
    }

    Ok(())
}
