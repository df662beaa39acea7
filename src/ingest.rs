//! Sync run orchestration.
//!
//! Sequences one ingestion run end to end, strictly in order:
//! authenticate, resolve the configured note path, fetch, decode, parse
//! entries, emit each entry to the storage sink, clear the note. There
//! is no backtracking and no retry; a failed run is simply re-invoked
//! wholesale by the caller.
//!
//! Failure policy:
//! - failures up to and including the fetch/decode stage end the run
//!   with a typed [`SyncError`];
//! - zero parsed entries ends the run successfully without emitting or
//!   clearing, so a note holding only unparsable lines is left alone;
//! - an individual emission failure is counted and does not stop the
//!   remaining emissions, but it does skip the clear step so the
//!   un-ingested entries survive to the next run (at-least-once);
//! - a clear failure is warned about and swallowed — the note will be
//!   re-ingested next time.

use crate::clear::clear_note;
use crate::client::NoteServerClient;
use crate::config::Config;
use crate::entry::parse_entries;
use crate::error::SyncError;
use crate::resolve::resolve_note;
use crate::storage::StorageSink;
use crate::sync_format::parse_note;

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Opaque name of the resolved note item.
    pub item_name: String,
    pub entries_parsed: usize,
    pub emitted: usize,
    pub failed: usize,
    pub cleared: bool,
}

/// Run one full ingestion pass.
///
/// With `dry_run` set, the run stops after parsing and prints the
/// entries that would be emitted, leaving the note untouched.
pub async fn run_sync(
    config: &Config,
    sink: &dyn StorageSink,
    dry_run: bool,
) -> Result<SyncReport, SyncError> {
    config.notes.validate_required()?;

    let client = NoteServerClient::new(&config.notes)?;
    let token = client
        .authenticate(&config.notes.email, &config.notes.password)
        .await?;

    let item_name = resolve_note(&client, &token, &config.notes.note_path).await?;
    let raw = client.fetch_content(&token, &item_name).await?;
    let note = parse_note(&raw)?;
    let entries = parse_entries(&note.body);

    if entries.is_empty() {
        println!("sync {}", config.notes.note_path);
        println!("  entries found: 0");
        println!("  nothing to emit, note left untouched");
        return Ok(SyncReport {
            item_name,
            entries_parsed: 0,
            emitted: 0,
            failed: 0,
            cleared: false,
        });
    }

    if dry_run {
        println!("sync {} (dry-run)", config.notes.note_path);
        println!("  entries found: {}", entries.len());
        for entry in &entries {
            println!("  {} — {}", entry.name, entry.notes);
        }
        return Ok(SyncReport {
            item_name,
            entries_parsed: entries.len(),
            emitted: 0,
            failed: 0,
            cleared: false,
        });
    }

    let mut emitted = 0usize;
    let mut failed = 0usize;
    for entry in &entries {
        match sink.create_item(entry).await {
            Ok(()) => emitted += 1,
            Err(e) => {
                eprintln!("Warning: failed to emit entry '{}': {}", entry.name, e);
                failed += 1;
            }
        }
    }

    let mut cleared = false;
    if failed == 0 {
        match clear_note(&client, &token, &item_name).await {
            Ok(()) => cleared = true,
            Err(e) => eprintln!("Warning: failed to clear note: {}", e),
        }
    } else {
        eprintln!(
            "Warning: {} emission(s) failed, leaving note uncleared for retry",
            failed
        );
    }

    println!("sync {}", config.notes.note_path);
    println!("  entries found: {}", entries.len());
    println!("  emitted: {}", emitted);
    if failed > 0 {
        println!("  failed: {}", failed);
    }
    println!("  note cleared: {}", if cleared { "yes" } else { "no" });
    println!("ok");

    Ok(SyncReport {
        item_name,
        entries_parsed: entries.len(),
        emitted,
        failed,
        cleared,
    })
}
