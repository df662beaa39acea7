//! Clearing an ingested note.
//!
//! After a note's entries have been emitted, its body is removed so the
//! same entries are not ingested again on the next run. The rewrite
//! operates on the raw text rather than the decoded form: everything
//! between the end of the title section and the metadata boundary is
//! dropped, the metadata block is preserved byte-for-byte, and only the
//! two update timestamps are refreshed.
//!
//! There is no concurrency guard over the fetch/write gap; an edit made
//! to the note in between is silently discarded. Known limitation.

use chrono::Utc;

use crate::client::{NoteServerClient, SessionToken};
use crate::error::SyncError;

/// Find the byte offset of the `\n\nid: <32 lowercase hex>` metadata
/// boundary in raw note text.
fn find_metadata_boundary(raw: &str) -> Option<usize> {
    const PAT: &str = "\n\nid: ";
    let mut search = 0;
    while let Some(pos) = raw[search..].find(PAT) {
        let start = search + pos;
        let value = &raw.as_bytes()[start + PAT.len()..];
        if value.len() >= 32
            && value[..32]
                .iter()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return Some(start);
        }
        search = start + 1;
    }
    None
}

/// Replace the remainder of every `{key}<value>` line with `value`,
/// leaving all other lines untouched.
fn replace_line_value(text: &str, key: &str, value: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.starts_with(key) {
                format!("{}{}", key, value)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrite raw note text with its body removed and both update
/// timestamps set to `now_stamp` (`YYYY-MM-DDTHH:MM:SS.000Z`).
///
/// The title section ends immediately after the first double newline;
/// the metadata boundary must match the same `id: <32 hex>` pattern used
/// in parsing, here located in the raw text.
///
/// # Errors
///
/// [`SyncError::Boundary`] if either boundary cannot be located. This is
/// a hard failure of the clear step only, not of the whole run.
pub fn clear_text(raw: &str, now_stamp: &str) -> Result<String, SyncError> {
    let title_end = raw.find("\n\n").ok_or(SyncError::Boundary)? + 2;
    let meta_start = find_metadata_boundary(raw).ok_or(SyncError::Boundary)?;

    let cleared = format!("{}{}", &raw[..title_end], &raw[meta_start..]);
    let cleared = replace_line_value(&cleared, "updated_time: ", now_stamp);
    let cleared = replace_line_value(&cleared, "user_updated_time: ", now_stamp);
    Ok(cleared)
}

/// Fetch an item, clear its body, and write it back as opaque bytes.
pub async fn clear_note(
    client: &NoteServerClient,
    token: &SessionToken,
    item_name: &str,
) -> Result<(), SyncError> {
    let raw = client.fetch_content(token, item_name).await?;
    let now = Utc::now().format("%Y-%m-%dT%H:%M:%S.000Z").to_string();
    let cleared = clear_text(&raw, &now)?;
    client.put_content(token, item_name, cleared.into_bytes()).await
}
