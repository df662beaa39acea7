//! Codec for the note-server's flat sync-item format.
//!
//! Each item the server stores is a single text blob laid out as:
//!
//! ```text
//! Title line
//!
//! body line 1
//! body line 2
//!
//! id: 0a1b2c...        <- metadata boundary (32 lowercase hex chars)
//! parent_id: ...
//! created_time: ...
//! type_: 1
//! ```
//!
//! [`parse_note`] splits a blob into title, body, and a verbatim metadata
//! line sequence; [`rebuild_note`] is the inverse used when writing an
//! item back. The two are intentionally asymmetric: parsing tolerates any
//! number of blank separator lines, rebuilding always emits exactly one,
//! so only already-canonical input round-trips byte-identical.

use std::collections::HashMap;

use crate::error::SyncError;

/// Item kind derived from the `type_` metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// `type_: 1` — an ordinary note.
    Note,
    /// `type_: 2` — a notebook (folder) scoping note titles.
    Notebook,
    /// Anything else, or a missing/unparsable `type_` field.
    Other,
}

/// Decoded form of one sync item.
///
/// `metadata_lines` is kept verbatim and ordered so that a later
/// [`rebuild_note`] reproduces the metadata block byte-for-byte.
#[derive(Debug, Clone)]
pub struct ParsedNote {
    pub title: String,
    pub body: String,
    pub kind: NoteKind,
    pub id: String,
    pub parent_id: String,
    pub metadata_lines: Vec<String>,
}

/// Returns true if `line` is a metadata-boundary line: `id: ` followed by
/// exactly 32 lowercase hex characters (trailing whitespace tolerated).
fn is_boundary_line(line: &str) -> bool {
    match line.strip_prefix("id: ") {
        Some(rest) => {
            let value = rest.trim_end();
            value.len() == 32 && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        }
        None => false,
    }
}

/// Parse a raw sync item into a [`ParsedNote`].
///
/// The metadata boundary is the first line from index 1 onward that
/// matches the `id: <32 hex>` pattern; everything strictly between the
/// title and the boundary is body, stripped of leading and trailing blank
/// lines. A missing boundary leaves the body covering the whole remainder
/// and the kind as [`NoteKind::Other`].
///
/// # Errors
///
/// Returns [`SyncError::Format`] if the input has no lines at all.
pub fn parse_note(raw: &str) -> Result<ParsedNote, SyncError> {
    if raw.is_empty() {
        return Err(SyncError::Format("empty note text".to_string()));
    }
    let lines: Vec<&str> = raw.trim_end_matches('\n').split('\n').collect();
    let title = lines[0].to_string();

    let mut metadata_start = lines.len();
    for (i, line) in lines.iter().enumerate().skip(1) {
        if is_boundary_line(line) {
            metadata_start = i;
            break;
        }
    }

    let mut metadata: HashMap<&str, &str> = HashMap::new();
    for line in &lines[metadata_start..] {
        if let Some((key, value)) = line.split_once(':') {
            metadata.insert(key.trim(), value.trim());
        }
    }

    let mut body_start = 1;
    while body_start < metadata_start && lines[body_start].trim().is_empty() {
        body_start += 1;
    }
    let mut body_end = metadata_start;
    while body_end > body_start && lines[body_end - 1].trim().is_empty() {
        body_end -= 1;
    }
    let body = if body_start < body_end {
        lines[body_start..body_end].join("\n")
    } else {
        String::new()
    };

    let type_num: i64 = metadata
        .get("type_")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let kind = match type_num {
        1 => NoteKind::Note,
        2 => NoteKind::Notebook,
        _ => NoteKind::Other,
    };

    Ok(ParsedNote {
        title,
        body,
        kind,
        id: metadata.get("id").unwrap_or(&"").to_string(),
        parent_id: metadata.get("parent_id").unwrap_or(&"").to_string(),
        metadata_lines: lines[metadata_start..].iter().map(|s| s.to_string()).collect(),
    })
}

/// Serialize a title, body, and verbatim metadata block back into the
/// sync-item layout, with a trailing newline.
pub fn rebuild_note(title: &str, body: &str, metadata_lines: &[String]) -> String {
    let mut parts: Vec<&str> = if body.is_empty() {
        vec![title, "", ""]
    } else {
        vec![title, "", body, ""]
    };
    parts.extend(metadata_lines.iter().map(|s| s.as_str()));
    let mut out = parts.join("\n");
    out.push('\n');
    out
}
