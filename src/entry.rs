//! Semicolon-delimited entry grammar.
//!
//! A note body holds one entry per line:
//!
//! ```text
//! Name; context[; follow-up info[; follow-up date]]
//! # comment lines and blank lines are ignored
//! ```
//!
//! The context and any follow-up information are composed into a single
//! `notes` string; extra fields beyond the fourth are ignored.

/// One ingested record. Identity is positional only; ownership moves to
/// the storage sink on emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub notes: String,
}

/// Parse a note body into entries, preserving source line order.
///
/// Lines that are empty, `#`-prefixed, have fewer than two fields, or
/// have an empty name after trimming are skipped silently. No
/// deduplication is performed.
pub fn parse_entries(text: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        if fields.len() < 2 {
            continue;
        }
        let name = fields[0];
        if name.is_empty() {
            continue;
        }
        let context = fields[1];
        let info = fields.get(2).copied().unwrap_or("");
        let date = fields.get(3).copied().unwrap_or("");

        let notes = if info.is_empty() {
            context.to_string()
        } else if date.is_empty() {
            format!("{}. Follow up: {}", context, info)
        } else {
            format!("{}. Follow up (by {}): {}", context, date, info)
        };

        entries.push(Entry {
            name: name.to_string(),
            notes,
        });
    }
    entries
}
