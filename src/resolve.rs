//! Note path resolution.
//!
//! The note-server stores items under opaque names in a flat namespace,
//! so a human-readable `"container/title"` path has to be resolved by
//! listing everything, decoding each `.md` item, and matching titles.
//! Container (notebook) titles are matched by prefix, which tolerates
//! emoji suffixes on notebook names; note titles are matched exactly.

use crate::client::{NoteServerClient, SessionToken};
use crate::error::SyncError;
use crate::sync_format::{parse_note, NoteKind, ParsedNote};

/// Resolve a `"container/title"` (or bare `"title"`) path to the opaque
/// name of the best-matching note item.
///
/// Individual items that fail to fetch or decode are skipped; a missing
/// *requested* container is fatal — a note under a named container never
/// matches without that container existing.
///
/// # Errors
///
/// [`SyncError::NotFound`] when no note (or the required container)
/// matches; [`SyncError::Transport`] when the listing itself fails.
pub async fn resolve_note(
    client: &NoteServerClient,
    token: &SessionToken,
    path: &str,
) -> Result<String, SyncError> {
    let (container_name, note_title) = match path.rsplit_once('/') {
        Some((container, title)) => (container, title),
        None => ("", path),
    };

    let items = client.list_children(token).await?;

    let mut container_id: Option<String> = None;
    let mut candidates: Vec<(String, ParsedNote)> = Vec::new();

    for item in items {
        if !item.name.ends_with(".md") {
            continue;
        }
        let raw = match client.fetch_content(token, &item.name).await {
            Ok(raw) => raw,
            Err(_) => continue,
        };
        let parsed = match parse_note(&raw) {
            Ok(parsed) => parsed,
            Err(_) => continue,
        };

        if !container_name.is_empty()
            && parsed.kind == NoteKind::Notebook
            && parsed.title.starts_with(container_name)
        {
            container_id = Some(parsed.id.clone());
        }

        if parsed.kind == NoteKind::Note && parsed.title == note_title {
            candidates.push((item.name, parsed));
        }
    }

    if !container_name.is_empty() && container_id.is_none() {
        return Err(SyncError::NotFound(path.to_string()));
    }

    select_candidate(candidates, container_id.as_deref())
        .ok_or_else(|| SyncError::NotFound(path.to_string()))
}

/// Pick the winning candidate: filter by parent (when a container was
/// requested), then prefer notes with a non-empty body, breaking ties by
/// ascending opaque name.
fn select_candidate(
    candidates: Vec<(String, ParsedNote)>,
    required_parent: Option<&str>,
) -> Option<String> {
    let mut matches: Vec<(String, ParsedNote)> = candidates
        .into_iter()
        .filter(|(_, parsed)| match required_parent {
            Some(parent) => parsed.parent_id == parent,
            None => true,
        })
        .collect();

    matches.sort_by(|a, b| {
        (a.1.body.is_empty(), &a.0).cmp(&(b.1.body.is_empty(), &b.0))
    });
    matches.into_iter().next().map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(body: &str, parent_id: &str) -> ParsedNote {
        ParsedNote {
            title: "Inbox".to_string(),
            body: body.to_string(),
            kind: NoteKind::Note,
            id: "0000000000000000000000000000aaaa".to_string(),
            parent_id: parent_id.to_string(),
            metadata_lines: vec![],
        }
    }

    #[test]
    fn non_empty_body_beats_empty() {
        let candidates = vec![
            ("aaa.md".to_string(), note("", "p1")),
            ("zzz.md".to_string(), note("content", "p1")),
        ];
        assert_eq!(select_candidate(candidates, None), Some("zzz.md".to_string()));
    }

    #[test]
    fn lexicographic_name_breaks_ties_among_non_empty() {
        let candidates = vec![
            ("bbb.md".to_string(), note("x", "p1")),
            ("aaa.md".to_string(), note("y", "p1")),
        ];
        assert_eq!(select_candidate(candidates, None), Some("aaa.md".to_string()));
    }

    #[test]
    fn parent_filter_excludes_other_containers() {
        let candidates = vec![
            ("aaa.md".to_string(), note("x", "other")),
            ("bbb.md".to_string(), note("y", "wanted")),
        ];
        assert_eq!(
            select_candidate(candidates, Some("wanted")),
            Some("bbb.md".to_string())
        );
    }

    #[test]
    fn no_surviving_candidate_is_none() {
        let candidates = vec![("aaa.md".to_string(), note("x", "other"))];
        assert_eq!(select_candidate(candidates, Some("wanted")), None);
        assert_eq!(select_candidate(vec![], None), None);
    }
}
