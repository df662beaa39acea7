//! # notesync
//!
//! Ingest structured entries from a Joplin-style note server into a
//! storage CRUD API.
//!
//! A run authenticates against the note-server, resolves a configured
//! `"container/title"` path over the server's flat namespace of opaquely
//! named items, fetches and decodes the matching note, parses its body
//! into semicolon-delimited entries, posts each entry to the storage API,
//! and finally rewrites the note with its body removed so the entries are
//! not ingested twice.
//!
//! ```text
//! ┌───────────┐   ┌──────────┐   ┌─────────┐   ┌─────────┐
//! │ Note      │──▶│ Resolve  │──▶│ Parse   │──▶│ Storage │
//! │ server    │   │ + fetch  │   │ entries │   │ API     │
//! └───────────┘   └──────────┘   └────┬────┘   └─────────┘
//!       ▲                             │
//!       └──────── clear body ─────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML credentials and settings |
//! | [`client`] | Note-server HTTP calls: auth, catalog, content |
//! | [`sync_format`] | Flat-file sync format codec |
//! | [`resolve`] | Path → opaque item name resolution |
//! | [`entry`] | Semicolon-delimited entry grammar |
//! | [`clear`] | Body-clearing rewrite with timestamp refresh |
//! | [`storage`] | Storage emission seam |
//! | [`ingest`] | The sequential run and its failure policy |
//! | [`error`] | Typed error taxonomy |

pub mod clear;
pub mod client;
pub mod config;
pub mod entry;
pub mod error;
pub mod ingest;
pub mod resolve;
pub mod storage;
pub mod sync_format;
