//! Link extraction from vault documents.
//!
//! This module handles:
//! - Parsing wiki-link syntax out of markdown content
//! - Resolving alias links to their targets
//! - Scanning a whole vault into a [`LinkGraph`](crate::graph::LinkGraph)
//!   while collecting per-document failures
//!
//! The scanner owns all ingestion I/O; nothing downstream of it reads a
//! file.

mod links;
mod scanner;

pub use links::{note_name, parse_wiki_links};
pub use scanner::{ScanFailure, ScanOutcome, VaultScanner};
