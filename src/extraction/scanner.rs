//! Vault scanning - from a directory of markdown files to a link graph.
//!
//! The scan is the only ingestion stage with I/O. It completes fully
//! before any ranking computation starts, and each run builds a fresh
//! graph; nothing is shared across runs.
//!
//! Unreadable documents do not abort the scan and are not silently
//! skipped either: each failure is recorded with its path and surfaced
//! in the outcome for the caller to report.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;
use crate::discovery::find_markdown_files;
use crate::extraction::links::{note_name, parse_wiki_links};
use crate::graph::LinkGraph;

/// One document the scanner could not ingest.
#[derive(Debug, Clone)]
pub struct ScanFailure {
    /// Path of the offending document
    pub path: PathBuf,
    /// What went wrong (I/O error text)
    pub reason: String,
}

/// Everything a vault scan produces: the graph plus ingestion telemetry.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The populated link graph
    pub graph: LinkGraph,
    /// Number of markdown documents visited
    pub files_scanned: usize,
    /// Documents that could not be read
    pub failures: Vec<ScanFailure>,
}

/// Scans a vault directory into a [`LinkGraph`].
pub struct VaultScanner {
    config: Config,
}

impl VaultScanner {
    /// Create a scanner with the given vault configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scan the vault rooted at `root`.
    ///
    /// Every markdown file becomes a materialized note named by its file
    /// stem. Every wiki link becomes an edge; targets with no backing
    /// document enter the graph as dangling references.
    ///
    /// Fails only when the root itself is unusable; per-document read
    /// errors land in `failures` and the scan continues.
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome> {
        let files = find_markdown_files(root, &self.config)?;

        let mut graph = LinkGraph::new();
        let mut failures = Vec::new();

        for path in &files {
            let Some(note) = note_name(path) else {
                continue;
            };
            // The document exists even if its content turns out to be
            // unreadable
            graph.mark_materialized(note.as_str());

            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    failures.push(ScanFailure {
                        path: path.clone(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            for target in parse_wiki_links(&content) {
                graph.add_link(note.as_str(), target.as_str());
            }
        }

        Ok(ScanOutcome {
            graph,
            files_scanned: files.len(),
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scan_dir(dir: &Path) -> ScanOutcome {
        VaultScanner::new(Config::default())
            .scan(dir)
            .expect("scan should succeed")
    }

    #[test]
    fn test_scan_builds_graph() -> Result<()> {
        let dir = std::env::temp_dir().join("gravmap_test_scan");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("A.md"), "links to [[B]] and [[Ghost]]")?;
        fs::write(dir.join("B.md"), "back to [[A]]")?;

        let outcome = scan_dir(&dir);
        assert_eq!(outcome.files_scanned, 2);
        assert!(outcome.failures.is_empty());

        let graph = &outcome.graph;
        assert_eq!(graph.note_count(), 3);
        assert!(graph.is_materialized("A"));
        assert!(graph.is_materialized("B"));
        assert!(graph.is_dangling("Ghost"));
        assert_eq!(graph.bidirectional_count("A"), 1);
        assert_eq!(graph.incoming_count("Ghost"), 1);

        fs::remove_dir_all(dir)?;
        Ok(())
    }

    #[test]
    fn test_alias_links_resolve() -> Result<()> {
        let dir = std::env::temp_dir().join("gravmap_test_scan_alias");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("A.md"), "see [[B|the other note]]")?;
        fs::write(dir.join("B.md"), "")?;

        let outcome = scan_dir(&dir);
        assert_eq!(outcome.graph.outgoing_count("A"), 1);
        assert_eq!(outcome.graph.incoming_count("B"), 1);

        fs::remove_dir_all(dir)?;
        Ok(())
    }

    #[test]
    fn test_linkless_notes_still_materialize() -> Result<()> {
        let dir = std::env::temp_dir().join("gravmap_test_scan_isolated");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("Island.md"), "no links here")?;

        let outcome = scan_dir(&dir);
        assert_eq!(outcome.files_scanned, 1);
        assert!(outcome.graph.contains("Island"));
        assert!(!outcome.graph.qualifies("Island"));

        fs::remove_dir_all(dir)?;
        Ok(())
    }

    #[test]
    fn test_nonexistent_root_fails() {
        let result = VaultScanner::new(Config::default())
            .scan(Path::new("/nonexistent/vault/xyz"));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_markdown_ignored() -> Result<()> {
        let dir = std::env::temp_dir().join("gravmap_test_scan_filter");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("A.md"), "[[B]]")?;
        fs::write(dir.join("data.json"), "{\"not\": \"a note\"}")?;

        let outcome = scan_dir(&dir);
        assert_eq!(outcome.files_scanned, 1);
        assert!(!outcome.graph.contains("data"));

        fs::remove_dir_all(dir)?;
        Ok(())
    }
}
