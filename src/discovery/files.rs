//! Markdown discovery with parallel traversal.
//!
//! This module finds the documents that make up a vault:
//! - Respects .gitignore automatically via the `ignore` crate
//! - Filters to the `.md` extension (a vault's notes are markdown)
//! - Skips non-content folders (.obsidian, .git, node_modules, ...)
//! - Uses parallel walking for speed on large vaults
//! - Returns deterministic (sorted) results
//!
//! The `ignore` crate provides battle-tested .gitignore handling from
//! ripgrep; WalkBuilder with threads(0) auto-detects parallelism.
//! Sorting keeps every downstream stage reproducible across runs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::WalkBuilder;

use crate::config::Config;

/// Find all markdown documents under a vault root.
///
/// ## Arguments
/// - `root`: vault directory to scan (a single .md file passes through)
/// - `config`: supplies the skip-folder list
///
/// ## Returns
/// Sorted vector of paths to markdown documents.
pub fn find_markdown_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    // Handle single file case early
    if root.is_file() {
        return Ok(if is_markdown(root) {
            vec![root.to_path_buf()]
        } else {
            vec![]
        });
    }

    if !root.is_dir() {
        anyhow::bail!("Vault path does not exist: {}", root.display());
    }

    let skip_folders = config.skip_folders();

    // threads(0) = auto-detect based on CPU count
    let walker = WalkBuilder::new(root)
        .hidden(false)          // .obsidian etc. are filtered by name, not hiddenness
        .git_ignore(true)       // Respect .gitignore
        .git_global(true)       // Respect global gitignore
        .git_exclude(true)      // Respect .git/info/exclude
        .require_git(false)     // Vaults usually aren't git repositories
        .follow_links(false)    // Don't follow symlinks (avoid cycles)
        .threads(0)
        .build_parallel();

    let files = std::sync::Mutex::new(Vec::new());

    walker.run(|| {
        Box::new(|entry_result| {
            match entry_result {
                Ok(entry) => {
                    let path = entry.path();

                    if !path.is_file() {
                        return ignore::WalkState::Continue;
                    }

                    if !is_markdown(path) || in_skipped_folder(path, &skip_folders) {
                        return ignore::WalkState::Continue;
                    }

                    if let Ok(mut files) = files.lock() {
                        files.push(path.to_path_buf());
                    }

                    ignore::WalkState::Continue
                }
                // Skip entries we can't read (permissions, broken symlinks);
                // unreadable *documents* are reported later by the scanner
                Err(_) => ignore::WalkState::Continue,
            }
        })
    });

    let mut files = files
        .into_inner()
        .map_err(|_| anyhow::anyhow!("Failed to unwrap mutex"))?;

    // Sort for reproducibility: same vault, same ordering, same report
    files.sort();

    Ok(files)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

/// Check whether any path component names a skipped folder.
/// Matches whole components, so "Notes" never collides with
/// "node_modules".
fn in_skipped_folder(path: &Path, skip_folders: &[String]) -> bool {
    path.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .map(|name| skip_folders.iter().any(|skip| skip == name))
            .unwrap_or(false)
    })
}
