//! Wiki-link parsing.
//!
//! Notes reference each other with `[[Target]]` syntax; `[[Target|shown
//! text]]` displays an alias but still links to `Target`. Link targets
//! are whatever sits between the brackets up to the first `|`, trimmed.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Match wiki links: `[[anything but a closing bracket]]`.
/// Cached as static to avoid recompilation on every document.
static WIKI_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("Invalid wiki-link regex"));

/// Extract resolved link targets from document content.
///
/// Alias syntax resolves to the target half; surrounding whitespace is
/// trimmed; links that trim to nothing are dropped. Duplicates are kept -
/// the graph deduplicates on insert.
pub fn parse_wiki_links(content: &str) -> Vec<String> {
    WIKI_LINK
        .captures_iter(content)
        .filter_map(|cap| {
            let raw = cap.get(1)?.as_str();
            let target = raw.split('|').next().unwrap_or(raw).trim();
            if target.is_empty() {
                None
            } else {
                Some(target.to_string())
            }
        })
        .collect()
}

/// Note identifier for a document path: the file stem.
/// `Notes/Deep Work.md` names the note "Deep Work".
pub fn note_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
}
