//! Note categorization from name patterns.
//!
//! Classification is an ordered rule table evaluated top to bottom with
//! first match winning. The order is semantically significant: a note
//! named "Movies MOC" is a Map of Content, not a media note, because the
//! MOC rule sits earlier in the table. Reordering the table changes
//! classification for every name matching more than one rule.

use crate::types::Category;

type Predicate = fn(&str) -> bool;

/// Ordered classification rules - first match wins.
const RULES: &[(Predicate, Category)] = &[
    (is_lyt, Category::LytCourses),
    (is_moc, Category::Mocs),
    (is_map, Category::Maps),
    (is_tool, Category::Tools),
    (is_media, Category::Media),
    (is_workspace, Category::Workspaces),
    (is_productivity, Category::Productivity),
];

const MEDIA_WORDS: &[&str] = &["Movie", "Book", "Series", "Drama", "Action", "Comedy"];
const WORKSPACE_WORDS: &[&str] = &["Workshop", "Home", "Pro", "Hub"];
const PRODUCTIVITY_WORDS: &[&str] = &["Project", "Template", "Record"];

fn contains_any(name: &str, words: &[&str]) -> bool {
    words.iter().any(|word| name.contains(word))
}

fn is_lyt(name: &str) -> bool {
    name.contains("⚗️") || name.contains("LYT")
}

fn is_moc(name: &str) -> bool {
    name.contains("MOC")
}

fn is_map(name: &str) -> bool {
    name.contains("Map")
}

fn is_tool(name: &str) -> bool {
    name.contains("Obsidian")
}

fn is_media(name: &str) -> bool {
    contains_any(name, MEDIA_WORDS)
}

fn is_workspace(name: &str) -> bool {
    contains_any(name, WORKSPACE_WORDS)
}

fn is_productivity(name: &str) -> bool {
    contains_any(name, PRODUCTIVITY_WORDS)
}

/// Classify a note by its name. Falls through to `Category::Other` when
/// no rule matches.
pub fn categorize(name: &str) -> Category {
    RULES
        .iter()
        .find(|(predicate, _)| predicate(name))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Other)
}
