//! Vault file discovery.
//!
//! Uses the `ignore` crate to respect .gitignore and walk directories
//! efficiently with parallel traversal.

mod files;

pub use files::find_markdown_files;
