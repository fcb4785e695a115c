//! Ranking pipeline - from the link graph to gravity scores.
//!
//! The ranking system combines:
//! - PageRank on the note link graph (network authority)
//! - Logarithmic scaling of raw link counts (volume damping)
//! - Sweet-spot bonuses for meaningful scale, curation, and conversation
//! - 95th-percentile anchoring so weights adapt to each vault
//! - Name-pattern categorization for report grouping

mod category;
mod gravity;
mod pagerank;
mod percentile;

pub use category::categorize;
pub use gravity::GravityScorer;
pub use pagerank::PageRanker;
pub use percentile::p95;
