//! Link graph data structures.
//!
//! The graph is ingestion-agnostic - it just stores notes and deduplicated
//! directed links. The vault scanner populates it; PageRank and the
//! gravity scorer consume it.

mod store;

pub use store::LinkGraph;
