//! The link graph: notes as nodes, wiki links as edges.
//!
//! Forward adjacency (outgoing links) and backward adjacency (backlinks)
//! are two views of the same edge set, so the symmetry invariant - b is
//! an outgoing neighbor of a exactly when a is a backlink of b - holds
//! structurally and cannot drift.
//!
//! Links carry set semantics: inserting the same (source, target) pair
//! twice leaves the graph unchanged. Self-loops are stored like any other
//! link. A note referenced as a link target exists as a node even when no
//! document backs it; `mark_materialized` separates real notes from such
//! dangling references, for reporting only.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::types::NoteId;

/// Directed note-link graph with deduplicated edges.
///
/// Uses petgraph for the adjacency structure plus a name index for O(1)
/// note lookup. Built once per analysis run, then read-only.
#[derive(Debug, Default)]
pub struct LinkGraph {
    /// The underlying directed graph
    graph: DiGraph<NoteId, ()>,
    /// Fast lookup: note id -> node index
    index: HashMap<NoteId, NodeIndex>,
    /// Notes with a backing document
    materialized: HashSet<NoteId>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note to the graph, returns its node index.
    /// Idempotent - returns the existing index if already present.
    pub fn add_note(&mut self, note: impl Into<NoteId>) -> NodeIndex {
        let note = note.into();
        if let Some(&idx) = self.index.get(&note) {
            return idx;
        }
        let idx = self.graph.add_node(note.clone());
        self.index.insert(note, idx);
        idx
    }

    /// Add a directed link between two notes.
    /// Both notes are auto-added if not present. Inserting a link that
    /// already exists has no effect.
    pub fn add_link(&mut self, source: impl Into<NoteId>, target: impl Into<NoteId>) {
        let source_idx = self.add_note(source);
        let target_idx = self.add_note(target);
        if self.graph.find_edge(source_idx, target_idx).is_none() {
            self.graph.add_edge(source_idx, target_idx, ());
        }
    }

    /// Record that a note has a backing document.
    /// The note is auto-added if not present.
    pub fn mark_materialized(&mut self, note: impl Into<NoteId>) {
        let note = note.into();
        self.add_note(note.clone());
        self.materialized.insert(note);
    }

    pub fn contains(&self, note: &str) -> bool {
        self.index.contains_key(note)
    }

    /// Whether a backing document exists for this note.
    pub fn is_materialized(&self, note: &str) -> bool {
        self.materialized.contains(note)
    }

    /// A dangling note is referenced as a link target but has no document.
    pub fn is_dangling(&self, note: &str) -> bool {
        self.contains(note) && !self.is_materialized(note)
    }

    /// Number of notes (including dangling references).
    pub fn note_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct links.
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All note ids in the graph, in insertion order.
    pub fn notes(&self) -> impl Iterator<Item = &NoteId> {
        self.graph.node_weights()
    }

    /// Node index for a note, if present.
    pub fn node_index(&self, note: &str) -> Option<NodeIndex> {
        self.index.get(note).copied()
    }

    /// Note id for a node index.
    pub fn note_at(&self, idx: NodeIndex) -> Option<&NoteId> {
        self.graph.node_weight(idx)
    }

    /// Number of distinct notes linking to this note.
    pub fn incoming_count(&self, note: &str) -> usize {
        self.node_index(note)
            .map(|idx| self.graph.neighbors_directed(idx, Direction::Incoming).count())
            .unwrap_or(0)
    }

    /// Number of distinct notes this note links to.
    pub fn outgoing_count(&self, note: &str) -> usize {
        self.node_index(note)
            .map(|idx| self.graph.neighbors_directed(idx, Direction::Outgoing).count())
            .unwrap_or(0)
    }

    /// Number of links reciprocated in both directions: outgoing
    /// neighbors that also link back here.
    pub fn bidirectional_count(&self, note: &str) -> usize {
        let Some(idx) = self.node_index(note) else {
            return 0;
        };
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .filter(|&nbr| self.graph.find_edge(nbr, idx).is_some())
            .count()
    }

    /// Notes linking to this note ("backlinks").
    pub fn backlinks(&self, note: &str) -> Vec<NoteId> {
        let Some(idx) = self.node_index(note) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .filter_map(|nbr| self.graph.node_weight(nbr).cloned())
            .collect()
    }

    /// Notes this note links to.
    pub fn links_from(&self, note: &str) -> Vec<NoteId> {
        let Some(idx) = self.node_index(note) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .filter_map(|nbr| self.graph.node_weight(nbr).cloned())
            .collect()
    }

    /// A note qualifies for scoring when at least one link touches it.
    pub fn qualifies(&self, note: &str) -> bool {
        self.incoming_count(note) > 0 || self.outgoing_count(note) > 0
    }

    /// Number of dangling references (targets with no backing document).
    pub fn dangling_count(&self) -> usize {
        self.notes()
            .filter(|note| !self.materialized.contains(note.as_ref()))
            .count()
    }

    /// Access the underlying petgraph for algorithms.
    pub fn inner(&self) -> &DiGraph<NoteId, ()> {
        &self.graph
    }
}
