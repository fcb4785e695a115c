//! PageRank over the note link graph.
//!
//! Computes an authority distribution via synchronous power iteration:
//! every round reads only the previous round's values, and the iteration
//! count is the termination criterion (an optional tolerance enables an
//! early exit for experimentation).
//!
//! One behavior is load-bearing for score compatibility: a note with no
//! outgoing links contributes its mass to nothing. There is no
//! redistribution of dangling mass across the graph, so the total rank
//! generally sums to less than 1 whenever zero-outdegree notes exist.
//! Vaults are full of such notes (every dangling reference is one), and
//! historical score totals depend on the leaked mass staying leaked.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::Direction;

use crate::graph::LinkGraph;
use crate::types::{NoteId, PageRankConfig};

/// PageRank calculator for note authority.
pub struct PageRanker {
    config: PageRankConfig,
}

impl PageRanker {
    /// Create a new PageRanker with the given configuration.
    pub fn new(config: PageRankConfig) -> Self {
        Self { config }
    }

    /// Compute PageRank scores for every note in the graph.
    ///
    /// The algorithm:
    /// 1. Initialize every note at 1/n
    /// 2. For each round, for each note v:
    ///    `rank'(v) = (1 - d)/n + d * sum over backlinks u of rank(u) / outdegree(u)`
    /// 3. Swap in the new values only at the round boundary
    ///
    /// Zero-outdegree backlinks contribute nothing (leakage, see module
    /// docs). Returns an empty map for an empty graph.
    pub fn compute(&self, graph: &LinkGraph) -> HashMap<NoteId, f64> {
        let inner = graph.inner();
        let n = inner.node_count();
        if n == 0 {
            return HashMap::new();
        }

        let damping = self.config.damping;
        let base = (1.0 - damping) / n as f64;

        // Outdegrees never change between rounds
        let out_degree: HashMap<NodeIndex, usize> = inner
            .node_indices()
            .map(|idx| {
                (idx, inner.neighbors_directed(idx, Direction::Outgoing).count())
            })
            .collect();

        let init = 1.0 / n as f64;
        let mut ranks: HashMap<NodeIndex, f64> =
            inner.node_indices().map(|idx| (idx, init)).collect();
        let mut new_ranks = ranks.clone();

        for _round in 0..self.config.iterations {
            for node in inner.node_indices() {
                let mut incoming_sum = 0.0;

                for pred in inner.neighbors_directed(node, Direction::Incoming) {
                    let degree = out_degree[&pred];
                    if degree > 0 {
                        incoming_sum += ranks[&pred] / degree as f64;
                    }
                }

                new_ranks.insert(node, base + damping * incoming_sum);
            }

            let max_change = ranks
                .iter()
                .map(|(node, &old)| (new_ranks[node] - old).abs())
                .fold(0.0_f64, f64::max);

            std::mem::swap(&mut ranks, &mut new_ranks);

            if let Some(tolerance) = self.config.tolerance {
                if max_change < tolerance {
                    break;
                }
            }
        }

        ranks
            .into_iter()
            .filter_map(|(idx, rank)| graph.note_at(idx).map(|note| (note.clone(), rank)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker(iterations: usize) -> PageRanker {
        PageRanker::new(PageRankConfig {
            iterations,
            ..PageRankConfig::default()
        })
    }

    fn total_mass(ranks: &HashMap<NoteId, f64>) -> f64 {
        ranks.values().sum()
    }

    #[test]
    fn test_empty_graph() {
        let graph = LinkGraph::new();
        let ranks = ranker(50).compute(&graph);
        assert!(ranks.is_empty());
    }

    #[test]
    fn test_hub_ranks_highest() {
        // B and C both link to A; A should accumulate the most rank
        let mut graph = LinkGraph::new();
        graph.add_link("B", "A");
        graph.add_link("C", "A");
        graph.add_link("A", "B");

        let ranks = ranker(50).compute(&graph);
        assert!(ranks["A"] > ranks["B"]);
        assert!(ranks["A"] > ranks["C"]);
    }

    #[test]
    fn test_mass_conserved_without_dangling_notes() {
        // Every note has outdegree >= 1, so no mass leaks: the total
        // stays at 1 regardless of iteration depth
        let mut graph = LinkGraph::new();
        graph.add_link("A", "B");
        graph.add_link("B", "C");
        graph.add_link("C", "A");

        let mass_10 = total_mass(&ranker(10).compute(&graph));
        let mass_50 = total_mass(&ranker(50).compute(&graph));

        assert!((mass_10 - 1.0).abs() < 1e-9, "mass at 10 rounds: {}", mass_10);
        assert!((mass_50 - 1.0).abs() < 1e-9, "mass at 50 rounds: {}", mass_50);
        assert!((mass_50 - 1.0).abs() <= (mass_10 - 1.0).abs() + 1e-12);
    }

    #[test]
    fn test_dangling_note_leaks_mass() {
        // X has no outgoing links: its mass goes nowhere and the total
        // drops below 1 after the first round
        let mut graph = LinkGraph::new();
        graph.add_link("A", "X");

        let ranks = ranker(1).compute(&graph);
        assert!(total_mass(&ranks) < 1.0);

        let ranks = ranker(50).compute(&graph);
        assert!(total_mass(&ranks) < 1.0);
    }

    #[test]
    fn test_dangling_rank_does_not_propagate() {
        // A receives nothing from X even though X holds rank, so A stays
        // at the teleport floor (1 - d)/n forever
        let mut graph = LinkGraph::new();
        graph.add_link("A", "X");

        let config = PageRankConfig::default();
        let ranks = ranker(50).compute(&graph);
        let floor = (1.0 - config.damping) / 2.0;
        assert!((ranks["A"] - floor).abs() < 1e-12);
        assert!(ranks["X"] > ranks["A"]);
    }

    #[test]
    fn test_uniform_cycle_stays_uniform() {
        // Perfect symmetry: each note keeps exactly 1/n
        let mut graph = LinkGraph::new();
        graph.add_link("A", "B");
        graph.add_link("B", "C");
        graph.add_link("C", "A");

        let ranks = ranker(50).compute(&graph);
        for note in ["A", "B", "C"] {
            assert!((ranks[note] - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rounds_use_previous_snapshot() {
        // Chain A -> B -> C with one round: B sees A's *initial* rank,
        // C sees B's initial rank - not B's round-1 value
        let mut graph = LinkGraph::new();
        graph.add_link("A", "B");
        graph.add_link("B", "C");

        let ranks = ranker(1).compute(&graph);
        let base = 0.15 / 3.0;
        let init = 1.0 / 3.0;
        assert!((ranks["A"] - base).abs() < 1e-12);
        assert!((ranks["B"] - (base + 0.85 * init)).abs() < 1e-12);
        assert!((ranks["C"] - (base + 0.85 * init)).abs() < 1e-12);
    }

    #[test]
    fn test_tolerance_matches_fixed_count() {
        let mut graph = LinkGraph::new();
        graph.add_link("A", "B");
        graph.add_link("B", "A");
        graph.add_link("C", "A");

        // The early-exit run stops once deltas fall below 1e-12, which
        // lands within a hair of the fully-iterated fixed point
        let fixed = ranker(500).compute(&graph);
        let early = PageRanker::new(PageRankConfig {
            damping: 0.85,
            iterations: 500,
            tolerance: Some(1e-12),
        })
        .compute(&graph);

        for (note, rank) in &fixed {
            assert!((early[note] - rank).abs() < 1e-9, "{} diverged", note);
        }
    }
}
