//! Gravity scoring - the composite "integration at scale" metric.
//!
//! A note's gravity combines six components, each normalized so that the
//! vault's own 95th-percentile note earns the component's full target
//! weight:
//!
//! - **Authority (25)**: log(incoming) x scale bonus
//! - **Curation (20)**: log(outgoing) x curation bonus
//! - **Conversation (20)**: bidirectional count x conversation bonus
//! - **Quality (15)**: bidirectional efficiency x quality bonus
//! - **Network (10)**: log-scaled PageRank
//! - **Integration (10)**: sqrt(bidirectional x outgoing x efficiency)
//!
//! Logarithmic scaling keeps raw volume from dominating; the sweet-spot
//! bonuses are step functions that reward notes inside empirically
//! meaningful ranges rather than rewarding magnitude.
//!
//! Only connected notes are scored: a note with neither incoming nor
//! outgoing links produces no record. The full record set is sorted by
//! total descending with note id as the tie-break.

use std::collections::HashMap;

use crate::graph::LinkGraph;
use crate::ranking::category::categorize;
use crate::ranking::percentile::p95;
use crate::types::{GravityScore, NoteId, ScoringConfig};

/// Raw per-note metrics, collected before the normalization pass.
/// Anchors need the whole distribution, so scoring is two-phase:
/// collect everything, then weigh everything.
struct NoteMetrics {
    note: NoteId,
    incoming: usize,
    outgoing: usize,
    bidirectional: usize,
    incoming_log: f64,
    outgoing_log: f64,
    efficiency: f64,
    integration_index: f64,
    pagerank_log: f64,
}

/// Per-metric 95th-percentile anchors for one analysis run.
struct Anchors {
    incoming_log: f64,
    outgoing_log: f64,
    bidirectional: f64,
    efficiency: f64,
    pagerank_log: f64,
    integration_index: f64,
}

impl Anchors {
    fn from_metrics(metrics: &[NoteMetrics]) -> Self {
        let collect = |f: fn(&NoteMetrics) -> f64| -> Vec<f64> { metrics.iter().map(f).collect() };
        Self {
            incoming_log: p95(&collect(|m| m.incoming_log)),
            outgoing_log: p95(&collect(|m| m.outgoing_log)),
            bidirectional: p95(&collect(|m| m.bidirectional as f64)),
            efficiency: p95(&collect(|m| m.efficiency)),
            pagerank_log: p95(&collect(|m| m.pagerank_log)),
            integration_index: p95(&collect(|m| m.integration_index)),
        }
    }
}

/// Scaling multiplier that maps a metric's p95 anchor onto its target
/// weight. A zero anchor forces the multiplier to zero, which zeroes the
/// component for every note that run instead of dividing by zero.
fn multiplier(target_weight: f64, anchor: f64) -> f64 {
    if anchor > 0.0 {
        target_weight / anchor
    } else {
        0.0
    }
}

/// Computes gravity score records for every connected note.
pub struct GravityScorer {
    config: ScoringConfig,
}

impl GravityScorer {
    /// Create a new scorer with the given configuration.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score every qualifying note in the graph.
    ///
    /// ## Arguments
    /// - `graph`: the link graph built by ingestion
    /// - `pagerank`: authority distribution from [`PageRanker`](super::PageRanker)
    ///
    /// ## Returns
    /// Records sorted by total descending, ties broken by note id
    /// ascending. Empty when no note has any links.
    pub fn compute(
        &self,
        graph: &LinkGraph,
        pagerank: &HashMap<NoteId, f64>,
    ) -> Vec<GravityScore> {
        let metrics: Vec<NoteMetrics> = graph
            .notes()
            .filter(|note| graph.qualifies(note))
            .map(|note| self.collect_metrics(graph, pagerank, note))
            .collect();

        if metrics.is_empty() {
            return vec![];
        }

        let anchors = Anchors::from_metrics(&metrics);

        let mut scores: Vec<GravityScore> = metrics
            .into_iter()
            .map(|m| self.weigh(m, &anchors, graph))
            .collect();

        scores.sort();
        scores
    }

    fn collect_metrics(
        &self,
        graph: &LinkGraph,
        pagerank: &HashMap<NoteId, f64>,
        note: &NoteId,
    ) -> NoteMetrics {
        let incoming = graph.incoming_count(note);
        let outgoing = graph.outgoing_count(note);
        let bidirectional = graph.bidirectional_count(note);

        let efficiency = if incoming > 0 {
            bidirectional as f64 / incoming.max(1) as f64
        } else {
            0.0
        };

        // Multi-dimensional strength: floors keep a single weak axis
        // from collapsing the whole product to zero
        let integration_index = ((bidirectional.max(1) as f64)
            * (outgoing.max(1) as f64)
            * efficiency.max(0.01))
        .sqrt();

        let rank = pagerank.get(note).copied().unwrap_or(0.0);

        NoteMetrics {
            note: note.clone(),
            incoming,
            outgoing,
            bidirectional,
            incoming_log: ((incoming + 1) as f64).ln(),
            outgoing_log: ((outgoing + 1) as f64).ln(),
            efficiency,
            integration_index,
            pagerank_log: (rank * 10_000.0 + 1.0).ln(),
        }
    }

    fn weigh(&self, m: NoteMetrics, anchors: &Anchors, graph: &LinkGraph) -> GravityScore {
        let config = &self.config;

        // Sweet-spot bonuses (step functions)
        let scale_bonus = if (config.scale_min_incoming..=config.scale_max_incoming)
            .contains(&m.incoming)
        {
            config.scale_bonus
        } else {
            1.0
        };
        let curation_bonus = if m.outgoing >= config.curation_min_outgoing {
            config.curation_bonus
        } else {
            1.0
        };
        let conversation_bonus = if m.bidirectional >= config.conversation_min_bidirectional {
            config.conversation_bonus
        } else {
            1.0
        };
        let quality_bonus = if m.efficiency > config.quality_min_efficiency {
            config.quality_bonus_high
        } else {
            config.quality_bonus_low
        };

        let authority = m.incoming_log
            * scale_bonus
            * multiplier(config.weight_authority, anchors.incoming_log);
        let curation = m.outgoing_log
            * curation_bonus
            * multiplier(config.weight_curation, anchors.outgoing_log);
        let conversation = m.bidirectional as f64
            * conversation_bonus
            * multiplier(config.weight_conversation, anchors.bidirectional);
        let quality = m.efficiency
            * quality_bonus
            * multiplier(config.weight_quality, anchors.efficiency);
        let network = m.pagerank_log * multiplier(config.weight_network, anchors.pagerank_log);
        let integration = m.integration_index
            * multiplier(config.weight_integration, anchors.integration_index);

        let total = authority + curation + conversation + quality + network + integration;

        GravityScore {
            category: categorize(&m.note),
            materialized: graph.is_materialized(&m.note),
            note: m.note,
            incoming: m.incoming,
            outgoing: m.outgoing,
            bidirectional: m.bidirectional,
            efficiency: m.efficiency,
            integration_index: m.integration_index,
            scale_bonus,
            curation_bonus,
            conversation_bonus,
            quality_bonus,
            authority,
            curation,
            conversation,
            quality,
            network,
            integration,
            total,
        }
    }
}
