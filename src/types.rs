//! Core types for gravmap - gravity-index cartography for note vaults.
//!
//! Key design decisions:
//! - `Arc<str>` for note identifiers, shared between the graph, the
//!   PageRank map, and score records without copying
//! - Score records are frozen once computed; a run produces the full set,
//!   sorts it, and never mutates it afterward
//! - Every tunable lives in a config struct with a `Default` carrying the
//!   canonical constants, so experiments never touch the scoring code

use std::sync::Arc;

/// Interned note identifier. Derived from a file stem or a link target.
pub type NoteId = Arc<str>;

/// Note classification based on name patterns.
///
/// Used only for reporting - category never feeds back into the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// LYT courses and alchemy-branded notes
    LytCourses,
    /// Maps of Content
    Mocs,
    /// Other map-style indexes
    Maps,
    /// Tooling notes (Obsidian itself, plugins)
    Tools,
    /// Movies, books, series
    Media,
    /// Workshops, hubs, home notes
    Workspaces,
    /// Projects, templates, records
    Productivity,
    /// Everything else
    Other,
}

impl Category {
    /// Human label for report output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::LytCourses => "LYT/Courses",
            Category::Mocs => "MOCs",
            Category::Maps => "Maps",
            Category::Tools => "Tools",
            Category::Media => "Media",
            Category::Workspaces => "Workspaces",
            Category::Productivity => "Productivity",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-note gravity score record.
///
/// Holds the raw counts, the derived ratios, the bonus multipliers that
/// were applied, and the six weighted components whose sum is `total`.
/// Computed once per analysis run from immutable inputs.
#[derive(Debug, Clone)]
pub struct GravityScore {
    /// The note this record scores
    pub note: NoteId,

    // Raw link counts
    /// Distinct notes linking here
    pub incoming: usize,
    /// Distinct notes linked from here
    pub outgoing: usize,
    /// Links reciprocated in both directions
    pub bidirectional: usize,

    // Derived ratios
    /// bidirectional / max(incoming, 1); 0 when nothing points here
    pub efficiency: f64,
    /// sqrt of bidirectional x outgoing x efficiency (each floored)
    pub integration_index: f64,

    // Bonus multipliers as applied (step functions, see ScoringConfig)
    pub scale_bonus: f64,
    pub curation_bonus: f64,
    pub conversation_bonus: f64,
    pub quality_bonus: f64,

    // Weighted components
    pub authority: f64,
    pub curation: f64,
    pub conversation: f64,
    pub quality: f64,
    pub network: f64,
    pub integration: f64,

    /// Sum of the six components
    pub total: f64,

    /// Name-pattern classification (reporting only)
    pub category: Category,
    /// Whether a backing document exists for this note
    pub materialized: bool,
}

/// Ordering: total descending, then note id ascending.
///
/// The secondary key makes the ranked output reproducible when two notes
/// land on the same total (mutual pairs do this routinely).
impl Ord for GravityScore {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .total
            .partial_cmp(&self.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| self.note.cmp(&other.note))
    }
}

impl PartialOrd for GravityScore {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GravityScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for GravityScore {}

/// PageRank settings.
///
/// `iterations` is the sole termination criterion unless `tolerance` is
/// set, in which case iteration stops early once the largest per-note
/// delta drops below it. The default is the fixed count - existing
/// vaults produce identical rankings across versions only if the
/// iteration schedule is unchanged.
#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs. teleporting)
    pub damping: f64,
    /// Number of synchronous update rounds
    pub iterations: usize,
    /// Optional early-exit threshold on the max per-note delta
    pub tolerance: Option<f64>,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 50,
            tolerance: None,
        }
    }
}

/// Configuration for gravity scoring.
/// All values are tunable at runtime for experimentation.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    // Component target weights. The 95th-percentile note for a metric
    // receives exactly the target weight for that component, so the
    // weights must sum to 100 for totals to read as percentages.
    pub weight_authority: f64,
    pub weight_curation: f64,
    pub weight_conversation: f64,
    pub weight_quality: f64,
    pub weight_network: f64,
    pub weight_integration: f64,

    // Sweet-spot bonuses. Step functions, not continuous: a note is
    // either inside the meaningful range or it is not.
    /// Applied when incoming falls inside [scale_min_incoming, scale_max_incoming]
    pub scale_bonus: f64,
    pub scale_min_incoming: usize,
    pub scale_max_incoming: usize,

    /// Applied when outgoing >= curation_min_outgoing
    pub curation_bonus: f64,
    pub curation_min_outgoing: usize,

    /// Applied when bidirectional >= conversation_min_bidirectional
    pub conversation_bonus: f64,
    pub conversation_min_bidirectional: usize,

    /// quality_bonus_high when efficiency > quality_min_efficiency,
    /// quality_bonus_low otherwise - one-way traffic is penalized, not
    /// merely unrewarded
    pub quality_bonus_high: f64,
    pub quality_bonus_low: f64,
    pub quality_min_efficiency: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            // Authority=25%, Curation=20%, Conversation=20%,
            // Quality=15%, Network=10%, Integration=10%
            weight_authority: 25.0,
            weight_curation: 20.0,
            weight_conversation: 20.0,
            weight_quality: 15.0,
            weight_network: 10.0,
            weight_integration: 10.0,

            scale_bonus: 1.5,
            scale_min_incoming: 20,
            scale_max_incoming: 100,

            curation_bonus: 1.3,
            curation_min_outgoing: 15,

            conversation_bonus: 1.2,
            conversation_min_bidirectional: 10,

            quality_bonus_high: 2.0,
            quality_bonus_low: 0.5,
            quality_min_efficiency: 0.25,
        }
    }
}

impl ScoringConfig {
    /// Sum of the six component target weights.
    pub fn target_weight_sum(&self) -> f64 {
        self.weight_authority
            + self.weight_curation
            + self.weight_conversation
            + self.weight_quality
            + self.weight_network
            + self.weight_integration
    }
}
