//! Markdown report generation.
//!
//! Produces the persistent "Gravity Index Results" document: the ranked
//! top-N with one-line descriptions, a methodology section so the
//! numbers stay interpretable months later, summary statistics, and a
//! category breakdown of the top of the field.

use std::collections::HashMap;
use std::fmt::Write;

use chrono::Local;

use crate::rendering::describe::describe;
use crate::types::{Category, GravityScore};

/// Renders score records into the markdown report.
pub struct ReportRenderer {
    top_n: usize,
}

impl ReportRenderer {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Render the full report, stamped with the current local time.
    pub fn render(&self, scores: &[GravityScore]) -> String {
        self.render_with_timestamp(scores, &Local::now().format("%Y-%m-%d %H:%M").to_string())
    }

    /// Render with an explicit timestamp string.
    pub fn render_with_timestamp(&self, scores: &[GravityScore], timestamp: &str) -> String {
        if scores.is_empty() {
            return "# ❌ Gravity Index Results\n\n\
                    No notes with connections found in this vault.\n"
                .to_string();
        }

        let shown = &scores[..scores.len().min(self.top_n)];
        let mut out = String::new();

        let _ = writeln!(out, "# 🌟 Gravity Index Results");
        let _ = writeln!(out);
        let _ = writeln!(out, "*Generated: {}*", timestamp);
        let _ = writeln!(out);
        let _ = writeln!(out, "## Top {} Notes by Gravity Index", shown.len());
        let _ = writeln!(out);

        for (i, score) in shown.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. **[[{}]]** - Score: {:.1} - {}",
                i + 1,
                score.note,
                score.total,
                describe(score)
            );
        }

        out.push_str(METHODOLOGY);

        self.write_summary(&mut out, scores, shown);

        out.push_str(
            "\n---\n\n\
             *Generated by gravmap*\n\
             *Integration at Scale methodology identifies meaningful scale integrators*\n",
        );

        out
    }

    fn write_summary(&self, out: &mut String, scores: &[GravityScore], shown: &[GravityScore]) {
        let with_files = scores.iter().filter(|s| s.materialized).count();
        let avg_efficiency =
            scores.iter().map(|s| s.efficiency).sum::<f64>() / scores.len() as f64 * 100.0;
        let top_score = scores[0].total;

        let _ = writeln!(out);
        let _ = writeln!(out, "---");
        let _ = writeln!(out);
        let _ = writeln!(out, "## Summary Statistics");
        let _ = writeln!(out, "- **Total notes analyzed**: {}", scores.len());
        let _ = writeln!(out, "- **Notes with files**: {}", with_files);
        let _ = writeln!(out, "- **Average efficiency**: {:.1}%", avg_efficiency);
        let _ = writeln!(out, "- **Top score**: {:.1}", top_score);
        let _ = writeln!(out);
        let _ = writeln!(out, "### Category Performance (Top {})", shown.len());

        // Most populated categories first; label as the tie-break keeps
        // the report stable across runs
        let mut by_category: HashMap<Category, Vec<f64>> = HashMap::new();
        for score in shown {
            by_category.entry(score.category).or_default().push(score.total);
        }
        let mut categories: Vec<(Category, Vec<f64>)> = by_category.into_iter().collect();
        categories.sort_by(|a, b| {
            b.1.len()
                .cmp(&a.1.len())
                .then_with(|| a.0.label().cmp(b.0.label()))
        });

        for (category, totals) in categories {
            let avg = totals.iter().sum::<f64>() / totals.len() as f64;
            let _ = writeln!(
                out,
                "- **{}**: {} notes (avg: {:.1})",
                category,
                totals.len(),
                avg
            );
        }
    }
}

const METHODOLOGY: &str = "\n---\n\n\
## Integration at Scale Methodology\n\n\
This analysis identifies **meaningful scale integrators** - notes that actively \
curate and engage at meaningful scale while maintaining conversational relationships.\n\n\
### Methodology Highlights\n\
- **Logarithmic scaling** reduces pure volume dominance\n\
- **Sweet spot bonuses** reward 20-100 incoming links (meaningful authority)\n\
- **Quality multipliers** emphasize bidirectional efficiency over raw counts\n\
- **Integration index** rewards multi-dimensional strength\n\n\
### Component Weights\n\
- **Authority (25%)**: log(incoming) × scale_bonus\n\
- **Curation (20%)**: log(outgoing) × curation_bonus\n\
- **Conversation (20%)**: bidirectional × conversation_bonus\n\
- **Quality (15%)**: efficiency × quality_bonus\n\
- **Network (10%)**: log(pagerank × 10000)\n\
- **Integration (10%)**: √(bidirectional × outgoing × efficiency)\n\n\
### Sweet Spot Bonuses\n\
- **Scale Bonus (1.5x)**: 20-100 incoming links\n\
- **Curation Bonus (1.3x)**: 15+ outgoing links\n\
- **Conversation Bonus (1.2x)**: 10+ bidirectional links\n\
- **Quality Bonus (2.0x)**: 25%+ efficiency (bidirectional/incoming)\n";

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn make_score(note: &str, total: f64, category: Category, materialized: bool) -> GravityScore {
        GravityScore {
            note: Arc::from(note),
            incoming: 1,
            outgoing: 1,
            bidirectional: 1,
            efficiency: 1.0,
            integration_index: 1.0,
            scale_bonus: 1.0,
            curation_bonus: 1.0,
            conversation_bonus: 1.0,
            quality_bonus: 2.0,
            authority: 0.0,
            curation: 0.0,
            conversation: 0.0,
            quality: 0.0,
            network: 0.0,
            integration: 0.0,
            total,
            category,
            materialized,
        }
    }

    #[test]
    fn test_empty_scores_fallback() {
        let report = ReportRenderer::new(50).render_with_timestamp(&[], "2026-01-01 00:00");
        assert!(report.contains("No notes with connections"));
    }

    #[test]
    fn test_report_structure() {
        let scores = vec![
            make_score("Home MOC", 90.0, Category::Mocs, true),
            make_score("Ghost", 10.0, Category::Other, false),
        ];
        let report = ReportRenderer::new(50).render_with_timestamp(&scores, "2026-01-01 00:00");

        assert!(report.contains("# 🌟 Gravity Index Results"));
        assert!(report.contains("*Generated: 2026-01-01 00:00*"));
        assert!(report.contains("## Top 2 Notes by Gravity Index"));
        assert!(report.contains("1. **[[Home MOC]]** - Score: 90.0"));
        assert!(report.contains("2. **[[Ghost]]** - Score: 10.0"));
        assert!(report.contains("## Integration at Scale Methodology"));
        assert!(report.contains("- **Total notes analyzed**: 2"));
        assert!(report.contains("- **Notes with files**: 1"));
        assert!(report.contains("- **Top score**: 90.0"));
    }

    #[test]
    fn test_top_n_truncates_list_not_stats() {
        let scores: Vec<GravityScore> = (0..10)
            .map(|i| make_score(&format!("N{:02}", i), 100.0 - i as f64, Category::Other, true))
            .collect();
        let report = ReportRenderer::new(3).render_with_timestamp(&scores, "t");

        assert!(report.contains("## Top 3 Notes"));
        assert!(report.contains("[[N02]]"));
        assert!(!report.contains("[[N03]]"));
        // Statistics still cover the full field
        assert!(report.contains("- **Total notes analyzed**: 10"));
    }

    #[test]
    fn test_category_performance_ordering() {
        let scores = vec![
            make_score("A", 50.0, Category::Mocs, true),
            make_score("B", 40.0, Category::Mocs, true),
            make_score("C", 30.0, Category::Media, true),
        ];
        let report = ReportRenderer::new(50).render_with_timestamp(&scores, "t");

        let mocs_pos = report.find("**MOCs**: 2 notes").expect("MOCs line");
        let media_pos = report.find("**Media**: 1 notes").expect("Media line");
        assert!(mocs_pos < media_pos, "larger category should come first");
        assert!(report.contains("**MOCs**: 2 notes (avg: 45.0)"));
    }
}
