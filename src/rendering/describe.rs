//! One-line note descriptions for the report.
//!
//! Highlights a note's strengths and its most telling gap. The phrasing
//! vocabulary is fixed; thresholds sit above the sweet-spot bonus cutoffs
//! so a description reads as "notably strong", not "barely qualified".

use crate::types::GravityScore;

/// Brief description highlighting strengths and potential gaps.
///
/// Picks up to two strengths and one gap. Falls back to "balanced
/// integrator" for notes that are strong only in aggregate, and
/// "emerging connector" for everything else.
pub fn describe(score: &GravityScore) -> String {
    let mut strengths: Vec<&str> = Vec::new();
    let mut gaps: Vec<&str> = Vec::new();

    if score.incoming >= 100 {
        strengths.push("authoritative reference");
    } else if score.incoming >= 50 {
        strengths.push("widely referenced");
    } else if score.incoming >= 20 {
        strengths.push("solid authority");
    }

    if score.outgoing >= 50 {
        strengths.push("extensive curator");
    } else if score.outgoing >= 25 {
        strengths.push("active synthesizer");
    } else if score.outgoing >= 15 {
        strengths.push("knowledge weaver");
    }

    if score.bidirectional >= 20 {
        strengths.push("conversation hub");
    } else if score.bidirectional >= 10 {
        strengths.push("dialogue catalyst");
    }

    if score.efficiency >= 0.4 {
        strengths.push("selective depth");
    } else if score.efficiency >= 0.25 {
        strengths.push("quality focus");
    }

    if score.incoming < 10 && score.outgoing > 30 {
        gaps.push("under-recognized");
    } else if score.outgoing < 10 && score.incoming > 30 {
        gaps.push("could link more");
    } else if score.bidirectional < 5 && score.incoming > 20 {
        gaps.push("one-way traffic");
    }

    if !strengths.is_empty() && !gaps.is_empty() {
        let shown = &strengths[..strengths.len().min(2)];
        format!("{}; {}", shown.join(", "), gaps[0])
    } else if strengths.len() >= 2 {
        format!("{} + {}", strengths[0], strengths[1])
    } else if let Some(only) = strengths.first() {
        only.to_string()
    } else if score.integration_index > 10.0 {
        "balanced integrator".to_string()
    } else {
        "emerging connector".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::sync::Arc;

    fn score(incoming: usize, outgoing: usize, bidirectional: usize) -> GravityScore {
        let efficiency = if incoming > 0 {
            bidirectional as f64 / incoming as f64
        } else {
            0.0
        };
        GravityScore {
            note: Arc::from("N"),
            incoming,
            outgoing,
            bidirectional,
            efficiency,
            integration_index: 0.0,
            scale_bonus: 1.0,
            curation_bonus: 1.0,
            conversation_bonus: 1.0,
            quality_bonus: 0.5,
            authority: 0.0,
            curation: 0.0,
            conversation: 0.0,
            quality: 0.0,
            network: 0.0,
            integration: 0.0,
            total: 0.0,
            category: Category::Other,
            materialized: true,
        }
    }

    #[test]
    fn test_authority_tiers() {
        // Highly referenced but outgoing-poor: two strengths shown, gap
        // appended
        assert_eq!(
            describe(&score(120, 0, 50)),
            "authoritative reference, conversation hub; could link more"
        );
        assert!(describe(&score(60, 0, 30)).starts_with("widely referenced"));
        assert!(describe(&score(25, 0, 12)).starts_with("solid authority"));
    }

    #[test]
    fn test_strengths_with_gap() {
        // 40 incoming (solid authority range), nothing reciprocated:
        // one-way traffic
        let s = score(40, 12, 0);
        assert_eq!(describe(&s), "solid authority; one-way traffic");
    }

    #[test]
    fn test_under_recognized() {
        let s = score(5, 40, 0);
        // "active synthesizer" strength plus the gap
        assert_eq!(describe(&s), "active synthesizer; under-recognized");
    }

    #[test]
    fn test_could_link_more() {
        let s = score(40, 5, 10);
        assert_eq!(describe(&s), "solid authority, dialogue catalyst; could link more");
    }

    #[test]
    fn test_two_strengths_joined() {
        // 30 incoming, 20 outgoing, 12 bidirectional: no gaps fire, so
        // the first two strengths join with a plus
        let s = score(30, 20, 12);
        assert_eq!(describe(&s), "solid authority + knowledge weaver");
    }

    #[test]
    fn test_emerging_connector_fallback() {
        assert_eq!(describe(&score(2, 3, 1)), "emerging connector");
    }

    #[test]
    fn test_balanced_integrator_fallback() {
        let mut s = score(2, 3, 1);
        s.integration_index = 12.0;
        assert_eq!(describe(&s), "balanced integrator");
    }
}
