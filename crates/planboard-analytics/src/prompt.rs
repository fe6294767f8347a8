//! Context block handed to the LLM content manager.

use std::fmt::{self, Write};

use planboard_core::{Platform, Presentation};

use crate::learnings::LearningsAggregator;
use crate::types::PatternAnalysis;

const MAX_PROMPT_INSIGHTS: usize = 5;

/// Render analysis and learnings as markdown for an LLM prompt.
///
/// Only formats what it is given. Transport, templates and retries belong to
/// the caller.
#[must_use]
pub fn build_manager_context(
    analysis: &PatternAnalysis,
    learnings: &LearningsAggregator,
    platform: Option<Platform>,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_manager_context(&mut out, analysis, learnings, platform);
    out
}

fn write_manager_context(
    out: &mut impl Write,
    analysis: &PatternAnalysis,
    learnings: &LearningsAggregator,
    platform: Option<Platform>,
) -> fmt::Result {
    let scope = platform.map_or("all platforms", |p| p.label());
    let summary = &analysis.summary;

    writeln!(out, "## Content performance ({scope})")?;
    writeln!(out)?;
    writeln!(out, "- Posts analyzed: {}", summary.total_posts_analyzed)?;

    if summary.insufficient_data {
        writeln!(
            out,
            "- Not enough published posts with metrics to identify patterns yet."
        )?;
    } else {
        if let Some(best) = analysis.hook_type_performance.first() {
            writeln!(
                out,
                "- Best hook type: {} ({:.2}x, {} posts)",
                best.value.label(),
                best.multiplier,
                best.sample_size
            )?;
        }
        if let Some(best) = analysis.topic_performance.first() {
            writeln!(
                out,
                "- Best topic: {} ({:.2}x, {} posts)",
                best.value.label(),
                best.multiplier,
                best.sample_size
            )?;
        }
        if let Some(best) = analysis.format_performance.first() {
            writeln!(
                out,
                "- Best format: {} ({:.2}x, {} posts)",
                best.value.label(),
                best.multiplier,
                best.sample_size
            )?;
        }
        if let Some(day) = analysis.best_posting_days.first() {
            writeln!(out, "- Best posting day: {} ({:.2}x)", day.day_name, day.multiplier)?;
        }
        if let Some(hour) = analysis.best_posting_hours.first() {
            writeln!(out, "- Best posting hour: {:02}:00 ({:.2}x)", hour.hour, hour.multiplier)?;
        }
        if let Some(top) = &summary.top_recommendation {
            writeln!(out, "- Recommendation: {top}")?;
        }
        if let Some(avoid) = &summary.avoid_recommendation {
            writeln!(out, "- Avoid: {avoid}")?;
        }
    }

    let success = learnings.get_success_rate(platform);
    writeln!(out)?;
    writeln!(out, "## Learnings")?;
    writeln!(out)?;
    match success.rate() {
        Some(rate) => writeln!(
            out,
            "- Success rate: {:.0}% ({} exceeded, {} met, {} missed)",
            rate * 100.0,
            success.exceeded,
            success.met,
            success.missed
        )?,
        None => writeln!(out, "- No learnings recorded yet.")?,
    }

    let insights = learnings.get_top_insights(platform, MAX_PROMPT_INSIGHTS);
    if !insights.is_empty() {
        writeln!(out, "- Recent key insights:")?;
        for learning in insights {
            writeln!(
                out,
                "  - [{}] {}",
                learning.outcome.label(),
                learning.key_insight.trim()
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use planboard_core::{NewLearning, Outcome};

    use super::*;
    use crate::analyzer::analyze_patterns;

    #[test]
    fn insufficient_analysis_says_so() {
        let analysis = analyze_patterns(&[], Some(Platform::LinkedIn));
        let text = build_manager_context(&analysis, &LearningsAggregator::new(), Some(Platform::LinkedIn));
        assert!(text.contains("## Content performance (LinkedIn)"));
        assert!(text.contains("Posts analyzed: 0"));
        assert!(text.contains("Not enough published posts"));
        assert!(text.contains("No learnings recorded yet."));
    }

    #[test]
    fn learnings_section_lists_insights() {
        let mut learnings = LearningsAggregator::new();
        learnings.add_learning_at(
            NewLearning::new("p1", Platform::LinkedIn, Outcome::Exceeded)
                .with_key_insight(" carousel recaps travel well "),
            Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap(),
        );
        learnings.add_learning_at(
            NewLearning::new("p2", Platform::LinkedIn, Outcome::Missed),
            Utc.with_ymd_and_hms(2026, 5, 2, 10, 0, 0).unwrap(),
        );
        let analysis = analyze_patterns(&[], None);
        let text = build_manager_context(&analysis, &learnings, None);
        assert!(text.contains("all platforms"));
        assert!(text.contains("Success rate: 50% (1 exceeded, 0 met, 1 missed)"));
        assert!(text.contains("  - [Exceeded] carousel recaps travel well"));
    }
}
