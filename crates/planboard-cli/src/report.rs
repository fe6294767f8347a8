//! Markdown rendering for `planboard report`.

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};
use planboard_analytics::{DimensionPerformance, PatternAnalysis};
use planboard_core::Presentation;

/// Render the full analysis as a markdown document.
pub(crate) fn render_report(analysis: &PatternAnalysis, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, analysis, generated_at);
    out
}

fn write_report(
    out: &mut impl Write,
    analysis: &PatternAnalysis,
    generated_at: DateTime<Utc>,
) -> fmt::Result {
    let summary = &analysis.summary;
    let filter_label = analysis.platform.map_or("All platforms", |p| p.label());

    writeln!(out, "# Content Performance Report")?;
    writeln!(out)?;
    writeln!(out, "**Generated**: {}", generated_at.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(out, "**Filter**: {filter_label}")?;
    writeln!(out, "**Posts analyzed**: {}", summary.total_posts_analyzed)?;
    writeln!(out, "**Average score**: {:.2}", summary.overall_avg_score)?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;

    if summary.insufficient_data {
        writeln!(
            out,
            "Not enough published posts with metrics to identify patterns yet."
        )?;
        return Ok(());
    }

    writeln!(out, "## Recommendations")?;
    writeln!(out)?;
    match &summary.top_recommendation {
        Some(top) => writeln!(out, "- {top}")?,
        None => writeln!(out, "- No group stands out yet.")?,
    }
    if let Some(avoid) = &summary.avoid_recommendation {
        writeln!(out, "- {avoid}")?;
    }
    writeln!(out)?;

    write_dimension_table(out, "Hook types", &analysis.hook_type_performance)?;
    write_dimension_table(out, "Topics", &analysis.topic_performance)?;
    write_dimension_table(out, "Formats", &analysis.format_performance)?;

    writeln!(out, "## Posting days")?;
    writeln!(out)?;
    writeln!(out, "| Day | Multiplier | Posts | Avg score |")?;
    writeln!(out, "|-----|------------|-------|-----------|")?;
    for day in &analysis.best_posting_days {
        writeln!(
            out,
            "| {} | {:.2}x | {} | {:.2} |",
            day.day_name, day.multiplier, day.sample_size, day.avg_score
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Posting hours")?;
    writeln!(out)?;
    writeln!(out, "| Hour | Multiplier | Posts | Avg score |")?;
    writeln!(out, "|------|------------|-------|-----------|")?;
    for hour in &analysis.best_posting_hours {
        writeln!(
            out,
            "| {:02}:00 | {:.2}x | {} | {:.2} |",
            hour.hour, hour.multiplier, hour.sample_size, hour.avg_score
        )?;
    }

    if analysis.platform_breakdown.len() > 1 {
        writeln!(out)?;
        writeln!(out, "## Platforms")?;
        writeln!(out)?;
        writeln!(out, "| Platform | Posts | Avg score |")?;
        writeln!(out, "|----------|-------|-----------|")?;
        for row in &analysis.platform_breakdown {
            writeln!(
                out,
                "| {} | {} | {:.2} |",
                row.platform.label(),
                row.post_count,
                row.avg_score
            )?;
        }
    }

    Ok(())
}

fn write_dimension_table<K: Presentation>(
    out: &mut impl Write,
    title: &str,
    rows: &[DimensionPerformance<K>],
) -> fmt::Result {
    if rows.is_empty() {
        return Ok(());
    }
    writeln!(out, "## {title}")?;
    writeln!(out)?;
    writeln!(out, "| Value | Multiplier | Posts | Avg score |")?;
    writeln!(out, "|-------|------------|-------|-----------|")?;
    for row in rows {
        writeln!(
            out,
            "| {} | {:.2}x | {} | {:.2} |",
            row.value.badge(),
            row.multiplier,
            row.sample_size,
            row.avg_score
        )?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use planboard_analytics::analyze_patterns;
    use planboard_core::{HookType, LinkedInMetrics, Platform, PlatformMetrics, Post, PostStatus};

    use super::*;

    fn published(id: &str, hook: HookType, likes: f64, day: u32) -> Post {
        let mut post = Post::new(id, Platform::LinkedIn, PostStatus::Published);
        post.hook_type = Some(hook);
        post.published_at = Some(Utc.with_ymd_and_hms(2026, 6, day, 9, 0, 0).unwrap());
        post.metrics = Some(PlatformMetrics::LinkedIn(LinkedInMetrics {
            impressions: Some(100.0),
            likes: Some(likes),
            ..LinkedInMetrics::default()
        }));
        post
    }

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn insufficient_report_stops_after_header() {
        let report = render_report(&analyze_patterns(&[], None), generated());
        assert!(report.starts_with("# Content Performance Report"));
        assert!(report.contains("**Generated**: 2026-06-30 12:00 UTC"));
        assert!(report.contains("**Filter**: All platforms"));
        assert!(report.contains("Not enough published posts"));
        assert!(!report.contains("## Hook types"));
    }

    #[test]
    fn full_report_has_tables() {
        let posts = vec![
            published("a", HookType::Number, 10.0, 1),
            published("b", HookType::Number, 12.0, 2),
            published("c", HookType::Number, 8.0, 3),
            published("d", HookType::Question, 4.0, 4),
            published("e", HookType::Question, 6.0, 5),
        ];
        let report = render_report(&analyze_patterns(&posts, Some(Platform::LinkedIn)), generated());

        assert!(report.contains("**Filter**: LinkedIn"));
        assert!(report.contains("**Posts analyzed**: 5"));
        assert!(report.contains("## Hook types"));
        assert!(report.contains("| 1.25x | 3 |"));
        assert!(report.contains("| 0.62x | 2 |") || report.contains("| 0.63x | 2 |"));
        assert!(report.contains("| 09:00 | 1.00x | 5 |"));
        assert!(!report.contains("## Topics"));
        assert!(!report.contains("## Platforms"));
    }
}
