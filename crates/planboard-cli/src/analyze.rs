//! Read-only analysis command handlers.

use planboard_analytics::{build_manager_context, LearningsAggregator, PerformanceAnalyzer};
use planboard_core::{Platform, Presentation};
use planboard_store::{LearningRepository, PostRepository};

use crate::report::render_report;

/// Print the analysis summary, or the full analysis as JSON.
///
/// # Errors
///
/// Returns an error if posts cannot be loaded or the analysis cannot be
/// serialized.
pub(crate) fn run_analyze(
    store: &impl PostRepository,
    analyzer: &PerformanceAnalyzer,
    platform: Option<Platform>,
    json: bool,
) -> anyhow::Result<()> {
    let posts = store.list_posts()?;
    let analysis = analyzer.analyze(&posts, platform);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let summary = &analysis.summary;
    let scope = platform.map_or("all platforms", |p| p.label());
    println!("Analyzed {} posts ({scope})", summary.total_posts_analyzed);

    if summary.insufficient_data {
        println!(
            "not enough published posts with metrics yet (need at least {}); keep posting",
            analyzer.config().min_posts
        );
        return Ok(());
    }

    match &summary.top_recommendation {
        Some(top) => println!("top:   {top}"),
        None => println!("top:   no clear winner yet"),
    }
    if let Some(avoid) = &summary.avoid_recommendation {
        println!("avoid: {avoid}");
    }

    println!();
    println!("{:<12}{:<24}{:<10}POSTS", "DIMENSION", "VALUE", "MULT");
    for insight in analysis.insights() {
        println!(
            "{:<12}{:<24}{:<10}{}",
            insight.dimension.as_str(),
            insight.label,
            format!("{:.2}x", insight.multiplier),
            insight.sample_size
        );
    }

    Ok(())
}

/// Print next-post suggestions, one per line.
///
/// # Errors
///
/// Returns an error if posts cannot be loaded.
pub(crate) fn run_recommend(
    store: &impl PostRepository,
    analyzer: &PerformanceAnalyzer,
    platform: Option<Platform>,
) -> anyhow::Result<()> {
    let posts = store.list_posts()?;
    let suggestions = analyzer.next_post_recommendations(&posts, platform);

    if suggestions.is_empty() {
        println!("no recommendations yet; publish more posts and record their metrics");
        return Ok(());
    }

    for suggestion in &suggestions {
        println!("- {suggestion}");
    }
    Ok(())
}

/// Print the markdown performance report.
///
/// # Errors
///
/// Returns an error if posts cannot be loaded.
pub(crate) fn run_report(
    store: &impl PostRepository,
    analyzer: &PerformanceAnalyzer,
    platform: Option<Platform>,
) -> anyhow::Result<()> {
    let posts = store.list_posts()?;
    let analysis = analyzer.analyze(&posts, platform);
    print!("{}", render_report(&analysis, chrono::Utc::now()));
    Ok(())
}

/// Print the context block for the content manager prompt.
///
/// # Errors
///
/// Returns an error if posts or learnings cannot be loaded.
pub(crate) fn run_context<S>(
    store: &S,
    analyzer: &PerformanceAnalyzer,
    platform: Option<Platform>,
) -> anyhow::Result<()>
where
    S: PostRepository + LearningRepository,
{
    let posts = store.list_posts()?;
    let analysis = analyzer.analyze(&posts, platform);
    let learnings = LearningsAggregator::from_learnings(store.load_learnings()?);
    print!("{}", build_manager_context(&analysis, &learnings, platform));
    Ok(())
}
