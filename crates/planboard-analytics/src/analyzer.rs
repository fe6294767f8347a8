//! Per-dimension performance multipliers over a post history.

use chrono::{Datelike, Timelike};
use planboard_core::{display::day_name, Platform, Post};

use crate::recommendations::{avoid_sentence, select_avoid, select_top, top_sentence};
use crate::scorer::{resolve_modes, score_post, ScoreMode};
use crate::types::{
    AnalyzerConfig, DayPerformance, DimensionPerformance, HourPerformance, PatternAnalysis,
    PatternSummary, PlatformBreakdown,
};

/// An analyzable post with its normalized score and local posting slot.
struct ScoredPost<'a> {
    post: &'a Post,
    score: f64,
    weekday: u8,
    hour: u8,
}

/// Computes [`PatternAnalysis`] results. Holds configuration only; every
/// call is a full recomputation over the posts it is given.
#[derive(Debug, Clone, Default)]
pub struct PerformanceAnalyzer {
    config: AnalyzerConfig,
}

impl PerformanceAnalyzer {
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `posts`, optionally restricted to one platform.
    ///
    /// Non-analyzable posts (not published, no publish time, or no positive
    /// metric) are ignored. With fewer analyzable posts than
    /// `config.min_posts` the result is flagged insufficient and carries no
    /// recommendation text.
    #[must_use]
    pub fn analyze(&self, posts: &[Post], platform: Option<Platform>) -> PatternAnalysis {
        let eligible: Vec<&Post> = posts
            .iter()
            .filter(|p| p.is_analyzable())
            .filter(|p| platform.is_none_or(|wanted| p.platform == wanted))
            .collect();

        let modes = resolve_modes(&eligible, &self.config.scoring);
        let scored: Vec<ScoredPost<'_>> = eligible
            .iter()
            .filter_map(|&post| {
                let local = post.published_at?.with_timezone(&self.config.utc_offset);
                let mode = modes
                    .get(&post.platform)
                    .copied()
                    .unwrap_or(ScoreMode::Zero);
                Some(ScoredPost {
                    post,
                    score: score_post(post, mode, &self.config.scoring),
                    weekday: u8::try_from(local.weekday().num_days_from_sunday()).unwrap_or(0),
                    hour: u8::try_from(local.hour()).unwrap_or(0),
                })
            })
            .collect();

        let total = scored.len();
        let overall_avg_score = mean(scored.iter().map(|s| s.score).sum(), total);

        let mut analysis = PatternAnalysis {
            platform,
            summary: PatternSummary {
                total_posts_analyzed: total,
                insufficient_data: total < self.config.min_posts,
                overall_avg_score,
                top_recommendation: None,
                avoid_recommendation: None,
            },
            hook_type_performance: aggregate(&scored, overall_avg_score, |s| s.post.hook_type),
            topic_performance: aggregate(&scored, overall_avg_score, |s| s.post.topic),
            format_performance: aggregate(&scored, overall_avg_score, |s| s.post.format),
            best_posting_days: aggregate(&scored, overall_avg_score, |s| Some(s.weekday))
                .into_iter()
                .map(|g| DayPerformance {
                    day: g.value,
                    day_name: day_name(g.value),
                    multiplier: g.multiplier,
                    sample_size: g.sample_size,
                    avg_score: g.avg_score,
                })
                .collect(),
            best_posting_hours: aggregate(&scored, overall_avg_score, |s| Some(s.hour))
                .into_iter()
                .map(|g| HourPerformance {
                    hour: g.value,
                    multiplier: g.multiplier,
                    sample_size: g.sample_size,
                    avg_score: g.avg_score,
                })
                .collect(),
            platform_breakdown: aggregate(&scored, overall_avg_score, |s| Some(s.post.platform))
                .into_iter()
                .map(|g| PlatformBreakdown {
                    platform: g.value,
                    post_count: g.sample_size,
                    avg_score: g.avg_score,
                })
                .collect(),
        };

        if !analysis.summary.insufficient_data {
            let insights = analysis.insights();
            analysis.summary.top_recommendation =
                select_top(&insights, &self.config).map(top_sentence);
            analysis.summary.avoid_recommendation =
                select_avoid(&insights, &self.config).map(avoid_sentence);
        }

        tracing::debug!(
            platform = ?platform,
            posts = posts.len(),
            analyzed = total,
            overall_avg_score,
            insufficient = analysis.summary.insufficient_data,
            "pattern analysis complete"
        );

        analysis
    }

    /// Short next-post suggestions derived from [`Self::analyze`].
    #[must_use]
    pub fn next_post_recommendations(
        &self,
        posts: &[Post],
        platform: Option<Platform>,
    ) -> Vec<String> {
        crate::recommendations::next_post_recommendations(
            &self.analyze(posts, platform),
            &self.config,
        )
    }
}

/// Analyze with the default configuration.
#[must_use]
pub fn analyze_patterns(posts: &[Post], platform: Option<Platform>) -> PatternAnalysis {
    PerformanceAnalyzer::default().analyze(posts, platform)
}

/// Next-post suggestions with the default configuration.
#[must_use]
pub fn generate_next_post_recommendations(
    posts: &[Post],
    platform: Option<Platform>,
) -> Vec<String> {
    PerformanceAnalyzer::default().next_post_recommendations(posts, platform)
}

/// Group scored posts by `key_of`, then rank the groups.
///
/// Posts with no value for the dimension are skipped. Groups are ranked by
/// multiplier descending, then larger sample first; remaining ties keep the
/// order in which each value first appeared.
fn aggregate<K, F>(scored: &[ScoredPost<'_>], overall: f64, key_of: F) -> Vec<DimensionPerformance<K>>
where
    K: Copy + PartialEq,
    F: Fn(&ScoredPost<'_>) -> Option<K>,
{
    let mut groups: Vec<(K, f64, usize)> = Vec::new();
    for s in scored {
        let Some(key) = key_of(s) else {
            continue;
        };
        match groups.iter_mut().find(|(k, _, _)| *k == key) {
            Some(group) => {
                group.1 += s.score;
                group.2 += 1;
            }
            None => groups.push((key, s.score, 1)),
        }
    }

    let mut ranked: Vec<DimensionPerformance<K>> = groups
        .into_iter()
        .map(|(value, sum, count)| {
            let avg_score = mean(sum, count);
            DimensionPerformance {
                value,
                sample_size: count,
                avg_score,
                multiplier: multiplier(avg_score, overall),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.multiplier
            .total_cmp(&a.multiplier)
            .then_with(|| b.sample_size.cmp(&a.sample_size))
    });
    ranked
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = count as f64;
    sum / denom
}

#[allow(clippy::float_cmp)]
fn multiplier(avg: f64, overall: f64) -> f64 {
    if overall == 0.0 {
        1.0
    } else {
        avg / overall
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
