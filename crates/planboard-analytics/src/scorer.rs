//! Reduces platform-specific metrics to one comparable score per post.

use std::collections::BTreeMap;

use planboard_core::{MetricKey, Platform, Post, RateRule, ScoringPolicy};

/// Rates are reported as percentages.
pub(crate) const RATE_SCALE: f64 = 100.0;

/// How scores are derived for every post of one platform within one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMode {
    /// Engagement rate from the platform rule's numerator and denominator.
    Rate,
    /// A single absolute metric. Posts missing it score `0.0`.
    Absolute(MetricKey),
    /// No fallback metric is recorded on any post; every post scores `0.0`.
    Zero,
}

/// Engagement rate for one post, as a percentage.
///
/// `None` if the denominator is missing or zero, or no numerator metric is
/// recorded at all.
#[must_use]
pub fn rate_score(post: &Post, rule: &RateRule) -> Option<f64> {
    let metrics = post.platform_metrics()?;
    let denominator = metrics.get(rule.denominator).filter(|d| *d > 0.0)?;
    let present: Vec<f64> = rule
        .numerator
        .iter()
        .filter_map(|&key| metrics.get(key))
        .collect();
    if present.is_empty() {
        return None;
    }
    let numerator: f64 = present.iter().sum();
    Some(numerator / denominator * RATE_SCALE)
}

/// Pick one score mode per platform so that every post of that platform is
/// reduced the same way.
///
/// Rate mode is used only when every post of the platform yields a rate;
/// otherwise the first fallback metric recorded on any of those posts wins.
#[must_use]
pub fn resolve_modes(posts: &[&Post], policy: &ScoringPolicy) -> BTreeMap<Platform, ScoreMode> {
    let mut by_platform: BTreeMap<Platform, Vec<&Post>> = BTreeMap::new();
    for &post in posts {
        by_platform.entry(post.platform).or_default().push(post);
    }

    by_platform
        .into_iter()
        .map(|(platform, group)| {
            let rule = policy.rule_for(platform);
            let all_rated = rule.rate.as_ref().is_some_and(|rate| {
                group.iter().all(|post| rate_score(post, rate).is_some())
            });

            let mode = if all_rated {
                ScoreMode::Rate
            } else {
                rule.fallback
                    .iter()
                    .copied()
                    .find(|&key| {
                        group.iter().any(|post| {
                            post.platform_metrics()
                                .and_then(|m| m.get(key))
                                .is_some()
                        })
                    })
                    .map_or(ScoreMode::Zero, ScoreMode::Absolute)
            };

            if mode == ScoreMode::Zero {
                tracing::warn!(
                    %platform,
                    posts = group.len(),
                    "no fallback metric recorded for platform; scoring its posts as zero"
                );
            } else {
                tracing::debug!(%platform, posts = group.len(), ?mode, "resolved score mode");
            }

            (platform, mode)
        })
        .collect()
}

/// Score one post under an already-resolved mode.
#[must_use]
pub fn score_post(post: &Post, mode: ScoreMode, policy: &ScoringPolicy) -> f64 {
    match mode {
        ScoreMode::Rate => policy
            .rule_for(post.platform)
            .rate
            .as_ref()
            .and_then(|rate| rate_score(post, rate))
            .unwrap_or(0.0),
        ScoreMode::Absolute(key) => post
            .platform_metrics()
            .and_then(|m| m.get(key))
            .unwrap_or(0.0),
        ScoreMode::Zero => 0.0,
    }
}
