//! Natural-language recommendations over a [`PatternAnalysis`].
//!
//! Pure formatting: everything here reads the ranked lists the analyzer has
//! already produced.

use std::cmp::Ordering;

use planboard_core::Presentation;

use crate::types::{AnalyzerConfig, Dimension, DimensionInsight, PatternAnalysis};

/// How many next-post suggestions to produce at most.
const MAX_NEXT_POST_RECOMMENDATIONS: usize = 2;

impl PatternAnalysis {
    /// Every ranked entry of every dimension, flattened.
    ///
    /// Dimensions appear in a fixed order (hook type, topic, format, weekday,
    /// hour); entries within a dimension keep their ranking.
    #[must_use]
    pub fn insights(&self) -> Vec<DimensionInsight> {
        let mut out = Vec::new();
        out.extend(self.hook_type_performance.iter().map(|g| DimensionInsight {
            dimension: Dimension::HookType,
            label: g.value.label().to_string(),
            multiplier: g.multiplier,
            sample_size: g.sample_size,
        }));
        out.extend(self.topic_performance.iter().map(|g| DimensionInsight {
            dimension: Dimension::Topic,
            label: g.value.label().to_string(),
            multiplier: g.multiplier,
            sample_size: g.sample_size,
        }));
        out.extend(self.format_performance.iter().map(|g| DimensionInsight {
            dimension: Dimension::Format,
            label: g.value.label().to_string(),
            multiplier: g.multiplier,
            sample_size: g.sample_size,
        }));
        out.extend(self.best_posting_days.iter().map(|d| DimensionInsight {
            dimension: Dimension::Weekday,
            label: d.day_name.to_string(),
            multiplier: d.multiplier,
            sample_size: d.sample_size,
        }));
        out.extend(self.best_posting_hours.iter().map(|h| DimensionInsight {
            dimension: Dimension::Hour,
            label: format!("{:02}:00", h.hour),
            multiplier: h.multiplier,
            sample_size: h.sample_size,
        }));
        out
    }
}

/// Globally best entry with `multiplier > top_threshold` and enough samples.
///
/// Ties on multiplier go to the larger sample; full ties keep the first.
pub(crate) fn select_top<'a>(
    insights: &'a [DimensionInsight],
    config: &AnalyzerConfig,
) -> Option<&'a DimensionInsight> {
    pick(
        insights
            .iter()
            .filter(|i| i.multiplier > config.top_threshold)
            .filter(|i| i.sample_size >= config.min_sample_size),
        |cand, best| {
            cand.multiplier
                .total_cmp(&best.multiplier)
                .then(cand.sample_size.cmp(&best.sample_size))
        },
    )
}

/// Globally worst entry with `multiplier < avoid_threshold` and enough samples.
pub(crate) fn select_avoid<'a>(
    insights: &'a [DimensionInsight],
    config: &AnalyzerConfig,
) -> Option<&'a DimensionInsight> {
    pick(
        insights
            .iter()
            .filter(|i| i.multiplier < config.avoid_threshold)
            .filter(|i| i.sample_size >= config.min_sample_size),
        |cand, best| {
            best.multiplier
                .total_cmp(&cand.multiplier)
                .then(cand.sample_size.cmp(&best.sample_size))
        },
    )
}

/// First element that no later element strictly beats under `cmp`.
fn pick<'a, I, C>(candidates: I, cmp: C) -> Option<&'a DimensionInsight>
where
    I: Iterator<Item = &'a DimensionInsight>,
    C: Fn(&DimensionInsight, &DimensionInsight) -> Ordering,
{
    candidates.fold(None, |best, cand| match best {
        Some(b) if cmp(cand, b) != Ordering::Greater => Some(b),
        _ => Some(cand),
    })
}

fn subject(insight: &DimensionInsight) -> String {
    match insight.dimension {
        Dimension::HookType => format!(
            "Posts opening with a {} hook",
            insight.label.to_lowercase()
        ),
        Dimension::Topic => format!("Posts about {}", insight.label),
        Dimension::Format => format!("{} posts", insight.label),
        Dimension::Weekday => format!("Posts published on {}", insight.label),
        Dimension::Hour => format!("Posts published around {}", insight.label),
    }
}

pub(crate) fn top_sentence(insight: &DimensionInsight) -> String {
    format!(
        "{} perform {:.0}% above average ({} posts). Do more of this.",
        subject(insight),
        insight.percent_vs_average(),
        insight.sample_size
    )
}

pub(crate) fn avoid_sentence(insight: &DimensionInsight) -> String {
    format!(
        "{} perform {:.0}% below average ({} posts). Consider avoiding this.",
        subject(insight),
        -insight.percent_vs_average(),
        insight.sample_size
    )
}

fn next_post_sentence(insight: &DimensionInsight) -> String {
    let advice = match insight.dimension {
        Dimension::HookType | Dimension::Topic | Dimension::Format => {
            "consider reusing it for your next post"
        }
        Dimension::Weekday | Dimension::Hour => "consider scheduling your next post then",
    };
    format!(
        "{} perform +{:.0}% above average; {advice}.",
        subject(insight),
        insight.percent_vs_average()
    )
}

/// The top one or two dimension insights as short suggestions.
///
/// Considers, per dimension, the best entry that clears the top threshold
/// with enough samples. Empty when the analysis is insufficient or
/// nothing qualifies.
#[must_use]
pub fn next_post_recommendations(analysis: &PatternAnalysis, config: &AnalyzerConfig) -> Vec<String> {
    if analysis.summary.insufficient_data {
        return Vec::new();
    }

    let insights = analysis.insights();
    let mut seen: Vec<Dimension> = Vec::new();
    let mut leaders: Vec<&DimensionInsight> = Vec::new();
    for insight in &insights {
        let qualifies = insight.multiplier > config.top_threshold
            && insight.sample_size >= config.min_sample_size;
        // Lists are ranked, so the first qualifying entry is the dimension's best.
        if !qualifies || seen.contains(&insight.dimension) {
            continue;
        }
        seen.push(insight.dimension);
        leaders.push(insight);
    }

    leaders.sort_by(|a, b| {
        b.multiplier
            .total_cmp(&a.multiplier)
            .then_with(|| b.sample_size.cmp(&a.sample_size))
    });

    leaders
        .into_iter()
        .take(MAX_NEXT_POST_RECOMMENDATIONS)
        .map(next_post_sentence)
        .collect()
}
