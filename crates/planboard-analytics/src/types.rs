use chrono::{FixedOffset, Offset, Utc};
use planboard_core::{HookType, Platform, PostFormat, ScoringPolicy, Topic};
use serde::Serialize;

/// Performance of one value of one dimension (e.g. `hook_type = number`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionPerformance<K> {
    pub value: K,
    /// Number of analyzable posts carrying this value.
    pub sample_size: usize,
    /// Mean normalized score of those posts.
    pub avg_score: f64,
    /// `avg_score / overall_avg_score`; 1.0 when the overall average is zero.
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPerformance {
    /// 0 = Sunday … 6 = Saturday, in the configured local offset.
    pub day: u8,
    pub day_name: &'static str,
    pub multiplier: f64,
    pub sample_size: usize,
    pub avg_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourPerformance {
    /// 0–23, in the configured local offset.
    pub hour: u8,
    pub multiplier: f64,
    pub sample_size: usize,
    pub avg_score: f64,
}

/// Post count and mean score for one platform within the analyzed pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBreakdown {
    pub platform: Platform,
    pub post_count: usize,
    pub avg_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    pub total_posts_analyzed: usize,
    /// Fewer analyzable posts than the configured minimum. Callers must not
    /// present recommendations when this is set.
    pub insufficient_data: bool,
    pub overall_avg_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_recommendation: Option<String>,
}

/// Result of one analysis call. Derived on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysis {
    /// Platform filter the analysis was run with; `None` pools all platforms.
    pub platform: Option<Platform>,
    pub summary: PatternSummary,
    pub hook_type_performance: Vec<DimensionPerformance<HookType>>,
    pub topic_performance: Vec<DimensionPerformance<Topic>>,
    pub format_performance: Vec<DimensionPerformance<PostFormat>>,
    pub best_posting_days: Vec<DayPerformance>,
    pub best_posting_hours: Vec<HourPerformance>,
    pub platform_breakdown: Vec<PlatformBreakdown>,
}

/// Dimension a post is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    HookType,
    Topic,
    Format,
    Weekday,
    Hour,
}

impl Dimension {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::HookType => "hook_type",
            Dimension::Topic => "topic",
            Dimension::Format => "format",
            Dimension::Weekday => "weekday",
            Dimension::Hour => "hour",
        }
    }
}

/// One ranked entry of any dimension, flattened for cross-dimension ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionInsight {
    pub dimension: Dimension,
    /// Human-readable value, e.g. `"Bold claim"`, `"Tuesday"`, `"09:00"`.
    pub label: String,
    pub multiplier: f64,
    pub sample_size: usize,
}

impl DimensionInsight {
    /// Signed percentage over or under the average, e.g. `+42` or `-18`.
    #[must_use]
    pub fn percent_vs_average(&self) -> f64 {
        (self.multiplier - 1.0) * 100.0
    }
}

/// Thresholds and scoring rules for [`crate::PerformanceAnalyzer`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Below this many analyzable posts the result is "insufficient".
    pub min_posts: usize,
    /// Smallest group a recommendation may name.
    pub min_sample_size: usize,
    /// A group must beat this multiplier to be recommended.
    pub top_threshold: f64,
    /// A group must fall under this multiplier to be flagged for avoidance.
    pub avoid_threshold: f64,
    /// Local offset used for weekday and hour buckets.
    pub utc_offset: FixedOffset,
    pub scoring: ScoringPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_posts: 3,
            min_sample_size: 3,
            top_threshold: 1.1,
            avoid_threshold: 0.9,
            utc_offset: Utc.fix(),
            scoring: ScoringPolicy::default(),
        }
    }
}
