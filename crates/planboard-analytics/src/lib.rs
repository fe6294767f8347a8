//! Content performance analytics for planboard.
//!
//! Reduces each published post's platform metrics to a normalized score,
//! groups posts by hook type, topic, format, weekday and hour, and reports
//! how each group performs relative to the overall average. Also keeps the
//! user's post learnings and renders both as recommendations and as context
//! for the LLM content manager.

pub mod analyzer;
pub mod learnings;
pub mod prompt;
pub mod recommendations;
pub mod scorer;
pub mod types;

pub use analyzer::{analyze_patterns, generate_next_post_recommendations, PerformanceAnalyzer};
pub use learnings::{LearningsAggregator, SuccessRate};
pub use prompt::build_manager_context;
pub use recommendations::next_post_recommendations;
pub use scorer::ScoreMode;
pub use types::{
    AnalyzerConfig, DayPerformance, Dimension, DimensionInsight, DimensionPerformance,
    HourPerformance, PatternAnalysis, PatternSummary, PlatformBreakdown,
};
