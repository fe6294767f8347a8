//! Domain types and configuration shared by every planboard crate.
//!
//! Posts, per-platform metric sets, learnings, the scoring policy that turns
//! metrics into one comparable number, and the env-driven application config.

#[macro_use]
mod macros;

pub mod app_config;
pub mod config;
pub mod display;
pub mod learnings;
pub mod metrics;
pub mod posts;
pub mod scoring;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use display::{DisplayMeta, Presentation};
pub use learnings::{LearningUpdate, NewLearning, Outcome, PostLearning};
pub use metrics::{
    InstagramMetrics, LinkedInMetrics, MetricKey, PlatformMetrics, SkoolMetrics, YouTubeMetrics,
};
pub use posts::{HookType, Platform, Post, PostFormat, PostStatus, Topic};
pub use scoring::{load_scoring_policy, RateRule, ScoreRule, ScoringPolicy};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read scoring policy file {path}: {source}")]
    PolicyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scoring policy: {0}")]
    PolicyFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
