use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding `posts.json` and `learnings.json`.
    pub data_dir: PathBuf,
    /// Optional YAML override for the built-in scoring policy.
    pub scoring_policy_path: Option<PathBuf>,
    /// Offset from UTC used to bucket posts by local weekday and hour.
    pub utc_offset_minutes: i32,
    /// Below this many analyzable posts an analysis is "not enough data".
    pub min_posts: usize,
    /// Smallest group size a recommendation may be based on.
    pub min_sample_size: usize,
}
