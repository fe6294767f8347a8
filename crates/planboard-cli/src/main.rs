mod analyze;
mod learnings;
mod report;

use chrono::FixedOffset;
use clap::{Parser, Subcommand};
use planboard_analytics::{AnalyzerConfig, PerformanceAnalyzer};
use planboard_core::{AppConfig, Platform};
use planboard_store::JsonStore;
use tracing_subscriber::EnvFilter;

use crate::learnings::LearningsCommands;

#[derive(Debug, Parser)]
#[command(name = "planboard")]
#[command(about = "Content performance analysis for the planning board")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summarize which hooks, topics, formats and posting times perform best
    Analyze {
        /// Restrict the analysis to one platform
        #[arg(long)]
        platform: Option<Platform>,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print short suggestions for the next post
    Recommend {
        /// Restrict to one platform
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Generate a markdown performance report
    Report {
        /// Restrict to one platform
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Print the context block for the content manager prompt
    Context {
        /// Restrict to one platform
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Record and query post learnings
    Learnings {
        #[command(subcommand)]
        command: LearningsCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let config = planboard_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("planboard: no command given; see `planboard --help`");
        return Ok(());
    };

    let mut store = JsonStore::new(&config.data_dir);
    tracing::debug!(env = %config.env, data_dir = %config.data_dir.display(), "starting");

    match command {
        Commands::Analyze { platform, json } => {
            let analyzer = build_analyzer(&config)?;
            analyze::run_analyze(&store, &analyzer, platform, json)?;
        }
        Commands::Recommend { platform } => {
            let analyzer = build_analyzer(&config)?;
            analyze::run_recommend(&store, &analyzer, platform)?;
        }
        Commands::Report { platform } => {
            let analyzer = build_analyzer(&config)?;
            analyze::run_report(&store, &analyzer, platform)?;
        }
        Commands::Context { platform } => {
            let analyzer = build_analyzer(&config)?;
            analyze::run_context(&store, &analyzer, platform)?;
        }
        Commands::Learnings { command } => learnings::run(&mut store, command)?,
    }

    Ok(())
}

/// Build the analyzer from app config, loading the scoring policy file if one
/// is configured.
///
/// # Errors
///
/// Returns an error if the policy file cannot be loaded or the UTC offset is
/// out of range.
fn build_analyzer(config: &AppConfig) -> anyhow::Result<PerformanceAnalyzer> {
    let scoring = match &config.scoring_policy_path {
        Some(path) => {
            let policy = planboard_core::load_scoring_policy(path)?;
            tracing::info!(path = %path.display(), "loaded scoring policy");
            policy
        }
        None => planboard_core::ScoringPolicy::default(),
    };

    let utc_offset = FixedOffset::east_opt(config.utc_offset_minutes * 60).ok_or_else(|| {
        anyhow::anyhow!("utc offset of {} minutes is out of range", config.utc_offset_minutes)
    })?;

    Ok(PerformanceAnalyzer::new(AnalyzerConfig {
        min_posts: config.min_posts,
        min_sample_size: config.min_sample_size,
        utc_offset,
        scoring,
        ..AnalyzerConfig::default()
    }))
}
