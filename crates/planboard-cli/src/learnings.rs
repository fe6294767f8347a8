//! Learning command handlers for the CLI.
//!
//! Every mutating command loads the stored learnings, applies one change
//! through [`LearningsAggregator`], and writes the collection back.

use clap::{Args, Subcommand};
use planboard_analytics::LearningsAggregator;
use planboard_core::{LearningUpdate, NewLearning, Outcome, Platform, PostLearning, Presentation};
use planboard_store::{LearningRepository, PostRepository};
use uuid::Uuid;

const DEFAULT_INSIGHT_LIMIT: usize = 5;

/// Free-text fields shared by `add` and `update`.
#[derive(Debug, Default, Args)]
pub struct LearningFields {
    /// What worked about the post
    #[arg(long)]
    pub worked: Option<String>,

    /// What did not work
    #[arg(long)]
    pub didnt_work: Option<String>,

    /// One-sentence takeaway
    #[arg(long)]
    pub insight: Option<String>,

    /// What to apply to future posts
    #[arg(long)]
    pub apply: Option<String>,
}

/// Sub-commands available under `learnings`.
#[derive(Debug, Subcommand)]
pub enum LearningsCommands {
    /// Record a learning for a post (replaces the post's existing one)
    Add {
        /// Post id
        #[arg(long)]
        post: String,

        /// exceeded, met or missed
        #[arg(long)]
        outcome: Outcome,

        #[command(flatten)]
        fields: LearningFields,
    },
    /// Edit fields of an existing learning
    Update {
        /// Learning id
        #[arg(long)]
        id: Uuid,

        #[arg(long)]
        outcome: Option<Outcome>,

        #[command(flatten)]
        fields: LearningFields,
    },
    /// Delete a learning
    Delete {
        /// Learning id
        #[arg(long)]
        id: Uuid,
    },
    /// Show the learning recorded for a post
    Show {
        /// Post id
        #[arg(long)]
        post: String,
    },
    /// Outcome counts and success rate
    Stats {
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Most recent key insights
    Insights {
        #[arg(long)]
        platform: Option<Platform>,

        /// Maximum number of insights to show
        #[arg(long, default_value_t = DEFAULT_INSIGHT_LIMIT)]
        limit: usize,
    },
}

/// Dispatch one `learnings` sub-command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, or the referenced
/// post or learning does not exist.
pub(crate) fn run<S>(store: &mut S, command: LearningsCommands) -> anyhow::Result<()>
where
    S: PostRepository + LearningRepository,
{
    match command {
        LearningsCommands::Add {
            post,
            outcome,
            fields,
        } => run_add(store, &post, outcome, fields),
        LearningsCommands::Update {
            id,
            outcome,
            fields,
        } => run_update(store, id, outcome, fields),
        LearningsCommands::Delete { id } => run_delete(store, id),
        LearningsCommands::Show { post } => run_show(&*store, &post),
        LearningsCommands::Stats { platform } => run_stats(&*store, platform),
        LearningsCommands::Insights { platform, limit } => run_insights(&*store, platform, limit),
    }
}

fn load(store: &impl LearningRepository) -> anyhow::Result<LearningsAggregator> {
    Ok(LearningsAggregator::from_learnings(store.load_learnings()?))
}

fn save(store: &mut impl LearningRepository, learnings: &LearningsAggregator) -> anyhow::Result<()> {
    store.save_learnings(learnings.learnings())?;
    Ok(())
}

/// Create a learning for `post_id`, or overwrite the editable fields of the
/// one it already has.
fn run_add<S>(
    store: &mut S,
    post_id: &str,
    outcome: Outcome,
    fields: LearningFields,
) -> anyhow::Result<()>
where
    S: PostRepository + LearningRepository,
{
    let post = store
        .get_post(post_id)?
        .ok_or_else(|| anyhow::anyhow!("post '{post_id}' not found"))?;

    let data = NewLearning {
        what_worked: fields.worked.unwrap_or_default(),
        what_didnt_work: fields.didnt_work.unwrap_or_default(),
        key_insight: fields.insight.unwrap_or_default(),
        apply_to_future: fields.apply.unwrap_or_default(),
        metrics_snapshot: post.platform_metrics().cloned(),
        ..NewLearning::new(post.id.clone(), post.platform, outcome)
    };

    let mut learnings = load(&*store)?;
    let id = if let Some(existing) = learnings.get_learning_for_post(post_id).map(|l| l.id) {
        learnings.update_learning(existing, LearningUpdate::from(data));
        println!("updated learning {existing} for post '{post_id}'");
        existing
    } else {
        let id = learnings
            .add_learning(data)
            .ok_or_else(|| anyhow::anyhow!("post '{post_id}' already has a learning"))?;
        println!("recorded learning {id} for post '{post_id}'");
        id
    };

    save(store, &learnings)?;
    tracing::info!(post_id, learning_id = %id, %outcome, "learning saved");
    Ok(())
}

fn run_update(
    store: &mut impl LearningRepository,
    id: Uuid,
    outcome: Option<Outcome>,
    fields: LearningFields,
) -> anyhow::Result<()> {
    let update = LearningUpdate {
        outcome,
        what_worked: fields.worked,
        what_didnt_work: fields.didnt_work,
        key_insight: fields.insight,
        apply_to_future: fields.apply,
    };
    if update.is_empty() {
        anyhow::bail!("nothing to update; pass --outcome or at least one text field");
    }

    let mut learnings = load(&*store)?;
    if !learnings.update_learning(id, update) {
        anyhow::bail!("learning {id} not found");
    }
    save(store, &learnings)?;
    println!("updated learning {id}");
    Ok(())
}

fn run_delete(store: &mut impl LearningRepository, id: Uuid) -> anyhow::Result<()> {
    let mut learnings = load(&*store)?;
    if !learnings.delete_learning(id) {
        anyhow::bail!("learning {id} not found");
    }
    save(store, &learnings)?;
    println!("deleted learning {id}");
    Ok(())
}

fn run_show(store: &impl LearningRepository, post_id: &str) -> anyhow::Result<()> {
    let learnings = load(store)?;
    let Some(learning) = learnings.get_learning_for_post(post_id) else {
        println!("no learning recorded for post '{post_id}'");
        return Ok(());
    };
    print!("{}", format_learning(learning));
    Ok(())
}

fn run_stats(store: &impl LearningRepository, platform: Option<Platform>) -> anyhow::Result<()> {
    let stats = load(store)?.get_success_rate(platform);
    let scope = platform.map_or("all platforms", |p| p.label());

    match stats.rate() {
        Some(rate) => {
            println!("{:<10}{:<10}{:<10}{:<10}SUCCESS", "EXCEEDED", "MET", "MISSED", "TOTAL");
            println!(
                "{:<10}{:<10}{:<10}{:<10}{:.0}%",
                stats.exceeded,
                stats.met,
                stats.missed,
                stats.total,
                rate * 100.0
            );
        }
        None => println!("no learnings recorded for {scope}"),
    }
    Ok(())
}

fn run_insights(
    store: &impl LearningRepository,
    platform: Option<Platform>,
    limit: usize,
) -> anyhow::Result<()> {
    let learnings = load(store)?;
    let insights = learnings.get_top_insights(platform, limit);
    if insights.is_empty() {
        println!("no key insights recorded yet");
        return Ok(());
    }
    for learning in insights {
        println!(
            "{}  {:<12}{}",
            learning.created_at.format("%Y-%m-%d"),
            learning.outcome.badge(),
            learning.key_insight.trim()
        );
    }
    Ok(())
}

fn format_learning(learning: &PostLearning) -> String {
    let blank = |s: &str| {
        let s = s.trim();
        if s.is_empty() {
            "\u{2014}".to_string()
        } else {
            s.to_string()
        }
    };
    format!(
        "id:          {}\npost:        {} ({})\noutcome:     {}\nrecorded:    {}\nworked:      {}\ndidn't work: {}\ninsight:     {}\napply:       {}\n",
        learning.id,
        learning.post_id,
        learning.platform.label(),
        learning.outcome.badge(),
        learning.created_at.format("%Y-%m-%d %H:%M UTC"),
        blank(&learning.what_worked),
        blank(&learning.what_didnt_work),
        blank(&learning.key_insight),
        blank(&learning.apply_to_future),
    )
}
