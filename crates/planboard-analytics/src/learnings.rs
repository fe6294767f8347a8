//! In-process collection of post learnings and its read-side aggregates.

use chrono::{DateTime, Utc};
use planboard_core::{LearningUpdate, NewLearning, Outcome, Platform, PostLearning};
use serde::Serialize;
use uuid::Uuid;

/// Outcome counts over a set of learnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SuccessRate {
    pub exceeded: usize,
    pub met: usize,
    pub missed: usize,
    pub total: usize,
}

impl SuccessRate {
    /// `(exceeded + met) / total`, or `None` with no learnings.
    #[must_use]
    pub fn rate(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = (self.exceeded + self.met) as f64 / self.total as f64;
        Some(rate)
    }
}

/// Holds at most one [`PostLearning`] per post.
///
/// Persistence is the caller's job: build from whatever a repository loaded
/// and hand [`Self::learnings`] back to it after mutating.
#[derive(Debug, Clone, Default)]
pub struct LearningsAggregator {
    learnings: Vec<PostLearning>,
}

impl LearningsAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored learnings, keeping only the first record per post.
    #[must_use]
    pub fn from_learnings(stored: Vec<PostLearning>) -> Self {
        let mut aggregator = Self::new();
        for learning in stored {
            if aggregator.get_learning_for_post(&learning.post_id).is_some() {
                tracing::warn!(
                    post_id = %learning.post_id,
                    learning_id = %learning.id,
                    "dropping duplicate learning for post"
                );
                continue;
            }
            aggregator.learnings.push(learning);
        }
        aggregator
    }

    #[must_use]
    pub fn learnings(&self) -> &[PostLearning] {
        &self.learnings
    }

    #[must_use]
    pub fn into_learnings(self) -> Vec<PostLearning> {
        self.learnings
    }

    /// Create a learning stamped with the current time.
    ///
    /// Returns the new id, or `None` (and changes nothing) if the post already
    /// has a learning. Use [`Self::update_learning`] for resubmissions.
    pub fn add_learning(&mut self, data: NewLearning) -> Option<Uuid> {
        self.add_learning_at(data, Utc::now())
    }

    /// [`Self::add_learning`] with an explicit creation time.
    pub fn add_learning_at(&mut self, data: NewLearning, created_at: DateTime<Utc>) -> Option<Uuid> {
        if let Some(existing) = self.get_learning_for_post(&data.post_id) {
            tracing::debug!(
                post_id = %data.post_id,
                learning_id = %existing.id,
                "learning already exists for post; ignoring add"
            );
            return None;
        }
        let id = Uuid::new_v4();
        self.learnings.push(data.into_learning(id, created_at));
        Some(id)
    }

    /// Merge `update` into the learning with `id`. Returns `false` if absent.
    pub fn update_learning(&mut self, id: Uuid, update: LearningUpdate) -> bool {
        match self.learnings.iter_mut().find(|l| l.id == id) {
            Some(learning) => {
                learning.apply(update);
                true
            }
            None => false,
        }
    }

    /// Remove the learning with `id`. Returns `false` if absent.
    pub fn delete_learning(&mut self, id: Uuid) -> bool {
        let before = self.learnings.len();
        self.learnings.retain(|l| l.id != id);
        self.learnings.len() != before
    }

    #[must_use]
    pub fn get_learning_for_post(&self, post_id: &str) -> Option<&PostLearning> {
        self.learnings.iter().find(|l| l.post_id == post_id)
    }

    #[must_use]
    pub fn get_learning(&self, id: Uuid) -> Option<&PostLearning> {
        self.learnings.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn get_success_rate(&self, platform: Option<Platform>) -> SuccessRate {
        self.for_platform(platform)
            .fold(SuccessRate::default(), |mut acc, l| {
                match l.outcome {
                    Outcome::Exceeded => acc.exceeded += 1,
                    Outcome::Met => acc.met += 1,
                    Outcome::Missed => acc.missed += 1,
                }
                acc.total += 1;
                acc
            })
    }

    /// Most recent learnings with a non-empty key insight, newest first.
    #[must_use]
    pub fn get_top_insights(&self, platform: Option<Platform>, limit: usize) -> Vec<&PostLearning> {
        let mut with_insight: Vec<&PostLearning> = self
            .for_platform(platform)
            .filter(|l| l.has_key_insight())
            .collect();
        with_insight.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        with_insight.truncate(limit);
        with_insight
    }

    fn for_platform(&self, platform: Option<Platform>) -> impl Iterator<Item = &PostLearning> {
        self.learnings
            .iter()
            .filter(move |l| platform.is_none_or(|p| l.platform == p))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap()
    }

    fn new(post_id: &str, platform: Platform, outcome: Outcome, insight: &str) -> NewLearning {
        NewLearning::new(post_id, platform, outcome).with_key_insight(insight)
    }

    #[test]
    fn add_twice_for_same_post_is_noop() {
        let mut agg = LearningsAggregator::new();
        let first = agg
            .add_learning(new("p1", Platform::LinkedIn, Outcome::Met, "first"))
            .expect("first add creates a record");
        let second = agg.add_learning(new("p1", Platform::LinkedIn, Outcome::Missed, "second"));

        assert!(second.is_none());
        assert_eq!(agg.learnings().len(), 1);
        let stored = agg.get_learning_for_post("p1").unwrap();
        assert_eq!(stored.id, first);
        assert_eq!(stored.outcome, Outcome::Met);
        assert_eq!(stored.key_insight, "first");
    }

    #[test]
    fn update_keeps_id_and_created_at() {
        let mut agg = LearningsAggregator::new();
        let id = agg
            .add_learning_at(new("p1", Platform::YouTube, Outcome::Met, ""), t0())
            .unwrap();
        let touched = agg.update_learning(
            id,
            LearningUpdate {
                outcome: Some(Outcome::Exceeded),
                key_insight: Some("thumbnails with faces win".to_string()),
                ..LearningUpdate::default()
            },
        );

        assert!(touched);
        let l = agg.get_learning(id).unwrap();
        assert_eq!(l.id, id);
        assert_eq!(l.created_at, t0());
        assert_eq!(l.outcome, Outcome::Exceeded);
        assert_eq!(l.key_insight, "thumbnails with faces win");
    }

    #[test]
    fn update_unknown_id_returns_false() {
        let mut agg = LearningsAggregator::new();
        assert!(!agg.update_learning(Uuid::new_v4(), LearningUpdate::default()));
    }

    #[test]
    fn delete_removes_and_allows_new_learning_for_post() {
        let mut agg = LearningsAggregator::new();
        let id = agg
            .add_learning(new("p1", Platform::Skool, Outcome::Missed, ""))
            .unwrap();
        assert!(agg.delete_learning(id));
        assert!(!agg.delete_learning(id));
        assert!(agg.get_learning_for_post("p1").is_none());
        assert!(agg
            .add_learning(new("p1", Platform::Skool, Outcome::Met, ""))
            .is_some());
    }

    #[test]
    fn success_rate_counts_outcomes_per_platform() {
        let mut agg = LearningsAggregator::new();
        agg.add_learning(new("a", Platform::LinkedIn, Outcome::Exceeded, ""));
        agg.add_learning(new("b", Platform::LinkedIn, Outcome::Met, ""));
        agg.add_learning(new("c", Platform::LinkedIn, Outcome::Missed, ""));
        agg.add_learning(new("d", Platform::Instagram, Outcome::Missed, ""));

        let linkedin = agg.get_success_rate(Some(Platform::LinkedIn));
        assert_eq!(
            linkedin,
            SuccessRate {
                exceeded: 1,
                met: 1,
                missed: 1,
                total: 3
            }
        );
        let rate = linkedin.rate().unwrap();
        assert!((rate - 2.0 / 3.0).abs() < 1e-12);

        let all = agg.get_success_rate(None);
        assert_eq!(all.total, 4);
        assert_eq!(all.missed, 2);
    }

    #[test]
    fn empty_success_rate_has_no_ratio() {
        let agg = LearningsAggregator::new();
        assert_eq!(agg.get_success_rate(None).rate(), None);
    }

    #[test]
    fn top_insights_are_newest_first_and_limited() {
        let mut agg = LearningsAggregator::new();
        agg.add_learning_at(new("a", Platform::LinkedIn, Outcome::Met, "oldest"), t0());
        agg.add_learning_at(
            new("b", Platform::LinkedIn, Outcome::Met, "  "),
            t0() + Duration::days(1),
        );
        agg.add_learning_at(
            new("c", Platform::LinkedIn, Outcome::Met, "middle"),
            t0() + Duration::days(2),
        );
        agg.add_learning_at(
            new("d", Platform::YouTube, Outcome::Met, "other platform"),
            t0() + Duration::days(3),
        );
        agg.add_learning_at(
            new("e", Platform::LinkedIn, Outcome::Met, "newest"),
            t0() + Duration::days(4),
        );

        let insights: Vec<&str> = agg
            .get_top_insights(Some(Platform::LinkedIn), 2)
            .into_iter()
            .map(|l| l.key_insight.as_str())
            .collect();
        assert_eq!(insights, vec!["newest", "middle"]);

        assert_eq!(agg.get_top_insights(None, 10).len(), 4);
        assert!(agg.get_top_insights(None, 0).is_empty());
    }

    #[test]
    fn from_learnings_drops_duplicates_per_post() {
        let a = new("p1", Platform::LinkedIn, Outcome::Met, "keep").into_learning(Uuid::new_v4(), t0());
        let b = new("p1", Platform::LinkedIn, Outcome::Missed, "drop")
            .into_learning(Uuid::new_v4(), t0());
        let agg = LearningsAggregator::from_learnings(vec![a.clone(), b]);
        assert_eq!(agg.into_learnings(), vec![a]);
    }
}
