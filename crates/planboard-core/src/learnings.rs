use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::PlatformMetrics;
use crate::posts::Platform;

closed_enum! {
    /// Self-reported verdict on how a published post performed.
    pub enum Outcome ("outcome") {
        Exceeded => "exceeded",
        Met => "met",
        Missed => "missed",
    }
}

/// A user-authored retrospective tied to exactly one post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostLearning {
    pub id: Uuid,
    /// Weak back-reference; lookup only.
    pub post_id: String,
    /// Platform of the referenced post, captured when the learning is written.
    pub platform: Platform,
    pub outcome: Outcome,
    #[serde(default)]
    pub what_worked: String,
    #[serde(default)]
    pub what_didnt_work: String,
    #[serde(default)]
    pub key_insight: String,
    #[serde(default)]
    pub apply_to_future: String,
    /// Copy of the post's metrics at capture time. Never updated.
    pub metrics_snapshot: Option<PlatformMetrics>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a [`PostLearning`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewLearning {
    pub post_id: String,
    pub platform: Platform,
    pub outcome: Outcome,
    pub what_worked: String,
    pub what_didnt_work: String,
    pub key_insight: String,
    pub apply_to_future: String,
    pub metrics_snapshot: Option<PlatformMetrics>,
}

impl NewLearning {
    #[must_use]
    pub fn new(post_id: impl Into<String>, platform: Platform, outcome: Outcome) -> Self {
        Self {
            post_id: post_id.into(),
            platform,
            outcome,
            what_worked: String::new(),
            what_didnt_work: String::new(),
            key_insight: String::new(),
            apply_to_future: String::new(),
            metrics_snapshot: None,
        }
    }

    #[must_use]
    pub fn with_key_insight(mut self, insight: impl Into<String>) -> Self {
        self.key_insight = insight.into();
        self
    }

    #[must_use]
    pub fn into_learning(self, id: Uuid, created_at: DateTime<Utc>) -> PostLearning {
        PostLearning {
            id,
            post_id: self.post_id,
            platform: self.platform,
            outcome: self.outcome,
            what_worked: self.what_worked,
            what_didnt_work: self.what_didnt_work,
            key_insight: self.key_insight,
            apply_to_future: self.apply_to_future,
            metrics_snapshot: self.metrics_snapshot,
            created_at,
        }
    }
}

/// Partial update for a [`PostLearning`]. `None` fields are left untouched.
///
/// Identity, post reference, platform, metrics snapshot and creation time are
/// not updatable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearningUpdate {
    pub outcome: Option<Outcome>,
    pub what_worked: Option<String>,
    pub what_didnt_work: Option<String>,
    pub key_insight: Option<String>,
    pub apply_to_future: Option<String>,
}

impl LearningUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<NewLearning> for LearningUpdate {
    /// Resubmitting the learning dialog overwrites every editable field.
    fn from(data: NewLearning) -> Self {
        Self {
            outcome: Some(data.outcome),
            what_worked: Some(data.what_worked),
            what_didnt_work: Some(data.what_didnt_work),
            key_insight: Some(data.key_insight),
            apply_to_future: Some(data.apply_to_future),
        }
    }
}

impl PostLearning {
    /// Merge `update` into this learning.
    pub fn apply(&mut self, update: LearningUpdate) {
        if let Some(outcome) = update.outcome {
            self.outcome = outcome;
        }
        if let Some(v) = update.what_worked {
            self.what_worked = v;
        }
        if let Some(v) = update.what_didnt_work {
            self.what_didnt_work = v;
        }
        if let Some(v) = update.key_insight {
            self.key_insight = v;
        }
        if let Some(v) = update.apply_to_future {
            self.apply_to_future = v;
        }
    }

    #[must_use]
    pub fn has_key_insight(&self) -> bool {
        !self.key_insight.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn learning() -> PostLearning {
        NewLearning::new("post-1", Platform::LinkedIn, Outcome::Met)
            .with_key_insight("numbers in the hook pull impressions")
            .into_learning(
                Uuid::nil(),
                Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap(),
            )
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut l = learning();
        l.apply(LearningUpdate {
            outcome: Some(Outcome::Exceeded),
            what_worked: Some("tight first line".to_string()),
            ..LearningUpdate::default()
        });
        assert_eq!(l.outcome, Outcome::Exceeded);
        assert_eq!(l.what_worked, "tight first line");
        assert_eq!(l.key_insight, "numbers in the hook pull impressions");
        assert_eq!(l.id, Uuid::nil());
    }

    #[test]
    fn whitespace_insight_does_not_count() {
        let mut l = learning();
        l.key_insight = "   ".to_string();
        assert!(!l.has_key_insight());
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(LearningUpdate::default().is_empty());
        assert!(!LearningUpdate {
            key_insight: Some(String::new()),
            ..LearningUpdate::default()
        }
        .is_empty());
    }
}
