use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::PlatformMetrics;

closed_enum! {
    /// Social platform a post is planned for.
    pub enum Platform ("platform") {
        LinkedIn => "linkedin",
        YouTube => "youtube",
        Instagram => "instagram",
        Skool => "skool",
    }
}

closed_enum! {
    /// Lifecycle stage of a post on the planning board.
    pub enum PostStatus ("status") {
        Idea => "idea",
        Draft => "draft",
        Scheduled => "scheduled",
        Published => "published",
        Archived => "archived",
    }
}

closed_enum! {
    /// Opening technique used in the first line of a post.
    pub enum HookType ("hook type") {
        Number => "number",
        Question => "question",
        BoldClaim => "bold_claim",
        Curiosity => "curiosity",
        PersonalStory => "personal_story",
        PainPoint => "pain_point",
    }
}

closed_enum! {
    /// Content subject a post is filed under.
    pub enum Topic ("topic") {
        AiTools => "ai_tools",
        Automation => "automation",
        Productivity => "productivity",
        Entrepreneurship => "entrepreneurship",
        Career => "career",
        Leadership => "leadership",
        Marketing => "marketing",
        Tutorial => "tutorial",
        CaseStudy => "case_study",
        BehindTheScenes => "behind_the_scenes",
        Community => "community",
    }
}

closed_enum! {
    /// Structural shape of the post body.
    pub enum PostFormat ("format") {
        List => "list",
        Story => "story",
        HowTo => "how_to",
        Opinion => "opinion",
        Question => "question",
        Announcement => "announcement",
    }
}

/// A unit of content for one platform, as kept on the planning board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub platform: Platform,
    pub status: PostStatus,
    #[serde(default)]
    pub title: String,
    /// Set when the post transitions to `published`.
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub hook_type: Option<HookType>,
    pub topic: Option<Topic>,
    pub format: Option<PostFormat>,
    /// Unreadable metric objects load as `None` instead of failing the post.
    #[serde(default, deserialize_with = "crate::metrics::lenient_platform_metrics")]
    pub metrics: Option<PlatformMetrics>,
    /// Free-form tags. Never used for scoring.
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Bare post with no metadata, metrics or timestamps.
    #[must_use]
    pub fn new(id: impl Into<String>, platform: Platform, status: PostStatus) -> Self {
        Self {
            id: id.into(),
            platform,
            status,
            title: String::new(),
            published_at: None,
            scheduled_for: None,
            hook_type: None,
            topic: None,
            format: None,
            metrics: None,
            tags: Vec::new(),
            created_at: None,
        }
    }

    /// Metrics recorded for this post, if they belong to the post's own platform.
    ///
    /// A metric set tagged for a different platform is treated as absent.
    #[must_use]
    pub fn platform_metrics(&self) -> Option<&PlatformMetrics> {
        self.metrics
            .as_ref()
            .filter(|m| m.platform() == self.platform)
    }

    /// Returns `true` if at least one recorded metric is a positive number.
    #[must_use]
    pub fn has_positive_metric(&self) -> bool {
        self.platform_metrics()
            .is_some_and(PlatformMetrics::has_positive_value)
    }

    /// A post is analyzable iff it is published, has a publish timestamp,
    /// and carries at least one positive metric value.
    #[must_use]
    pub fn is_analyzable(&self) -> bool {
        self.status == PostStatus::Published
            && self.published_at.is_some()
            && self.has_positive_metric()
    }
}
