//! Per-platform engagement counters.
//!
//! Each platform exposes its own metric names, so metrics are a tagged union
//! keyed by platform. Every variant declares a fixed field set; callers read
//! values through [`MetricKey`] and get `None` for keys the platform does not
//! track.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::posts::Platform;

closed_enum! {
    /// Name of a single numeric metric across all platform variants.
    pub enum MetricKey ("metric") {
        Impressions => "impressions",
        Views => "views",
        Reach => "reach",
        PostViews => "post_views",
        Likes => "likes",
        Comments => "comments",
        Shares => "shares",
        Saves => "saves",
        Clicks => "clicks",
        Engagement => "engagement",
        WatchTimeMinutes => "watch_time_minutes",
        SubscribersGained => "subscribers_gained",
        Members => "members",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInMetrics {
    #[serde(default, deserialize_with = "lenient_metric")]
    pub impressions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub likes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub comments: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub shares: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub clicks: Option<f64>,
    /// Total engagement count as reported by LinkedIn analytics.
    #[serde(default, deserialize_with = "lenient_metric")]
    pub engagement: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeMetrics {
    #[serde(default, deserialize_with = "lenient_metric")]
    pub views: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub watch_time_minutes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub likes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub comments: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub subscribers_gained: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramMetrics {
    #[serde(default, deserialize_with = "lenient_metric")]
    pub reach: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub impressions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub likes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub comments: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub saves: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub shares: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkoolMetrics {
    /// Community size at the time the post went out.
    #[serde(default, deserialize_with = "lenient_metric")]
    pub members: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub post_views: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub likes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_metric")]
    pub comments: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum PlatformMetrics {
    #[serde(rename = "linkedin")]
    LinkedIn(LinkedInMetrics),
    #[serde(rename = "youtube")]
    YouTube(YouTubeMetrics),
    Instagram(InstagramMetrics),
    Skool(SkoolMetrics),
}

/// Reads one metric value, mapping anything that is not a usable number to
/// `None` so a single bad field never rejects the whole post.
///
/// Numeric strings such as `"1200"` are accepted.
fn lenient_metric<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(v) => Some(v),
        Raw::Text(text) => {
            let parsed = text.trim().parse::<f64>().ok();
            if parsed.is_none() {
                tracing::warn!(value = %text, "ignoring non-numeric metric value");
            }
            parsed
        }
        Raw::Other(_) => None,
    })
}

/// Reads a post's metric set, dropping it when the platform tag is missing
/// or unknown or the object is otherwise unreadable.
pub(crate) fn lenient_platform_metrics<'de, D>(
    deserializer: D,
) -> Result<Option<PlatformMetrics>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Known(PlatformMetrics),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Known(metrics)) => Some(metrics),
        Some(Raw::Other(_)) => {
            tracing::warn!("ignoring metrics without a recognised platform tag");
            None
        }
        None => None,
    })
}

/// Metric keys tracked for `platform`, in display order.
#[must_use]
pub fn metric_keys(platform: Platform) -> &'static [MetricKey] {
    use MetricKey::{
        Clicks, Comments, Engagement, Impressions, Likes, Members, PostViews, Reach, Saves, Shares,
        SubscribersGained, Views, WatchTimeMinutes,
    };

    match platform {
        Platform::LinkedIn => &[Impressions, Likes, Comments, Shares, Clicks, Engagement],
        Platform::YouTube => &[Views, WatchTimeMinutes, Likes, Comments, SubscribersGained],
        Platform::Instagram => &[Reach, Impressions, Likes, Comments, Saves, Shares],
        Platform::Skool => &[Members, PostViews, Likes, Comments],
    }
}

impl PlatformMetrics {
    #[must_use]
    pub fn platform(&self) -> Platform {
        match self {
            PlatformMetrics::LinkedIn(_) => Platform::LinkedIn,
            PlatformMetrics::YouTube(_) => Platform::YouTube,
            PlatformMetrics::Instagram(_) => Platform::Instagram,
            PlatformMetrics::Skool(_) => Platform::Skool,
        }
    }

    /// Value recorded for `key`.
    ///
    /// Returns `None` when the key is not tracked for this platform, was never
    /// recorded, or holds a malformed value (negative, NaN, infinite).
    #[must_use]
    pub fn get(&self, key: MetricKey) -> Option<f64> {
        let raw = match self {
            PlatformMetrics::LinkedIn(m) => match key {
                MetricKey::Impressions => m.impressions,
                MetricKey::Likes => m.likes,
                MetricKey::Comments => m.comments,
                MetricKey::Shares => m.shares,
                MetricKey::Clicks => m.clicks,
                MetricKey::Engagement => m.engagement,
                _ => None,
            },
            PlatformMetrics::YouTube(m) => match key {
                MetricKey::Views => m.views,
                MetricKey::WatchTimeMinutes => m.watch_time_minutes,
                MetricKey::Likes => m.likes,
                MetricKey::Comments => m.comments,
                MetricKey::SubscribersGained => m.subscribers_gained,
                _ => None,
            },
            PlatformMetrics::Instagram(m) => match key {
                MetricKey::Reach => m.reach,
                MetricKey::Impressions => m.impressions,
                MetricKey::Likes => m.likes,
                MetricKey::Comments => m.comments,
                MetricKey::Saves => m.saves,
                MetricKey::Shares => m.shares,
                _ => None,
            },
            PlatformMetrics::Skool(m) => match key {
                MetricKey::Members => m.members,
                MetricKey::PostViews => m.post_views,
                MetricKey::Likes => m.likes,
                MetricKey::Comments => m.comments,
                _ => None,
            },
        };
        raw.filter(|v| v.is_finite() && *v >= 0.0)
    }

    /// All well-formed values present, in the platform's display order.
    #[must_use]
    pub fn values(&self) -> Vec<(MetricKey, f64)> {
        metric_keys(self.platform())
            .iter()
            .filter_map(|&key| self.get(key).map(|v| (key, v)))
            .collect()
    }

    #[must_use]
    pub fn has_positive_value(&self) -> bool {
        self.values().iter().any(|&(_, v)| v > 0.0)
    }
}
