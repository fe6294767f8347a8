//! Which metrics reduce to a post's normalized score, per platform.
//!
//! A rule prefers an engagement rate (summed numerator keys over a reach-like
//! denominator) and falls back to the first absolute metric in `fallback`.
//! The built-in defaults can be overridden by a YAML file; platforms omitted
//! from the file keep their default rule.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::metrics::{metric_keys, MetricKey};
use crate::posts::Platform;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRule {
    pub numerator: Vec<MetricKey>,
    pub denominator: MetricKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRule {
    #[serde(default)]
    pub rate: Option<RateRule>,
    /// Absolute metrics in priority order.
    pub fallback: Vec<MetricKey>,
}

impl ScoreRule {
    fn rate(numerator: &[MetricKey], denominator: MetricKey, fallback: &[MetricKey]) -> Self {
        Self {
            rate: Some(RateRule {
                numerator: numerator.to_vec(),
                denominator,
            }),
            fallback: fallback.to_vec(),
        }
    }

    /// Absolute-only rule: score is the first fallback metric present.
    #[must_use]
    pub fn absolute(fallback: &[MetricKey]) -> Self {
        Self {
            rate: None,
            fallback: fallback.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub linkedin: ScoreRule,
    pub youtube: ScoreRule,
    pub instagram: ScoreRule,
    pub skool: ScoreRule,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        use MetricKey::{
            Comments, Engagement, Impressions, Likes, PostViews, Reach, Saves, Shares, Views,
            WatchTimeMinutes,
        };

        Self {
            linkedin: ScoreRule::rate(
                &[Likes, Comments, Shares],
                Impressions,
                &[Engagement, Impressions, Likes],
            ),
            youtube: ScoreRule::rate(&[Likes, Comments], Views, &[Views, WatchTimeMinutes, Likes]),
            instagram: ScoreRule::rate(
                &[Likes, Comments, Saves, Shares],
                Reach,
                &[Reach, Impressions, Likes],
            ),
            skool: ScoreRule::rate(&[Likes, Comments], PostViews, &[PostViews, Likes, Comments]),
        }
    }
}

impl ScoringPolicy {
    #[must_use]
    pub fn rule_for(&self, platform: Platform) -> &ScoreRule {
        match platform {
            Platform::LinkedIn => &self.linkedin,
            Platform::YouTube => &self.youtube,
            Platform::Instagram => &self.instagram,
            Platform::Skool => &self.skool,
        }
    }

    /// Same rule for every platform.
    #[must_use]
    pub fn uniform(rule: &ScoreRule) -> Self {
        Self {
            linkedin: rule.clone(),
            youtube: rule.clone(),
            instagram: rule.clone(),
            skool: rule.clone(),
        }
    }

    /// Check that every rule only names metrics its platform tracks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first offending rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &platform in Platform::ALL {
            let rule = self.rule_for(platform);
            let tracked = metric_keys(platform);
            let check = |key: MetricKey, role: &str| -> Result<(), ConfigError> {
                if tracked.contains(&key) {
                    Ok(())
                } else {
                    Err(ConfigError::Validation(format!(
                        "{platform} {role} metric '{key}' is not tracked for {platform}"
                    )))
                }
            };

            if rule.fallback.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{platform} rule must list at least one fallback metric"
                )));
            }
            for &key in &rule.fallback {
                check(key, "fallback")?;
            }

            if let Some(rate) = &rule.rate {
                if rate.numerator.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "{platform} rate numerator must list at least one metric"
                    )));
                }
                for &key in &rate.numerator {
                    check(key, "rate numerator")?;
                }
                check(rate.denominator, "rate denominator")?;
            }
        }
        Ok(())
    }
}

/// Load and validate a scoring policy from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_scoring_policy(path: &Path) -> Result<ScoringPolicy, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PolicyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let policy: ScoringPolicy = serde_yaml::from_str(&content)?;
    policy.validate()?;

    Ok(policy)
}
