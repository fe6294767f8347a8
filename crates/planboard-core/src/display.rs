//! Presentation metadata for the closed domain enums.
//!
//! Labels and emoji live here so the enums themselves stay
//! plain identifiers for the scoring logic.

use crate::learnings::Outcome;
use crate::posts::{HookType, Platform, PostFormat, Topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMeta {
    pub label: &'static str,
    pub emoji: &'static str,
}

const fn meta(label: &'static str, emoji: &'static str) -> DisplayMeta {
    DisplayMeta { label, emoji }
}

pub trait Presentation: Copy {
    fn meta(self) -> DisplayMeta;

    fn label(self) -> &'static str {
        self.meta().label
    }

    /// Emoji followed by the label, e.g. `"🔢 Number"`.
    fn badge(self) -> String {
        let m = self.meta();
        format!("{} {}", m.emoji, m.label)
    }
}

impl Presentation for Platform {
    fn meta(self) -> DisplayMeta {
        match self {
            Platform::LinkedIn => meta("LinkedIn", "💼"),
            Platform::YouTube => meta("YouTube", "▶️"),
            Platform::Instagram => meta("Instagram", "📸"),
            Platform::Skool => meta("Skool", "🎓"),
        }
    }
}

impl Presentation for HookType {
    fn meta(self) -> DisplayMeta {
        match self {
            HookType::Number => meta("Number", "🔢"),
            HookType::Question => meta("Question", "❓"),
            HookType::BoldClaim => meta("Bold claim", "💥"),
            HookType::Curiosity => meta("Curiosity", "🧐"),
            HookType::PersonalStory => meta("Personal story", "📖"),
            HookType::PainPoint => meta("Pain point", "😣"),
        }
    }
}

impl Presentation for Topic {
    fn meta(self) -> DisplayMeta {
        match self {
            Topic::AiTools => meta("AI tools", "🤖"),
            Topic::Automation => meta("Automation", "⚙️"),
            Topic::Productivity => meta("Productivity", "⏱️"),
            Topic::Entrepreneurship => meta("Entrepreneurship", "🚀"),
            Topic::Career => meta("Career", "🧭"),
            Topic::Leadership => meta("Leadership", "🧑‍✈️"),
            Topic::Marketing => meta("Marketing", "📣"),
            Topic::Tutorial => meta("Tutorial", "🛠️"),
            Topic::CaseStudy => meta("Case study", "🔬"),
            Topic::BehindTheScenes => meta("Behind the scenes", "🎬"),
            Topic::Community => meta("Community", "🤝"),
        }
    }
}

impl Presentation for PostFormat {
    fn meta(self) -> DisplayMeta {
        match self {
            PostFormat::List => meta("List", "📝"),
            PostFormat::Story => meta("Story", "📚"),
            PostFormat::HowTo => meta("How-to", "🧩"),
            PostFormat::Opinion => meta("Opinion", "🗣️"),
            PostFormat::Question => meta("Question", "🙋"),
            PostFormat::Announcement => meta("Announcement", "📢"),
        }
    }
}

impl Presentation for Outcome {
    fn meta(self) -> DisplayMeta {
        match self {
            Outcome::Exceeded => meta("Exceeded", "🚀"),
            Outcome::Met => meta("Met", "✅"),
            Outcome::Missed => meta("Missed", "📉"),
        }
    }
}

/// English weekday name for a Sunday-based index (0 = Sunday).
///
/// Out-of-range indices wrap.
#[must_use]
pub fn day_name(index: u8) -> &'static str {
    const DAYS: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
    DAYS[usize::from(index % 7)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_joins_emoji_and_label() {
        assert_eq!(HookType::Number.badge(), "🔢 Number");
    }

    #[test]
    fn every_variant_has_a_label() {
        assert!(HookType::ALL.iter().all(|h| !h.label().is_empty()));
        assert!(Topic::ALL.iter().all(|t| !t.label().is_empty()));
        assert!(PostFormat::ALL.iter().all(|f| !f.label().is_empty()));
        assert!(Platform::ALL.iter().all(|p| !p.meta().emoji.is_empty()));
    }

    #[test]
    fn day_name_is_sunday_based() {
        assert_eq!(day_name(0), "Sunday");
        assert_eq!(day_name(6), "Saturday");
        assert_eq!(day_name(7), "Sunday");
    }
}
