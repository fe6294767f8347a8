//! Property-based checks for the pattern analyzer.

use chrono::{Duration, TimeZone, Utc};
use planboard_analytics::{analyze_patterns, PatternAnalysis};
use planboard_core::{
    HookType, InstagramMetrics, LinkedInMetrics, Platform, PlatformMetrics, Post, PostFormat,
    PostStatus, Topic,
};
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = PostStatus> {
    prop_oneof![
        4 => Just(PostStatus::Published),
        1 => Just(PostStatus::Draft),
        1 => Just(PostStatus::Scheduled),
        1 => Just(PostStatus::Idea),
        1 => Just(PostStatus::Archived),
    ]
}

fn optional<T: Clone + std::fmt::Debug + 'static>(values: &'static [T]) -> impl Strategy<Value = Option<T>> {
    prop_oneof![
        1 => Just(None),
        3 => prop::sample::select(values).prop_map(Some),
    ]
}

prop_compose! {
    fn post_strategy()(
        idx in 0u32..10_000,
        linkedin in any::<bool>(),
        status in status_strategy(),
        published in any::<bool>(),
        hours_offset in 0i64..(24 * 21),
        hook in optional(HookType::ALL),
        topic in optional(Topic::ALL),
        format in optional(PostFormat::ALL),
        reach in prop_oneof![Just(None), (0.0f64..5000.0).prop_map(Some)],
        likes in prop_oneof![Just(None), (0.0f64..500.0).prop_map(Some)],
    ) -> Post {
        let platform = if linkedin { Platform::LinkedIn } else { Platform::Instagram };
        let mut post = Post::new(format!("post-{idx}"), platform, status);
        if published {
            post.published_at =
                Some(Utc.with_ymd_and_hms(2026, 1, 4, 0, 0, 0).unwrap() + Duration::hours(hours_offset));
        }
        post.hook_type = hook;
        post.topic = topic;
        post.format = format;
        post.metrics = Some(if linkedin {
            PlatformMetrics::LinkedIn(LinkedInMetrics {
                impressions: reach,
                likes,
                ..LinkedInMetrics::default()
            })
        } else {
            PlatformMetrics::Instagram(InstagramMetrics {
                reach,
                likes,
                ..InstagramMetrics::default()
            })
        });
        post
    }
}

fn multipliers(analysis: &PatternAnalysis) -> Vec<Vec<f64>> {
    vec![
        analysis.hook_type_performance.iter().map(|g| g.multiplier).collect(),
        analysis.topic_performance.iter().map(|g| g.multiplier).collect(),
        analysis.format_performance.iter().map(|g| g.multiplier).collect(),
        analysis.best_posting_days.iter().map(|g| g.multiplier).collect(),
        analysis.best_posting_hours.iter().map(|g| g.multiplier).collect(),
    ]
}

proptest! {
    #[test]
    fn analysis_is_deterministic(posts in prop::collection::vec(post_strategy(), 0..40)) {
        prop_assert_eq!(analyze_patterns(&posts, None), analyze_patterns(&posts, None));
    }

    #[test]
    fn ranked_lists_are_non_increasing(posts in prop::collection::vec(post_strategy(), 0..40)) {
        let analysis = analyze_patterns(&posts, None);
        for list in multipliers(&analysis) {
            for pair in list.windows(2) {
                prop_assert!(pair[0] >= pair[1], "out of order: {:?}", list);
            }
            for m in list {
                prop_assert!(m.is_finite());
            }
        }
    }

    #[test]
    fn only_analyzable_posts_are_counted(
        posts in prop::collection::vec(post_strategy(), 0..40),
        filter_linkedin in any::<bool>(),
    ) {
        let platform = if filter_linkedin { Platform::LinkedIn } else { Platform::Instagram };
        let expected = posts
            .iter()
            .filter(|p| p.is_analyzable() && p.platform == platform)
            .count();
        let expected_hooked = posts
            .iter()
            .filter(|p| p.is_analyzable() && p.platform == platform && p.hook_type.is_some())
            .count();

        let analysis = analyze_patterns(&posts, Some(platform));
        let day_total: usize = analysis.best_posting_days.iter().map(|d| d.sample_size).sum();
        let hour_total: usize = analysis.best_posting_hours.iter().map(|h| h.sample_size).sum();
        let hook_total: usize = analysis.hook_type_performance.iter().map(|g| g.sample_size).sum();

        prop_assert_eq!(analysis.summary.total_posts_analyzed, expected);
        prop_assert_eq!(day_total, expected);
        prop_assert_eq!(hour_total, expected);
        prop_assert_eq!(hook_total, expected_hooked);
    }

    #[test]
    fn small_pools_never_carry_recommendations(posts in prop::collection::vec(post_strategy(), 0..40)) {
        let analysis = analyze_patterns(&posts, None);
        if analysis.summary.total_posts_analyzed < 3 {
            prop_assert!(analysis.summary.insufficient_data);
            prop_assert!(analysis.summary.top_recommendation.is_none());
            prop_assert!(analysis.summary.avoid_recommendation.is_none());
        }
    }

    #[test]
    fn recommended_groups_meet_thresholds(posts in prop::collection::vec(post_strategy(), 0..60)) {
        let analysis = analyze_patterns(&posts, None);
        let insights = analysis.insights();
        if analysis.summary.top_recommendation.is_some() {
            prop_assert!(insights.iter().any(|i| i.multiplier > 1.1 && i.sample_size >= 3));
        } else if !analysis.summary.insufficient_data {
            prop_assert!(!insights.iter().any(|i| i.multiplier > 1.1 && i.sample_size >= 3));
        }
        if analysis.summary.avoid_recommendation.is_some() {
            prop_assert!(insights.iter().any(|i| i.multiplier < 0.9 && i.sample_size >= 3));
        }
    }
}
