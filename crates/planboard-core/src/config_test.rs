use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn with_var<'a>(key: &'a str, value: &'a str) -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert(key, value);
    m
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PLANBOARD_ENV"),
        "expected InvalidEnvVar(PLANBOARD_ENV), got: {err:?}"
    );
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.data_dir, PathBuf::from("./data"));
    assert!(cfg.scoring_policy_path.is_none());
    assert_eq!(cfg.utc_offset_minutes, 0);
    assert_eq!(cfg.min_posts, 3);
    assert_eq!(cfg.min_sample_size, 3);
}

#[test]
fn data_dir_override() {
    let map = with_var("PLANBOARD_DATA_DIR", "/var/lib/planboard");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.data_dir, PathBuf::from("/var/lib/planboard"));
}

#[test]
fn scoring_policy_path_override() {
    let map = with_var("PLANBOARD_SCORING_POLICY_PATH", "./config/scoring.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.scoring_policy_path,
        Some(PathBuf::from("./config/scoring.yaml"))
    );
}

#[test]
fn blank_scoring_policy_path_is_ignored() {
    let map = with_var("PLANBOARD_SCORING_POLICY_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.scoring_policy_path.is_none());
}

#[test]
fn utc_offset_override() {
    let map = with_var("PLANBOARD_UTC_OFFSET_MINUTES", "-300");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.utc_offset_minutes, -300);
}

#[test]
fn utc_offset_out_of_range() {
    let map = with_var("PLANBOARD_UTC_OFFSET_MINUTES", "1440");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLANBOARD_UTC_OFFSET_MINUTES"),
        "expected InvalidEnvVar(PLANBOARD_UTC_OFFSET_MINUTES), got: {result:?}"
    );
}

#[test]
fn utc_offset_invalid() {
    let map = with_var("PLANBOARD_UTC_OFFSET_MINUTES", "utc+2");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLANBOARD_UTC_OFFSET_MINUTES"),
        "expected InvalidEnvVar(PLANBOARD_UTC_OFFSET_MINUTES), got: {result:?}"
    );
}

#[test]
fn min_posts_override() {
    let map = with_var("PLANBOARD_MIN_POSTS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.min_posts, 5);
}

#[test]
fn min_posts_zero_is_rejected() {
    let map = with_var("PLANBOARD_MIN_POSTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, ref reason }) if var == "PLANBOARD_MIN_POSTS" && reason.contains("at least 1")),
        "expected InvalidEnvVar(PLANBOARD_MIN_POSTS), got: {result:?}"
    );
}

#[test]
fn min_sample_size_invalid() {
    let map = with_var("PLANBOARD_MIN_SAMPLE_SIZE", "three");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLANBOARD_MIN_SAMPLE_SIZE"),
        "expected InvalidEnvVar(PLANBOARD_MIN_SAMPLE_SIZE), got: {result:?}"
    );
}
