use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Largest absolute UTC offset accepted, in minutes (just under one day).
const MAX_UTC_OFFSET_MINUTES: i32 = 1439;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize_min = |var: &str, default: &str, min: usize| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value < min {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("must be at least {min}"),
            });
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("PLANBOARD_ENV", "development"))?;
    let log_level = or_default("PLANBOARD_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("PLANBOARD_DATA_DIR", "./data"));
    let scoring_policy_path = lookup("PLANBOARD_SCORING_POLICY_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let utc_offset_minutes = parse_utc_offset(&or_default("PLANBOARD_UTC_OFFSET_MINUTES", "0"))?;
    let min_posts = parse_usize_min("PLANBOARD_MIN_POSTS", "3", 1)?;
    let min_sample_size = parse_usize_min("PLANBOARD_MIN_SAMPLE_SIZE", "3", 1)?;

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        scoring_policy_path,
        utc_offset_minutes,
        min_posts,
        min_sample_size,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PLANBOARD_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_utc_offset(raw: &str) -> Result<i32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "PLANBOARD_UTC_OFFSET_MINUTES".to_string(),
        reason,
    };
    let minutes = raw
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid(e.to_string()))?;
    if minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(invalid(format!(
            "{minutes} is outside -{MAX_UTC_OFFSET_MINUTES}..={MAX_UTC_OFFSET_MINUTES}"
        )));
    }
    Ok(minutes)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
