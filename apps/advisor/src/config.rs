use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::matching::ranking::RankingOptions;
use crate::models::solution::Practice;

/// Runner configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub solutions_path: PathBuf,
    pub insight_path: PathBuf,
    pub top_n: Option<usize>,
    pub min_score: u32,
    pub practice: Option<Practice>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        Ok(Config {
            solutions_path: PathBuf::from(require("SOLUTIONS_PATH")?),
            insight_path: PathBuf::from(require("INSIGHT_PATH")?),
            top_n: lookup("TOP_N")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("TOP_N must be a non-negative integer")?,
            min_score: lookup("MIN_SCORE")
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("MIN_SCORE must be a non-negative integer")?
                .unwrap_or(0),
            practice: lookup("PRACTICE")
                .map(|v| v.parse::<Practice>())
                .transpose()
                .context("PRACTICE must name a known practice")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn ranking_options(&self) -> RankingOptions {
        RankingOptions {
            top_n: self.top_n,
            min_score: self.min_score,
            practice: self.practice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_required_paths_and_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("SOLUTIONS_PATH", "data/solutions.json"),
            ("INSIGHT_PATH", "data/acme.json"),
        ]))
        .unwrap();

        assert_eq!(config.solutions_path, PathBuf::from("data/solutions.json"));
        assert_eq!(config.top_n, None);
        assert_eq!(config.min_score, 0);
        assert_eq!(config.practice, None);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_required_var_names_it() {
        let err = Config::from_lookup(lookup_from(&[("SOLUTIONS_PATH", "s.json")])).unwrap_err();
        assert!(err.to_string().contains("INSIGHT_PATH"));
    }

    #[test]
    fn test_optional_values_parse_into_ranking_options() {
        let config = Config::from_lookup(lookup_from(&[
            ("SOLUTIONS_PATH", "s.json"),
            ("INSIGHT_PATH", "i.json"),
            ("TOP_N", "5"),
            ("MIN_SCORE", "30"),
            ("PRACTICE", "Data & AI"),
        ]))
        .unwrap();

        let options = config.ranking_options();
        assert_eq!(options.top_n, Some(5));
        assert_eq!(options.min_score, 30);
        assert_eq!(options.practice, Some(Practice::DataAi));
    }

    #[test]
    fn test_bad_top_n_is_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("SOLUTIONS_PATH", "s.json"),
            ("INSIGHT_PATH", "i.json"),
            ("TOP_N", "many"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("TOP_N"));
    }

    #[test]
    fn test_unknown_practice_is_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("SOLUTIONS_PATH", "s.json"),
            ("INSIGHT_PATH", "i.json"),
            ("PRACTICE", "Blockchain"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PRACTICE"));
    }
}
