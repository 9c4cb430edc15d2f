use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use advisor::catalog::{load_insight, load_solutions};
use advisor::config::Config;
use advisor::matching::validation::{validate_insight, validate_solution};
use advisor::{
    build_recommendation, rank_solutions, KeywordSolutionMatcher, SolutionMatcher, SolutionWithEvidence,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedOutput {
    client_name: String,
    backend: &'static str,
    results: Vec<RankedEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedEntry {
    #[serde(flatten)]
    scored: SolutionWithEvidence,
    recommendation: String,
}

fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Structured logging to stderr; stdout carries only JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting advisor v{}", env!("CARGO_PKG_VERSION"));

    let solutions = load_solutions(&config.solutions_path)
        .with_context(|| format!("loading {}", config.solutions_path.display()))?;
    let insight = load_insight(&config.insight_path)
        .with_context(|| format!("loading {}", config.insight_path.display()))?;

    validate_insight(&insight);
    for solution in &solutions {
        validate_solution(solution);
    }

    let matcher = KeywordSolutionMatcher;
    let ranked = rank_solutions(&matcher, &solutions, &insight, &config.ranking_options());

    let output = RankedOutput {
        client_name: insight.client_name.clone(),
        backend: matcher.backend(),
        results: ranked
            .into_iter()
            .map(|scored| RankedEntry {
                recommendation: build_recommendation(&scored),
                scored,
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
