//! Challenge matching: scores how well a catalog solution addresses a client's challenges.
//!
//! Default: `KeywordSolutionMatcher` (pure, deterministic, lexical).
//! Callers hold a `&dyn SolutionMatcher` so a semantic backend can replace it later.

use tracing::debug;

use crate::matching::keywords::addresses;
use crate::matching::topic_boost::topic_boost;
use crate::models::insight::{ClientChallenge, ClientInsight};
use crate::models::solution::{ChallengeMatchEvidence, Solution, SolutionWithEvidence};

/// Highest overall score a solution can reach. 100 is reserved.
pub const MAX_OVERALL_SCORE: u32 = 99;

const FEATURE_WEIGHT: f64 = 0.4;
const BENEFIT_WEIGHT: f64 = 0.6;

/// Insight sentiment at which the score multiplier is exactly 1.0.
const NEUTRAL_SENTIMENT: f64 = 80.0;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap matching backends without touching ranking or callers.
pub trait SolutionMatcher: Send + Sync {
    fn match_solution(&self, solution: &Solution, insight: &ClientInsight) -> SolutionWithEvidence;

    /// Backend label, e.g. "keyword".
    fn backend(&self) -> &'static str;
}

/// Lexical matcher built on keyword containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSolutionMatcher;

impl SolutionMatcher for KeywordSolutionMatcher {
    fn match_solution(&self, solution: &Solution, insight: &ClientInsight) -> SolutionWithEvidence {
        match_solution_to_insights(solution, insight)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores one solution against one client insight.
///
/// Algorithm:
/// 1. For each challenge, collect features and benefits that address it.
/// 2. Evidence confidence = round((feature% × 0.4 + benefit% × 0.6) × confidence/100).
///    Challenges with no matched feature or benefit are dropped.
/// 3. overall = round((mean evidence confidence + topic boost) × sentiment/80),
///    clamped to [0, 99].
pub fn match_solution_to_insights(
    solution: &Solution,
    insight: &ClientInsight,
) -> SolutionWithEvidence {
    let match_evidence: Vec<ChallengeMatchEvidence> = insight
        .challenges
        .iter()
        .filter_map(|challenge| match_challenge(solution, challenge))
        .collect();

    let evidence_score: f64 = match_evidence
        .iter()
        .map(|e| e.confidence_score as f64)
        .sum();
    let evidence_avg = evidence_score / match_evidence.len().max(1) as f64;
    let boost = topic_boost(solution, &insight.key_topics);

    let raw = round_half_up((evidence_avg + boost) * (insight.sentiment / NEUTRAL_SENTIMENT));
    let overall_score = clamp_overall(raw);

    debug!(
        solution = %solution.id,
        client = %insight.client_name,
        evidence = match_evidence.len(),
        boost,
        overall_score,
        "Scored solution"
    );

    SolutionWithEvidence {
        solution: solution.clone(),
        match_evidence,
        overall_score,
    }
}

/// Builds the evidence entry for a single challenge, or `None` if nothing matched.
fn match_challenge(solution: &Solution, challenge: &ClientChallenge) -> Option<ChallengeMatchEvidence> {
    let matched_features = matching_items(&solution.key_features, &challenge.name);
    let matched_benefits = matching_items(&solution.benefits, &challenge.name);

    if matched_features.is_empty() && matched_benefits.is_empty() {
        debug!(
            solution = %solution.id,
            challenge = %challenge.name,
            "No feature or benefit addresses challenge"
        );
        return None;
    }

    let feature_score = coverage_pct(matched_features.len(), solution.key_features.len());
    let benefit_score = coverage_pct(matched_benefits.len(), solution.benefits.len());
    let weighted = feature_score * FEATURE_WEIGHT + benefit_score * BENEFIT_WEIGHT;
    let confidence_score = round_half_up(weighted * (challenge.confidence / 100.0));

    Some(ChallengeMatchEvidence {
        challenge_name: challenge.name.clone(),
        confidence_score: to_score(confidence_score),
        matched_features,
        matched_benefits,
    })
}

fn matching_items(items: &[String], challenge_name: &str) -> Vec<String> {
    items
        .iter()
        .filter(|item| addresses(item, challenge_name))
        .cloned()
        .collect()
}

/// Percentage of `total` covered by `matched`. An empty list covers nothing.
fn coverage_pct(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (matched as f64 / total as f64) * 100.0
}

/// Rounds .5 towards positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// NaN becomes 0.
fn to_score(x: f64) -> i64 {
    if x.is_nan() {
        0
    } else {
        x as i64
    }
}

fn clamp_overall(raw: f64) -> u32 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, MAX_OVERALL_SCORE as f64) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
