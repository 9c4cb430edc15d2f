//! Ranks a whole solution catalog against one client insight.

use tracing::info;

use crate::matching::scorer::SolutionMatcher;
use crate::models::insight::ClientInsight;
use crate::models::solution::{Practice, Solution, SolutionWithEvidence};

/// Challenges named in a recommendation.
const RECOMMENDATION_CHALLENGES: usize = 3;

const STRONG_FIT: u32 = 70;
const MODERATE_FIT: u32 = 40;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingOptions {
    /// Keep at most this many results. `None` keeps all.
    pub top_n: Option<usize>,
    /// Drop results scoring below this.
    pub min_score: u32,
    /// Only score solutions from this practice.
    pub practice: Option<Practice>,
}

/// Scores every solution and returns them best first.
///
/// Algorithm:
/// 1. Filter the catalog by practice, if requested
/// 2. Score each remaining solution with `matcher`
/// 3. Drop results below `min_score`
/// 4. Stable sort by overall score descending (catalog order breaks ties)
/// 5. Truncate to `top_n`
pub fn rank_solutions(
    matcher: &dyn SolutionMatcher,
    solutions: &[Solution],
    insight: &ClientInsight,
    options: &RankingOptions,
) -> Vec<SolutionWithEvidence> {
    let mut ranked: Vec<SolutionWithEvidence> = solutions
        .iter()
        .filter(|s| options.practice.map_or(true, |p| s.practice == p))
        .map(|s| matcher.match_solution(s, insight))
        .filter(|scored| scored.overall_score >= options.min_score)
        .collect();

    ranked.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));

    if let Some(n) = options.top_n {
        ranked.truncate(n);
    }

    info!(
        client = %insight.client_name,
        backend = matcher.backend(),
        catalog = solutions.len(),
        returned = ranked.len(),
        "Ranked solutions"
    );

    ranked
}

/// Builds a human-readable recommendation for one scored solution.
pub fn build_recommendation(scored: &SolutionWithEvidence) -> String {
    let mut evidence: Vec<_> = scored.match_evidence.iter().collect();
    evidence.sort_by(|a, b| b.confidence_score.cmp(&a.confidence_score));
    let top: Vec<&str> = evidence
        .iter()
        .take(RECOMMENDATION_CHALLENGES)
        .map(|e| e.challenge_name.as_str())
        .collect();

    let name = &scored.solution.name;
    let score = scored.overall_score;

    if top.is_empty() {
        return format!(
            "Weak fit ({score}/99). {name} does not directly address any reported challenge."
        );
    }

    let label = if score >= STRONG_FIT {
        "Strong fit"
    } else if score >= MODERATE_FIT {
        "Moderate fit"
    } else {
        "Weak fit"
    };

    format!("{label} ({score}/99). {name} addresses: {}.", top.join(", "))
}
