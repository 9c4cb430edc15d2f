//! Portfolio advisor: matches a solution catalog against client-reported challenges.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod matching;
pub mod models;

pub use errors::AppError;
pub use matching::ranking::{build_recommendation, rank_solutions, RankingOptions};
pub use matching::scorer::{match_solution_to_insights, KeywordSolutionMatcher, SolutionMatcher};
pub use models::insight::{ClientChallenge, ClientInsight, ClientTopic};
pub use models::solution::{ChallengeMatchEvidence, Practice, Solution, SolutionWithEvidence};
