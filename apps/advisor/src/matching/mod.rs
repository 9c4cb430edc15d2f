// Challenge matching engine.
// Lexical keyword containment stands in for semantic matching; see keywords.rs.

pub mod keywords;
pub mod ranking;
pub mod scorer;
pub mod topic_boost;
pub mod validation;
