use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::insight::ClientInsight;
use crate::models::solution::Solution;

/// Reads a JSON array of solutions. Rejects duplicate ids.
pub fn load_solutions(path: &Path) -> Result<Vec<Solution>, AppError> {
    let raw = fs::read_to_string(path)?;
    let solutions: Vec<Solution> = serde_json::from_str(&raw)?;

    let mut seen = HashSet::new();
    for solution in &solutions {
        if !seen.insert(solution.id.as_str()) {
            return Err(AppError::Validation(format!(
                "Duplicate solution id '{}' in {}",
                solution.id,
                path.display()
            )));
        }
    }

    info!("Loaded {} solutions from {}", solutions.len(), path.display());
    Ok(solutions)
}

/// Reads a single client insight JSON object.
pub fn load_insight(path: &Path) -> Result<ClientInsight, AppError> {
    let raw = fs::read_to_string(path)?;
    let insight: ClientInsight = serde_json::from_str(&raw)?;
    info!(
        "Loaded insight for {} ({} challenges, {} topics)",
        insight.client_name,
        insight.challenges.len(),
        insight.key_topics.len()
    );
    Ok(insight)
}
