use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::insight::ClientInsight;
use crate::models::solution::Solution;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputWarning {
    pub field: String,
    pub reason: String,
}

/// Advisory check of insight numerics. Non-blocking: the matcher still runs on
/// out-of-range values, these just explain odd scores.
pub fn validate_insight(insight: &ClientInsight) -> Vec<InputWarning> {
    let mut warnings = Vec::new();

    check_percentage(&mut warnings, "sentiment".to_string(), insight.sentiment);

    for (i, topic) in insight.key_topics.iter().enumerate() {
        check_percentage(
            &mut warnings,
            format!("keyTopics[{i}].sentiment ({})", topic.name),
            topic.sentiment,
        );
    }

    for (i, challenge) in insight.challenges.iter().enumerate() {
        check_percentage(
            &mut warnings,
            format!("challenges[{i}].confidence ({})", challenge.name),
            challenge.confidence,
        );
    }

    for w in &warnings {
        warn!(client = %insight.client_name, field = %w.field, "{}", w.reason);
    }

    warnings
}

/// Flags solutions whose empty feature or benefit list will always score 0 on that side.
pub fn validate_solution(solution: &Solution) -> Vec<InputWarning> {
    let mut warnings = Vec::new();

    if solution.key_features.is_empty() {
        warnings.push(InputWarning {
            field: "keyFeatures".to_string(),
            reason: "No key features; feature coverage will always be 0".to_string(),
        });
    }
    if solution.benefits.is_empty() {
        warnings.push(InputWarning {
            field: "benefits".to_string(),
            reason: "No benefits; benefit coverage will always be 0".to_string(),
        });
    }

    for w in &warnings {
        warn!(solution = %solution.id, field = %w.field, "{}", w.reason);
    }

    warnings
}

fn check_percentage(warnings: &mut Vec<InputWarning>, field: String, value: f64) {
    let reason = if value.is_nan() {
        "Value is NaN; scores derived from it collapse to 0".to_string()
    } else if !(0.0..=100.0).contains(&value) {
        format!("Value {value} is outside 0–100")
    } else {
        return;
    };
    warnings.push(InputWarning { field, reason });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::insight::{ClientChallenge, ClientTopic};
    use crate::models::solution::Practice;

    fn make_insight(sentiment: f64, topic_sentiment: f64, confidence: f64) -> ClientInsight {
        ClientInsight {
            client_name: "Umbrella".to_string(),
            last_meeting: "2024-03-19".to_string(),
            sentiment,
            key_topics: vec![ClientTopic {
                name: "Cloud".to_string(),
                mentions: 2,
                sentiment: topic_sentiment,
            }],
            challenges: vec![ClientChallenge {
                name: "Legacy Debt".to_string(),
                confidence,
            }],
            summary: String::new(),
        }
    }

    #[test]
    fn test_in_range_insight_has_no_warnings() {
        assert!(validate_insight(&make_insight(0.0, 100.0, 55.5)).is_empty());
    }

    #[test]
    fn test_out_of_range_values_each_warn() {
        let warnings = validate_insight(&make_insight(-5.0, 140.0, 101.0));
        assert_eq!(warnings.len(), 3);
        assert_eq!(warnings[0].field, "sentiment");
        assert!(warnings[1].field.starts_with("keyTopics[0]"));
        assert!(warnings[2].field.contains("Legacy Debt"));
        assert!(warnings[0].reason.contains("-5"));
    }

    #[test]
    fn test_nan_warns() {
        let warnings = validate_insight(&make_insight(f64::NAN, 50.0, 50.0));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].reason.contains("NaN"));
    }

    #[test]
    fn test_solution_with_empty_lists_warns_twice() {
        let solution = Solution {
            id: "bare".to_string(),
            name: "Bare".to_string(),
            description: String::new(),
            confidence_score: 0.0,
            key_features: vec![],
            benefits: vec![],
            practice: Practice::CustomApps,
            tags: vec![],
        };
        let warnings = validate_solution(&solution);
        let fields: Vec<&str> = warnings.iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, vec!["keyFeatures", "benefits"]);
    }
}
