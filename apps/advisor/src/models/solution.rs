use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Practice area a solution belongs to. Closed set; unknown names are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Practice {
    #[serde(rename = "Custom Apps")]
    CustomApps,
    #[serde(rename = "SAP")]
    Sap,
    #[serde(rename = "Enterprise & Cloud")]
    EnterpriseCloud,
    #[serde(rename = "Data & AI")]
    DataAi,
}

impl Practice {
    pub const ALL: [Practice; 4] = [
        Practice::CustomApps,
        Practice::Sap,
        Practice::EnterpriseCloud,
        Practice::DataAi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Practice::CustomApps => "Custom Apps",
            Practice::Sap => "SAP",
            Practice::EnterpriseCloud => "Enterprise & Cloud",
            Practice::DataAi => "Data & AI",
        }
    }
}

impl fmt::Display for Practice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Practice {
    type Err = AppError;

    /// Accepts the display name, case-insensitively and with surrounding whitespace trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Practice::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::UnknownPractice(s.to_string()))
    }
}

/// A catalog entry. Read-only input to matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: String,
    pub name: String,
    pub description: String,
    pub confidence_score: f64,
    pub key_features: Vec<String>,
    pub benefits: Vec<String>,
    pub practice: Practice,
    pub tags: Vec<String>,
}

/// The features and benefits of a solution that textually align with one challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeMatchEvidence {
    pub challenge_name: String,
    pub confidence_score: i64, // rounded, 0 – 100 for in-range inputs
    pub matched_features: Vec<String>,
    pub matched_benefits: Vec<String>,
}

/// A solution plus its match evidence and overall fit score. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionWithEvidence {
    #[serde(flatten)]
    pub solution: Solution,
    pub match_evidence: Vec<ChallengeMatchEvidence>,
    pub overall_score: u32, // 0 – 99
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_solution() -> Solution {
        Solution {
            id: "sol-1".to_string(),
            name: "Cloud Migration Accelerator".to_string(),
            description: "Lift and shift with guardrails".to_string(),
            confidence_score: 88.0,
            key_features: vec!["cloud migration tool".to_string()],
            benefits: vec!["reduces cost significantly".to_string()],
            practice: Practice::EnterpriseCloud,
            tags: vec!["cloud".to_string()],
        }
    }

    #[test]
    fn test_practice_serde_uses_display_names() {
        let json = serde_json::to_string(&Practice::EnterpriseCloud).unwrap();
        assert_eq!(json, r#""Enterprise & Cloud""#);

        let practice: Practice = serde_json::from_str(r#""Data & AI""#).unwrap();
        assert_eq!(practice, Practice::DataAi);
    }

    #[test]
    fn test_practice_serde_rejects_unknown_value() {
        let result = serde_json::from_str::<Practice>(r#""Blockchain""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_practice_from_str_is_case_insensitive() {
        assert_eq!("sap".parse::<Practice>().unwrap(), Practice::Sap);
        assert_eq!(" custom apps ".parse::<Practice>().unwrap(), Practice::CustomApps);
    }

    #[test]
    fn test_practice_from_str_unknown_is_error() {
        let err = "Quantum".parse::<Practice>().unwrap_err();
        assert!(matches!(err, AppError::UnknownPractice(ref v) if v == "Quantum"));
    }

    #[test]
    fn test_practice_display_round_trips_through_from_str() {
        for practice in Practice::ALL {
            assert_eq!(practice.to_string().parse::<Practice>().unwrap(), practice);
        }
    }

    #[test]
    fn test_solution_with_evidence_flattens_solution_fields() {
        let scored = SolutionWithEvidence {
            solution: make_solution(),
            match_evidence: vec![],
            overall_score: 42,
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "sol-1");
        assert_eq!(value["keyFeatures"][0], "cloud migration tool");
        assert_eq!(value["practice"], "Enterprise & Cloud");
        assert_eq!(value["overallScore"], 42);
        assert!(value["matchEvidence"].as_array().unwrap().is_empty());

        let back: SolutionWithEvidence = serde_json::from_value(value).unwrap();
        assert_eq!(back, scored);
    }
}
