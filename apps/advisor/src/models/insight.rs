use serde::{Deserialize, Serialize};

/// A client pain point inferred from conversations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientChallenge {
    pub name: String,
    pub confidence: f64, // 0 – 100
}

/// A discussion topic with its frequency and sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientTopic {
    pub name: String,
    pub mentions: u32,
    pub sentiment: f64, // 0 – 100
}

/// Aggregate view of one client relationship. Read-only input to matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInsight {
    pub client_name: String,
    pub last_meeting: String,
    pub sentiment: f64, // 0 – 100
    pub key_topics: Vec<ClientTopic>,
    pub challenges: Vec<ClientChallenge>,
    pub summary: String,
}
