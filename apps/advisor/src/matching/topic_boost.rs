use crate::matching::keywords::{contains_either_way, extract_keywords, keywords_overlap};
use crate::models::insight::ClientTopic;
use crate::models::solution::Solution;

/// Upper bound on the combined topic boost.
pub const MAX_TOPIC_BOOST: f64 = 20.0;

const TAG_WEIGHT: f64 = 10.0;
const TEXT_WEIGHT: f64 = 5.0;

/// Boost for solutions aligned with what the client is already talking about.
///
/// Per topic, two independent contributions scaled by topic sentiment:
/// - tag alignment (raw case-insensitive containment between a tag and the topic name): ×10
/// - name/description alignment (keyword containment): ×5
///
/// Summed over every topic, then capped at [`MAX_TOPIC_BOOST`].
pub fn topic_boost(solution: &Solution, topics: &[ClientTopic]) -> f64 {
    let tags: Vec<String> = solution.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut solution_keywords = extract_keywords(&solution.name);
    solution_keywords.extend(extract_keywords(&solution.description));

    let mut boost = 0.0_f64;

    for topic in topics {
        let sentiment = topic.sentiment / 100.0;
        let topic_name = topic.name.to_lowercase();

        if tags.iter().any(|tag| contains_either_way(tag, &topic_name)) {
            boost += sentiment * TAG_WEIGHT;
        }

        let topic_keywords = extract_keywords(&topic.name);
        if keywords_overlap(&topic_keywords, &solution_keywords) {
            boost += sentiment * TEXT_WEIGHT;
        }
    }

    boost.min(MAX_TOPIC_BOOST)
}
