use super::Score;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Exceptional,
    Excellent,
    VeryGood,
    Good,
    ModeratelyGood,
    Average,
    BelowAverage,
    Difficult,
}

/// Lower bound of each tier, highest first. Anything below the last bound is
/// [`Tier::Difficult`].
const TIER_THRESHOLDS: [(Score, Tier); 7] = [
    (85.0, Tier::Exceptional),
    (75.0, Tier::Excellent),
    (65.0, Tier::VeryGood),
    (55.0, Tier::Good),
    (45.0, Tier::ModeratelyGood),
    (35.0, Tier::Average),
    (25.0, Tier::BelowAverage),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub level: &'static str,
    pub training_value: &'static str,
    pub description: &'static str,
}

impl Tier {
    pub fn for_score(score: Score) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Tier::Difficult, |(_, tier)| *tier)
    }

    pub fn explanation(self) -> Explanation {
        let (level, training_value, description) = match self {
            Tier::Exceptional => (
                "Exceptional for LLMs",
                "Premium training data",
                "This text has exceptional characteristics for LLM training and inference. Perfectly balanced structure, vocabulary, and complexity patterns.",
            ),
            Tier::Excellent => (
                "Excellent for LLMs",
                "High-quality training data",
                "This content is excellently suited for LLMs. It has near-optimal structure, appropriate sentence complexity, and well-balanced vocabulary diversity.",
            ),
            Tier::VeryGood => (
                "Very Good for LLMs",
                "Very valuable training data",
                "This text works very well for LLM training and inference. It has strong patterns with only minor improvements possible.",
            ),
            Tier::Good => (
                "Good for LLMs",
                "Good training data",
                "This content is good for LLMs but has some characteristics that could be improved for better model performance.",
            ),
            Tier::ModeratelyGood => (
                "Moderately Good for LLMs",
                "Useful training data",
                "This text has moderately good characteristics for LLM processing. Several aspects could be improved for optimal results.",
            ),
            Tier::Average => (
                "Average for LLMs",
                "Basic training data",
                "This content has average characteristics for LLM processing. It may have inconsistent structure, complexity, or vocabulary patterns.",
            ),
            Tier::BelowAverage => (
                "Below Average for LLMs",
                "Requires preprocessing",
                "This text may be challenging for LLMs to process effectively. Consider restructuring with more consistent patterns.",
            ),
            Tier::Difficult => (
                "Difficult for LLMs",
                "Not ideal for training",
                "This content has characteristics that make it difficult for LLMs to process effectively. Consider significant restructuring.",
            ),
        };
        Explanation {
            level,
            training_value,
            description,
        }
    }
}

pub fn explain(score: Score) -> Explanation {
    Tier::for_score(score).explanation()
}
