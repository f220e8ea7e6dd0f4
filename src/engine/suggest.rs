use super::Score;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    pub text: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Above(Score),
    AtMost(Score),
}

impl Trigger {
    fn fires(self, score: Score) -> bool {
        match self {
            Trigger::Above(min) => score > min,
            Trigger::AtMost(max) => score <= max,
        }
    }
}

// Checked in order; every rule that fires contributes its suggestion.
const SUGGESTION_RULES: [(Trigger, Suggestion); 7] = [
    (
        Trigger::Above(75.0),
        Suggestion {
            text: "Exceptional LLM-friendly content. Consider using as a gold standard template.",
            example: "Your balanced sentence structure, optimal vocabulary diversity, and consistent patterns make this ideal for LLM processing.",
        },
    ),
    (
        Trigger::AtMost(75.0),
        Suggestion {
            text: "Fine-tune sentence length distribution for optimal LLM processing.",
            example: "Aim for sentences between 12-20 words. Current average may be outside the optimal range.",
        },
    ),
    (
        Trigger::AtMost(65.0),
        Suggestion {
            text: "Optimize vocabulary diversity ratio (aim for 0.35-0.55 unique words ratio).",
            example: "Your text may have too many unique terms or be too repetitive. Balance consistent terminology with controlled variation.",
        },
    ),
    (
        Trigger::AtMost(55.0),
        Suggestion {
            text: "Improve paragraph structure and document organization.",
            example: "Aim for 4-12 well-structured paragraphs with clear topical focus in each.",
        },
    ),
    (
        Trigger::AtMost(45.0),
        Suggestion {
            text: "Balance simple and complex sentences (aim for 20-50% complex sentences).",
            example: "Your text may have too many complex sentences with multiple clauses or too many overly simple sentences.",
        },
    ),
    (
        Trigger::AtMost(35.0),
        Suggestion {
            text: "Reduce special characters and inconsistent formatting.",
            example: "Minimize special characters to less than 5% of your text and maintain consistent capitalization patterns.",
        },
    ),
    (
        Trigger::AtMost(25.0),
        Suggestion {
            text: "Consider complete restructuring with more consistent patterns and clearer organization.",
            example: "Break very long paragraphs into smaller units, simplify overly complex sentences, and use more consistent terminology throughout.",
        },
    ),
];

pub fn suggest(score: Score) -> Vec<Suggestion> {
    SUGGESTION_RULES
        .iter()
        .filter(|(trigger, _)| trigger.fires(score))
        .map(|(_, suggestion)| *suggestion)
        .collect()
}

/// Drops suggestions whose `text` was already seen, keeping first occurrences
/// in order.
pub fn dedup<I>(suggestions: I) -> Vec<Suggestion>
where
    I: IntoIterator<Item = Suggestion>,
{
    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|suggestion| seen.insert(suggestion.text))
        .collect()
}
