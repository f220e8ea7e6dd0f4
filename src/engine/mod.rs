pub mod explain;
pub mod rules;
pub mod suggest;
pub mod tokenize;

pub use explain::{explain, Explanation, Tier};
pub use rules::Factor;
pub use suggest::{suggest, Suggestion};

use rules::{BASE_SCORE, MAX_SCORE, MIN_SCORE};
use serde::Serialize;
use tokenize::Tokens;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorOutcome {
    pub factor: Factor,
    pub value: f64,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub score: Score,
    pub factors: Vec<FactorOutcome>,
}

impl Assessment {
    fn blank() -> Self {
        Self {
            score: MIN_SCORE,
            factors: Vec::new(),
        }
    }

    pub fn outcome(&self, factor: Factor) -> Option<&FactorOutcome> {
        self.factors.iter().find(|outcome| outcome.factor == factor)
    }
}

/// Scores `text` and keeps the per-factor breakdown.
///
/// Blank text scores 0 without evaluating any factor. Otherwise every factor
/// is measured against the same tokenization and its delta added to
/// [`BASE_SCORE`]; the sum is clamped to `[0, 100]`.
pub fn assess(text: &str) -> Assessment {
    if text.trim().is_empty() {
        return Assessment::blank();
    }

    let tokens = Tokens::new(text);
    let factors = Factor::ALL
        .iter()
        .map(|&factor| {
            let value = factor.measure(&tokens);
            let delta = factor.delta(value);
            tracing::debug!(factor = factor.name(), value, delta, "factor evaluated");
            FactorOutcome {
                factor,
                value,
                delta,
            }
        })
        .collect::<Vec<_>>();

    let raw = BASE_SCORE + factors.iter().map(|outcome| outcome.delta).sum::<f64>();
    Assessment {
        score: raw.clamp(MIN_SCORE, MAX_SCORE),
        factors,
    }
}

pub fn score(text: &str) -> Score {
    assess(text).score
}
