use crate::engine::{Explanation, FactorOutcome, Score, Suggestion};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub filename: String,
    pub score: Score,
    pub explanation: Explanation,
    pub factors: Vec<FactorOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: String,
    pub results: Vec<FileResult>,
    pub suggestions: Vec<Suggestion>,
}

impl BatchReport {
    pub fn lowest_score(&self) -> Option<Score> {
        self.results
            .iter()
            .map(|result| result.score)
            .min_by(f64::total_cmp)
    }

    /// Stable sort, highest score first.
    pub fn sort_results(&mut self) {
        self.results
            .sort_by(|left, right| right.score.total_cmp(&left.score));
    }
}
