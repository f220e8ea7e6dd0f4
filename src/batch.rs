use crate::engine;
use crate::engine::suggest::dedup;
use crate::extract::Document;
use crate::types::report::{BatchReport, FileResult};
use chrono::Utc;

pub fn evaluate(document: &Document) -> FileResult {
    let assessment = engine::assess(&document.text);
    tracing::debug!(
        document = %document.name,
        score = assessment.score,
        "document scored"
    );
    FileResult {
        filename: document.name.clone(),
        score: assessment.score,
        explanation: engine::explain(assessment.score),
        factors: assessment.factors,
    }
}

pub fn aggregate(documents: &[Document]) -> BatchReport {
    collate(documents.iter().map(evaluate).collect())
}

/// Builds a report from results in input order: suggestions are gathered
/// before sorting and deduplicated by text, then results are ordered by
/// descending score with ties kept in input order.
pub fn collate(results: Vec<FileResult>) -> BatchReport {
    let suggestions = dedup(
        results
            .iter()
            .flat_map(|result| engine::suggest(result.score)),
    );

    let mut report = BatchReport {
        generated_at: Utc::now().to_rfc3339(),
        results,
        suggestions,
    };
    report.sort_results();

    tracing::info!(
        documents = report.results.len(),
        suggestions = report.suggestions.len(),
        lowest = report.lowest_score(),
        "batch scored"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Score;

    fn result(name: &str, score: Score) -> FileResult {
        FileResult {
            filename: name.to_string(),
            score,
            explanation: engine::explain(score),
            factors: Vec::new(),
        }
    }

    #[test]
    fn collate_sorts_descending_and_keeps_ties_in_order() {
        let report = collate(vec![
            result("first", 30.0),
            result("top", 90.0),
            result("second", 30.0),
        ]);
        let names = report
            .results
            .iter()
            .map(|result| result.filename.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["top", "first", "second"]);
    }

    #[test]
    fn collate_deduplicates_suggestions_in_scan_order() {
        let report = collate(vec![
            result("low", 30.0),
            result("high", 90.0),
            result("mid", 50.0),
        ]);
        let texts = report
            .suggestions
            .iter()
            .map(|suggestion| suggestion.text)
            .collect::<Vec<_>>();

        let mut expected = engine::suggest(30.0)
            .iter()
            .map(|s| s.text)
            .collect::<Vec<_>>();
        expected.extend(engine::suggest(90.0).iter().map(|s| s.text));
        assert_eq!(texts, expected);
    }

    #[test]
    fn shared_suggestion_appears_once() {
        let report = collate(vec![result("a", 70.0), result("b", 72.0)]);
        assert_eq!(report.suggestions.len(), 1);
        assert!(report.suggestions[0].text.starts_with("Fine-tune sentence length"));
    }

    #[test]
    fn aggregate_scores_each_document() {
        let documents = vec![
            Document::new("empty.txt", ""),
            Document::new("placeholder.doc", crate::extract::UNSUPPORTED_PLACEHOLDER),
        ];
        let report = aggregate(&documents);
        assert_eq!(report.results.len(), 2);

        let empty = report
            .results
            .iter()
            .find(|result| result.filename == "empty.txt")
            .expect("empty document should be reported");
        assert_eq!(empty.score, 0.0);
        assert_eq!(empty.explanation.level, "Difficult for LLMs");
        assert!(empty.factors.is_empty());
    }

    #[test]
    fn aggregate_of_nothing_is_empty() {
        let report = aggregate(&[]);
        assert!(report.results.is_empty());
        assert!(report.suggestions.is_empty());
        assert!(report.lowest_score().is_none());
    }
}
