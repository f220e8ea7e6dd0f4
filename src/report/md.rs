use crate::types::report::BatchReport;

pub fn to_markdown(report: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Readability Report\n\n");
    output.push_str(&format!("Documents scored: {}\n\n", report.results.len()));

    output.push_str("## Documents\n\n");
    if report.results.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for result in &report.results {
            output.push_str(&format!(
                "### {} ({:.1})\n\n- level: {}\n- training value: {}\n\n{}\n\n",
                result.filename,
                result.score,
                result.explanation.level,
                result.explanation.training_value,
                result.explanation.description
            ));
            if !result.factors.is_empty() {
                for outcome in &result.factors {
                    output.push_str(&format!(
                        "- {}: {:.3} ({:+})\n",
                        outcome.factor.name(),
                        outcome.value,
                        outcome.delta
                    ));
                }
                output.push('\n');
            }
        }
    }

    output.push_str("## Suggestions\n\n");
    if report.suggestions.is_empty() {
        output.push_str("- none\n");
    } else {
        for suggestion in &report.suggestions {
            output.push_str(&format!(
                "- {}\n  Example: {}\n",
                suggestion.text, suggestion.example
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("# Readability Report"));
        assert!(rendered.contains("## Documents"));
        assert!(rendered.contains("## Suggestions"));
        assert!(rendered.contains("### notes.txt (62.0)"));
        assert!(rendered.contains("- sentence_length: 14.500 (+10)"));
        assert!(rendered.contains("Example: Aim for sentences between 12-20 words."));
    }

    #[test]
    fn markdown_lists_higher_scores_first() {
        let rendered = to_markdown(&sample_report());
        let notes = rendered.find("### notes.txt").expect("notes should render");
        let draft = rendered.find("### draft.md").expect("draft should render");
        assert!(notes < draft);
    }
}
