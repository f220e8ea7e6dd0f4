use crate::engine::Score;
use crate::types::report::BatchReport;
use serde_json::json;

const ERROR_BELOW: Score = 25.0;
const WARNING_BELOW: Score = 45.0;

fn level(score: Score) -> &'static str {
    if score < ERROR_BELOW {
        "error"
    } else if score < WARNING_BELOW {
        "warning"
    } else {
        "note"
    }
}

pub fn to_sarif(report: &BatchReport) -> Result<String, serde_json::Error> {
    let results: Vec<_> = report
        .results
        .iter()
        .map(|result| {
            json!({
                "ruleId": "readability.tier",
                "level": level(result.score),
                "message": {
                    "text": format!(
                        "{} scored {:.1}: {}",
                        result.filename, result.score, result.explanation.level
                    )
                },
                "locations": [{
                    "physicalLocation": {
                        "artifactLocation": { "uri": result.filename }
                    }
                }],
                "properties": { "score": result.score },
            })
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "llm-readability",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}
