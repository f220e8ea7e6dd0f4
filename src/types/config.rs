use crate::error::ReadabilityError;
use crate::engine::Score;
use crate::report::OutputFormat;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadabilityConfig {
    #[serde(default)]
    pub input: InputConfig,
    pub thresholds: Option<ThresholdsConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_recursive")]
    pub recursive: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            recursive: default_recursive(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string()]
}

fn default_recursive() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    pub warn_below: Option<Score>,
    pub fail_below: Option<Score>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thresholds {
    pub warn_below: Option<Score>,
    pub fail_below: Option<Score>,
}

impl ReadabilityConfig {
    pub fn thresholds(&self) -> Thresholds {
        match &self.thresholds {
            Some(thresholds) => Thresholds {
                warn_below: thresholds.warn_below,
                fail_below: thresholds.fail_below,
            },
            None => Thresholds::default(),
        }
    }

    pub fn report_format(&self) -> Option<OutputFormat> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.input
            .extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    pub fn validate(&self) -> Result<(), ReadabilityError> {
        if self.input.extensions.is_empty() {
            return Err(ReadabilityError::ConfigParse(
                "input.extensions cannot be empty".to_string(),
            ));
        }
        let mut seen = HashSet::<String>::new();
        for extension in &self.input.extensions {
            let normalized = extension.trim().to_ascii_lowercase();
            if normalized.is_empty() {
                return Err(ReadabilityError::ConfigParse(
                    "input.extensions entries must be non-empty".to_string(),
                ));
            }
            if normalized.starts_with('.') {
                return Err(ReadabilityError::ConfigParse(format!(
                    "input.extensions entry '{extension}' must not start with a dot"
                )));
            }
            if !seen.insert(normalized) {
                return Err(ReadabilityError::ConfigParse(format!(
                    "input.extensions contains duplicate extension: {extension}"
                )));
            }
        }

        self.thresholds().validate()
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), ReadabilityError> {
        for (name, value) in [("warn_below", self.warn_below), ("fail_below", self.fail_below)] {
            if let Some(value) = value {
                if !(0.0..=100.0).contains(&value) {
                    return Err(ReadabilityError::ConfigParse(format!(
                        "thresholds.{name} must be between 0 and 100"
                    )));
                }
            }
        }

        if let (Some(warn_below), Some(fail_below)) = (self.warn_below, self.fail_below) {
            if fail_below > warn_below {
                return Err(ReadabilityError::ConfigParse(format!(
                    "thresholds.fail_below ({fail_below}) cannot exceed thresholds.warn_below ({warn_below})"
                )));
            }
        }

        Ok(())
    }
}
