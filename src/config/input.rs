use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{self, Validate};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON input file describing one export run.
///
/// ```json
/// {
///   "output": "questions.csv",
///   "from": "2023-01-01",
///   "to": "2023-06-30",
///   "questions": ["11227809", "927358"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub questions: Vec<String>,
}

impl InputConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExportError::IoError)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ExportError::ConfigError {
            message: format!("Input file parsing error: {}", e),
        })
    }

    /// Start of the `from` day as a Unix timestamp (midnight UTC).
    pub fn from_timestamp(&self) -> Result<Option<i64>> {
        self.from.as_deref().map(|d| parse_date("from", d)).transpose()
    }

    /// Start of the `to` day as a Unix timestamp (midnight UTC).
    pub fn to_timestamp(&self) -> Result<Option<i64>> {
        self.to.as_deref().map(|d| parse_date("to", d)).transpose()
    }
}

fn parse_date(field: &str, value: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        ExportError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("Expected YYYY-MM-DD: {}", e),
        }
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp())
}

impl Validate for InputConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output", &self.output)?;
        validation::validate_question_ids("questions", &self.questions)?;

        let from = self.from_timestamp()?;
        let to = self.to_timestamp()?;
        validation::validate_date_range("from/to", from, to)?;

        Ok(())
    }
}
