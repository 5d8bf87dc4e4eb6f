use crate::utils::error::{ExportError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ExportError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Question ids travel as strings in the input file but must be numeric,
/// since they are spliced into the request path.
pub fn validate_question_ids(field_name: &str, ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        return Err(ExportError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for id in ids {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ExportError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.clone(),
                reason: "Question ids must be non-empty and numeric".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_date_range(
    field_name: &str,
    from: Option<i64>,
    to: Option<i64>,
) -> Result<()> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(ExportError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format!("{}..{}", from, to),
                reason: "'from' date is after 'to' date".to_string(),
            });
        }
    }
    Ok(())
}
