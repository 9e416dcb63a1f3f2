use crate::error::AppError;
use reqwest::Url;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain and rank image base URL must be absolute http(s) URLs
/// - HTTP timeout must be non-zero
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    rank_image_base_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_http_url("API domain", api_domain)?;
    validate_http_url("Rank image base URL", rank_image_base_url)?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_http_url(label: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    let url = Url::parse(value)
        .map_err(|e| AppError::config_error(format!("{label} '{value}' is not a valid URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_error(format!(
            "{label} must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}
