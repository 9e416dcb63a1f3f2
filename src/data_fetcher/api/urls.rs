//! URL building utilities for API endpoints
//!
//! Every dynamic segment (player name, platform, id) is pushed as a path
//! segment and therefore percent-encoded.

use crate::error::AppError;
use reqwest::Url;

fn endpoint_url(api_domain: &str, segments: &[&str]) -> Result<String, AppError> {
    let mut url = Url::parse(api_domain)
        .map_err(|e| AppError::config_error(format!("Invalid API domain '{api_domain}': {e}")))?;

    url.path_segments_mut()
        .map_err(|_| AppError::config_error(format!("API domain '{api_domain}' cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);

    Ok(url.into())
}

/// Builds the player search URL for a name on a platform.
///
/// # Example
/// ```
/// use siege_profile::data_fetcher::api::build_search_url;
///
/// let url = build_search_url("https://r6stats.com/api", "Ghost", "pc").unwrap();
/// assert_eq!(url, "https://r6stats.com/api/player-search/Ghost/pc");
///
/// let url = build_search_url("https://r6stats.com/api/", "Sly Fox", "xone").unwrap();
/// assert_eq!(url, "https://r6stats.com/api/player-search/Sly%20Fox/xone");
/// ```
pub fn build_search_url(api_domain: &str, name: &str, platform: &str) -> Result<String, AppError> {
    endpoint_url(api_domain, &["player-search", name, platform])
}

/// Builds the lifetime stats URL for a player id.
///
/// # Example
/// ```
/// use siege_profile::data_fetcher::api::build_stats_url;
///
/// let url = build_stats_url("https://r6stats.com/api", "abc-123").unwrap();
/// assert_eq!(url, "https://r6stats.com/api/stats/abc-123");
/// ```
pub fn build_stats_url(api_domain: &str, player_id: &str) -> Result<String, AppError> {
    endpoint_url(api_domain, &["stats", player_id])
}

/// Builds the per-season stats URL for a player id.
///
/// # Example
/// ```
/// use siege_profile::data_fetcher::api::build_seasonal_url;
///
/// let url = build_seasonal_url("https://r6stats.com/api", "abc-123").unwrap();
/// assert_eq!(url, "https://r6stats.com/api/stats/abc-123/seasonal");
/// ```
pub fn build_seasonal_url(api_domain: &str, player_id: &str) -> Result<String, AppError> {
    endpoint_url(api_domain, &["stats", player_id, "seasonal"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_are_percent_encoded() {
        let url = build_search_url("https://r6stats.com/api", "a/b?c#d", "pc").unwrap();
        assert_eq!(url, "https://r6stats.com/api/player-search/a%2Fb%3Fc%23d/pc");
    }

    #[test]
    fn test_domain_without_path() {
        let url = build_stats_url("http://127.0.0.1:8080", "abc-123").unwrap();
        assert_eq!(url, "http://127.0.0.1:8080/stats/abc-123");
    }

    #[test]
    fn test_unicode_name() {
        let url = build_search_url("https://r6stats.com/api", "Jäger", "ps4").unwrap();
        assert_eq!(url, "https://r6stats.com/api/player-search/J%C3%A4ger/ps4");
    }

    #[test]
    fn test_invalid_domain_is_config_error() {
        let err = build_stats_url("not a url", "abc-123").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = build_stats_url("mailto:someone@example.com", "abc-123").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
