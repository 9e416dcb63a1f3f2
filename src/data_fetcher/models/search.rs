use super::lenient;
use serde::{Deserialize, Serialize};

/// Outer `{ "data": ... }` wrapper every endpoint responds with.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

/// One candidate returned by the player search endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchCandidate {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub ubisoft_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub platform: Option<String>,
    #[serde(rename = "seasonalStats")]
    pub seasonal_stats: Option<SearchSeasonalStats>,
}

/// The slice of current-season data the search endpoint embeds per candidate.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchSeasonalStats {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub region: Option<String>,
}

impl SearchCandidate {
    /// Region string the candidate reports for the current season, if any.
    pub fn region(&self) -> Option<&str> {
        self.seasonal_stats
            .as_ref()
            .and_then(|stats| stats.region.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_deserialization() {
        let candidate: SearchCandidate = serde_json::from_value(json!({
            "ubisoft_id": "abc-123",
            "username": "Ghost",
            "platform": "pc",
            "avatar_url_146": "https://example.com/a.png",
            "seasonalStats": {"region": "emea", "mmr": 2500}
        }))
        .unwrap();

        assert_eq!(candidate.ubisoft_id.as_deref(), Some("abc-123"));
        assert_eq!(candidate.username.as_deref(), Some("Ghost"));
        assert_eq!(candidate.region(), Some("emea"));
    }

    #[test]
    fn test_candidate_without_seasonal_stats() {
        let candidate: SearchCandidate =
            serde_json::from_value(json!({"ubisoft_id": "abc", "seasonalStats": null})).unwrap();
        assert_eq!(candidate.region(), None);
    }

    #[test]
    fn test_envelope_with_missing_data() {
        let envelope: ApiEnvelope<Vec<SearchCandidate>> =
            serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(envelope.data.is_none());

        let envelope: ApiEnvelope<Vec<SearchCandidate>> =
            serde_json::from_value(json!({"data": null})).unwrap();
        assert!(envelope.data.is_none());
    }
}
