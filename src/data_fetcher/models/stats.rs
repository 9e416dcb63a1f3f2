//! Raw payload of the per-player stats endpoint.
//!
//! Every level is optional. Normalization into [`super::profile`] types
//! decides what an absent level means.

use super::lenient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct StatsPayload {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub ubisoft_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub platform: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub avatar_url_256: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub last_updated: Option<String>,
    pub queue: Option<UpdateQueue>,
    pub progression: Option<RawProgression>,
    pub stats: Option<Vec<Option<RawStatsEntry>>>,
    pub operators: Option<Vec<Option<RawOperator>>>,
}

impl StatsPayload {
    /// The lifetime aggregate entry. Upstream only ever fills the first slot,
    /// and a `null` there counts as no entry.
    pub fn primary_stats(&self) -> Option<&RawStatsEntry> {
        self.stats
            .as_ref()
            .and_then(|entries| entries.first())
            .and_then(Option::as_ref)
    }
}

/// Refresh queue the upstream places the profile in.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct UpdateQueue {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub estimated: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawProgression {
    #[serde(deserialize_with = "lenient::opt_int")]
    pub level: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub lootbox_probability: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub total_xp: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawStatsEntry {
    pub general: Option<RawGeneralStats>,
    pub queue: Option<RawQueues>,
    pub gamemode: Option<RawGamemodes>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawGeneralStats {
    #[serde(deserialize_with = "lenient::opt_int")]
    pub assists: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub barricades_deployed: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub blind_kills: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub bullets_fired: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub bullets_hit: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub dbnos: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub deaths: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub distance_travelled: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub draws: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub gadgets_destroyed: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub games_played: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub headshots: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub kd: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub kills: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub losses: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub melee_kills: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub penetration_kills: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub playtime: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub rappel_breaches: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub reinforcements_deployed: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub revives: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub suicides: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub wins: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub wl: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawQueues {
    pub casual: Option<RawQueueStats>,
    pub ranked: Option<RawQueueStats>,
    pub other: Option<RawQueueStats>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawQueueStats {
    #[serde(deserialize_with = "lenient::opt_int")]
    pub deaths: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub draws: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub games_played: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub kd: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub kills: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub losses: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub playtime: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub wins: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub wl: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawGamemodes {
    pub bomb: Option<RawGamemodeStats>,
    pub secure_area: Option<RawGamemodeStats>,
    pub hostage: Option<RawGamemodeStats>,
}

/// Shared shape of the three objective modes; the mode-specific counters
/// are simply absent on the modes that do not report them.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawGamemodeStats {
    #[serde(deserialize_with = "lenient::opt_int")]
    pub best_score: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub games_played: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub losses: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub playtime: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub wins: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub wl: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub kills_as_attacker_in_objective: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub kills_as_defender_in_objective: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub times_objective_secured: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub extractions_denied: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawOperator {
    #[serde(deserialize_with = "lenient::opt_int")]
    pub kills: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub deaths: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub kd: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub wins: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub losses: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub wl: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub headshots: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub dbnos: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub melee_kills: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub experience: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub playtime: Option<i64>,
    pub abilities: Option<Vec<Option<RawAbility>>>,
    pub operator: Option<RawOperatorInfo>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawAbility {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawOperatorInfo {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub internal_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub ctu: Option<String>,
    pub images: Option<RawOperatorImages>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawOperatorImages {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub badge: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub bust: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub figure: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_parses_to_all_none() {
        let payload: StatsPayload = serde_json::from_value(json!({})).unwrap();
        assert_eq!(payload, StatsPayload::default());
        assert!(payload.primary_stats().is_none());
    }

    #[test]
    fn test_null_containers_parse() {
        let payload: StatsPayload = serde_json::from_value(json!({
            "username": "Ghost",
            "stats": null,
            "operators": null,
            "progression": null
        }))
        .unwrap();
        assert_eq!(payload.username.as_deref(), Some("Ghost"));
        assert!(payload.stats.is_none());
        assert!(payload.operators.is_none());
    }

    #[test]
    fn test_primary_stats_uses_first_entry() {
        let payload: StatsPayload = serde_json::from_value(json!({
            "stats": [
                {"general": {"kills": 10}},
                {"general": {"kills": 99}}
            ]
        }))
        .unwrap();
        let general = payload.primary_stats().unwrap().general.as_ref().unwrap();
        assert_eq!(general.kills, Some(10));
    }

    #[test]
    fn test_operator_parses_nested_metadata() {
        let operator: RawOperator = serde_json::from_value(json!({
            "kills": 3,
            "melee_kills": 1,
            "abilities": [{"key": "gadget", "title": "Gadgets", "value": 4}],
            "operator": {
                "name": "Ash",
                "internal_name": "ash",
                "role": "attacker",
                "ctu": "FBI SWAT",
                "images": {"badge": "b.png", "bust": "u.png", "figure": "f.png"}
            }
        }))
        .unwrap();

        assert_eq!(operator.melee_kills, Some(1));
        let info = operator.operator.unwrap();
        assert_eq!(info.internal_name.as_deref(), Some("ash"));
        assert_eq!(info.images.unwrap().figure.as_deref(), Some("f.png"));
        let abilities = operator.abilities.unwrap();
        assert_eq!(abilities[0].as_ref().unwrap().value, Some(4));
    }

    #[test]
    fn test_null_stats_entry_is_no_entry() {
        let payload: StatsPayload = serde_json::from_value(json!({
            "username": "Ghost",
            "platform": "pc",
            "stats": [null]
        }))
        .unwrap();
        assert_eq!(payload.username.as_deref(), Some("Ghost"));
        assert!(payload.primary_stats().is_none());
    }

    #[test]
    fn test_null_list_elements_parse() {
        let payload: StatsPayload = serde_json::from_value(json!({
            "operators": [null, {"kills": 2, "abilities": [null, {"value": 1}]}]
        }))
        .unwrap();
        let operators = payload.operators.unwrap();
        assert!(operators[0].is_none());
        let abilities = operators[1].as_ref().unwrap().abilities.as_ref().unwrap();
        assert!(abilities[0].is_none());
        assert_eq!(abilities[1].as_ref().unwrap().value, Some(1));
    }
}
