//! Canonical player profile assembled from the upstream payloads.
//!
//! Field names serialize in camelCase. Absent values stay `None` (`null`)
//! and are never coerced to zero.

use super::platform::Region;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: String,
    pub username: Option<String>,
    pub platform: Option<String>,
    pub region: Region,
    pub avatar_url: Option<String>,
    pub level: Option<i64>,
    #[serde(rename = "totalXP")]
    pub total_xp: Option<i64>,
    pub lootbox_probability: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
    pub next_update_estimate: Option<DateTime<Utc>>,
    pub stats: StatsBundle,
    pub operators: Vec<OperatorRecord>,
    /// `None` only when the seasonal fetch failed under best-effort enrichment.
    pub seasonal_stats: Option<Vec<SeasonRecord>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatsBundle {
    pub general_stats: GeneralStats,
    pub casual_stats: QueueStats,
    pub ranked_stats: QueueStats,
    pub other_stats: QueueStats,
    pub gamemode_stats: GamemodeStatsSet,
}

/// Lifetime aggregate across all queues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeneralStats {
    pub assists: Option<i64>,
    pub barricades_deployed: Option<i64>,
    pub blind_kills: Option<i64>,
    pub bullets_fired: Option<i64>,
    pub bullets_hit: Option<i64>,
    pub dbnos: Option<i64>,
    pub deaths: Option<i64>,
    pub distance_travelled: Option<f64>,
    pub draws: Option<i64>,
    pub gadgets_destroyed: Option<i64>,
    pub games_played: Option<i64>,
    pub headshots: Option<i64>,
    pub kd: Option<f64>,
    pub kills: Option<i64>,
    pub losses: Option<i64>,
    pub melee_kills: Option<i64>,
    pub penetration_kills: Option<i64>,
    pub playtime: Option<i64>,
    pub rappel_breaches: Option<i64>,
    pub reinforcements_deployed: Option<i64>,
    pub revives: Option<i64>,
    pub suicides: Option<i64>,
    pub wins: Option<i64>,
    pub wl: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QueueStats {
    pub deaths: Option<i64>,
    pub draws: Option<i64>,
    pub games_played: Option<i64>,
    pub kd: Option<f64>,
    pub kills: Option<i64>,
    pub losses: Option<i64>,
    pub playtime: Option<i64>,
    pub wins: Option<i64>,
    pub wl: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GamemodeStatsSet {
    pub bomb: GamemodeStats,
    pub secure_area: GamemodeStats,
    pub hostage: GamemodeStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GamemodeStats {
    pub best_score: Option<i64>,
    pub games_played: Option<i64>,
    pub losses: Option<i64>,
    pub playtime: Option<i64>,
    pub wins: Option<i64>,
    pub wl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kills_as_attacker_in_objective: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kills_as_defender_in_objective: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub times_objective_secured: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extractions_denied: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperatorRecord {
    pub kills: Option<i64>,
    pub deaths: Option<i64>,
    pub kd: Option<f64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub wl: Option<f64>,
    pub headshots: Option<i64>,
    pub dbnos: Option<i64>,
    pub melee_kills: Option<i64>,
    pub experience: Option<i64>,
    pub playtime: Option<i64>,
    pub abilities: Vec<AbilityUsage>,
    pub operator: OperatorInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AbilityUsage {
    pub key: Option<String>,
    pub title: Option<String>,
    pub value: Option<i64>,
}

/// Static operator metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperatorInfo {
    pub name: Option<String>,
    pub internal_name: Option<String>,
    pub role: Option<String>,
    /// Counter-terrorist unit (faction).
    pub ctu: Option<String>,
    pub images: OperatorImages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OperatorImages {
    pub badge: Option<String>,
    pub bust: Option<String>,
    pub figure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRecord {
    pub season_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub primary_color: Option<String>,
    pub ncsa: RegionalRankStats,
    pub emea: RegionalRankStats,
    pub apac: RegionalRankStats,
}

impl SeasonRecord {
    /// Stats for one of the tracked regions; `None` for [`Region::Invalid`].
    pub fn region(&self, region: Region) -> Option<&RegionalRankStats> {
        match region {
            Region::Ncsa => Some(&self.ncsa),
            Region::Emea => Some(&self.emea),
            Region::Apac => Some(&self.apac),
            Region::Invalid => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalRankStats {
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub abandons: Option<i64>,
    pub kills: Option<i64>,
    pub deaths: Option<i64>,
    #[serde(rename = "prevMMR")]
    pub prev_mmr: Option<f64>,
    #[serde(rename = "MMR")]
    pub mmr: Option<f64>,
    #[serde(rename = "nextMMR")]
    pub next_mmr: Option<f64>,
    #[serde(rename = "maxMMR")]
    pub max_mmr: Option<f64>,
    #[serde(rename = "lastMatchMMRChange")]
    pub last_match_mmr_change: Option<f64>,
    pub rank: RankBadge,
    pub max_rank: RankBadge,
    pub champions_rank_position: Option<i64>,
    pub skill_mean: Option<f64>,
    pub last_match_skill_mean_change: Option<f64>,
    pub skill_standard_deviation: Option<f64>,
    pub last_match_skill_standard_deviation_change: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Display name and artwork of a rank tier within one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankBadge {
    pub name: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rank_badge_serialization() {
        let badge = RankBadge {
            name: "Gold II".to_string(),
            image_url: "https://cdn.example.com/gold-2.svg".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&badge).unwrap(),
            json!({"name": "Gold II", "imageURL": "https://cdn.example.com/gold-2.svg"})
        );
    }

    #[test]
    fn test_general_stats_use_camel_case_keys() {
        let stats = GeneralStats {
            melee_kills: Some(4),
            barricades_deployed: Some(11),
            ..GeneralStats::default()
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["meleeKills"], json!(4));
        assert_eq!(value["barricadesDeployed"], json!(11));
        assert_eq!(value["kd"], serde_json::Value::Null);
    }

    #[test]
    fn test_gamemode_specific_fields_are_omitted_when_absent() {
        let bomb = GamemodeStats {
            best_score: Some(5200),
            ..GamemodeStats::default()
        };
        let value = serde_json::to_value(&bomb).unwrap();
        assert_eq!(value["bestScore"], json!(5200));
        assert!(value.get("extractionsDenied").is_none());
    }
}
