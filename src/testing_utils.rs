use crate::data_fetcher::models::{PlayerProfile, RankBadge, Region};
use serde_json::{Value, json};

const RANK_NAMES: [&str; 23] = [
    "Unranked",
    "Copper V",
    "Copper IV",
    "Copper III",
    "Copper II",
    "Copper I",
    "Bronze V",
    "Bronze IV",
    "Bronze III",
    "Bronze II",
    "Bronze I",
    "Silver V",
    "Silver IV",
    "Silver III",
    "Silver II",
    "Silver I",
    "Gold III",
    "Gold II",
    "Gold I",
    "Platinum III",
    "Platinum II",
    "Platinum I",
    "Diamond",
];

/// Builders for upstream JSON payloads shaped like the r6stats responses.
pub struct UpstreamFixtures;

impl UpstreamFixtures {
    /// Wraps a payload in the `{ "data": ... }` envelope.
    pub fn envelope(data: Value) -> Value {
        json!({ "data": data })
    }

    /// A search response listing `candidates`.
    pub fn search_payload(candidates: Vec<Value>) -> Value {
        Self::envelope(Value::Array(candidates))
    }

    pub fn candidate(id: &str, username: &str, platform: &str, region: Option<&str>) -> Value {
        let mut candidate = json!({
            "ubisoft_id": id,
            "username": username,
            "platform": platform,
            "avatar_url_146": format!("https://ubisoft-avatars.akamaized.net/{id}/default_146_146.png"),
        });
        if let Some(region) = region {
            candidate["seasonalStats"] = json!({ "region": region, "mmr": 2612.25 });
        }
        candidate
    }

    /// Stats payload with every bucket and two operators filled in.
    pub fn stats_payload(username: &str, platform: &str) -> Value {
        json!({
            "ubisoft_id": "abc-123",
            "username": username,
            "platform": platform,
            "avatar_url_256": "https://ubisoft-avatars.akamaized.net/abc-123/default_256_256.png",
            "last_updated": "2020-07-14T09:12:45.000Z",
            "queue": { "estimated": "2020-07-14T09:42:45.000Z" },
            "progression": {
                "level": 245,
                "lootbox_probability": 0.38,
                "total_xp": 18_345_221
            },
            "stats": [{
                "general": {
                    "assists": 1_204,
                    "barricades_deployed": 803,
                    "blind_kills": 12,
                    "bullets_fired": 250_113,
                    "bullets_hit": 61_002,
                    "dbnos": 1_530,
                    "deaths": 4_310,
                    "distance_travelled": 1_234_567.5,
                    "draws": 3,
                    "gadgets_destroyed": 940,
                    "games_played": 1_105,
                    "headshots": 2_288,
                    "kd": 1.12,
                    "kills": 4_827,
                    "losses": 512,
                    "melee_kills": 97,
                    "penetration_kills": 301,
                    "playtime": 1_512_340,
                    "rappel_breaches": 45,
                    "reinforcements_deployed": 3_120,
                    "revives": 260,
                    "suicides": 14,
                    "wins": 590,
                    "wl": 0.54
                },
                "queue": {
                    "casual": Self::queue_stats(402, 1.08, 0.52),
                    "ranked": Self::queue_stats(655, 1.15, 0.55),
                    "other": Self::queue_stats(48, 0.91, 0.47)
                },
                "gamemode": {
                    "bomb": {
                        "best_score": 5_210,
                        "games_played": 700,
                        "losses": 310,
                        "playtime": 950_000,
                        "wins": 390,
                        "wl": 0.56
                    },
                    "secure_area": {
                        "best_score": 4_480,
                        "games_played": 250,
                        "losses": 120,
                        "playtime": 330_000,
                        "wins": 130,
                        "wl": 0.52,
                        "kills_as_attacker_in_objective": 88,
                        "kills_as_defender_in_objective": 141,
                        "times_objective_secured": 63
                    },
                    "hostage": {
                        "best_score": 3_905,
                        "games_played": 155,
                        "losses": 82,
                        "playtime": 232_340,
                        "wins": 73,
                        "wl": 0.47,
                        "extractions_denied": 19
                    }
                }
            }],
            "operators": [
                Self::operator("Ash", "ash", "attacker"),
                Self::operator("Jäger", "jager", "defender")
            ]
        })
    }

    fn queue_stats(games_played: i64, kd: f64, wl: f64) -> Value {
        json!({
            "deaths": games_played * 4,
            "draws": 1,
            "games_played": games_played,
            "kd": kd,
            "kills": games_played * 4 + 17,
            "losses": games_played / 2,
            "playtime": games_played * 1_300,
            "wins": games_played - games_played / 2,
            "wl": wl
        })
    }

    pub fn operator(name: &str, internal_name: &str, role: &str) -> Value {
        json!({
            "kills": 512,
            "deaths": 430,
            "kd": 1.19,
            "wins": 140,
            "losses": 120,
            "wl": 0.54,
            "headshots": 250,
            "dbnos": 60,
            "melee_kills": 7,
            "experience": 250_000,
            "playtime": 360_000,
            "abilities": [
                { "key": format!("{internal_name}_gadget"), "title": "Gadget Uses", "value": 84 }
            ],
            "operator": {
                "name": name,
                "internal_name": internal_name,
                "role": role,
                "ctu": "GSG 9",
                "images": {
                    "badge": format!("https://cdn.r6stats.com/badges/{internal_name}.png"),
                    "bust": format!("https://cdn.r6stats.com/busts/{internal_name}.png"),
                    "figure": format!("https://cdn.r6stats.com/figures/{internal_name}.png")
                }
            }
        })
    }

    /// A seasonal response holding `seasons` in the given order.
    pub fn seasonal_payload(seasons: Vec<Value>) -> Value {
        json!({ "seasons": seasons })
    }

    /// A season with a `rank_count` entry rank table where every tracked
    /// region sits at `rank_index`.
    pub fn season(name: &str, rank_count: usize, rank_index: usize) -> Value {
        let ranks: Vec<Value> = (0..rank_count)
            .map(|i| json!({ "name": Self::rank_name(i), "path": format!("rank-{i}.svg") }))
            .collect();
        let record = Self::region_record(rank_index);

        json!({
            "name": name,
            "start_date": "2020-06-11T14:00:00.000Z",
            "end_date": "2020-09-10T14:00:00.000Z",
            "primary_color": "#d2005a",
            "ranks": ranks,
            "regions": {
                "ncsa": [record.clone()],
                "emea": [record.clone()],
                "apac": [record]
            }
        })
    }

    pub fn region_record(rank_index: usize) -> Value {
        json!({
            "wins": 42,
            "losses": 38,
            "abandons": 1,
            "kills": 310,
            "deaths": 290,
            "prev_rank_mmr": 2_499.5,
            "mmr": 2_612.25,
            "next_rank_mmr": 2_699.5,
            "max_mmr": 2_701.75,
            "last_match_mmr_change": 23.5,
            "rank": rank_index,
            "max_rank": rank_index,
            "champions_rank_position": null,
            "skill_mean": 26.12,
            "last_match_skill_mean_change": 0.25,
            "skill_standard_deviatation": 7.12,
            "last_match_skill_standard_deviation_change": -0.03,
            "updated_at": "2020-07-14 09:12:45"
        })
    }

    /// Display name of rank `index` in fixture rank tables.
    pub fn rank_name(index: usize) -> String {
        RANK_NAMES
            .get(index)
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("Rank {index}"))
    }
}

/// Structural checks on assembled profiles.
pub struct ProfileChecks;

impl ProfileChecks {
    pub fn validate_profile(profile: &PlayerProfile) -> Result<(), String> {
        if profile.id.trim().is_empty() {
            return Err("Profile id cannot be empty".to_string());
        }

        for (index, season) in profile.seasonal_stats.iter().flatten().enumerate() {
            for region in Region::TRACKED {
                let Some(stats) = season.region(region) else {
                    return Err(format!("Season {index} has no {region} record"));
                };
                Self::validate_badge(&stats.rank)
                    .and_then(|_| Self::validate_badge(&stats.max_rank))
                    .map_err(|e| format!("Season {index} {region}: {e}"))?;
            }
        }

        Ok(())
    }

    pub fn validate_badge(badge: &RankBadge) -> Result<(), String> {
        if badge.name.trim().is_empty() {
            return Err("Rank badge name cannot be empty".to_string());
        }
        if !badge.image_url.starts_with("http://") && !badge.image_url.starts_with("https://") {
            return Err(format!("Rank badge URL is not absolute: {}", badge.image_url));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{SeasonalPayload, StatsPayload};
    use crate::data_fetcher::processors::assemble_profile;

    #[test]
    fn test_stats_fixture_deserializes() {
        let payload: StatsPayload =
            serde_json::from_value(UpstreamFixtures::stats_payload("Ghost", "pc")).unwrap();
        assert_eq!(payload.username.as_deref(), Some("Ghost"));
        assert_eq!(payload.operators.as_ref().map(Vec::len), Some(2));
        assert!(payload.primary_stats().is_some());
    }

    #[test]
    fn test_season_fixture_uses_misspelled_key() {
        let payload: SeasonalPayload = serde_json::from_value(UpstreamFixtures::seasonal_payload(
            vec![UpstreamFixtures::season("Shadow Legacy", 5, 3)],
        ))
        .unwrap();
        let season = payload.seasons.unwrap()[0].clone().unwrap();
        let emea = season.region_record(Region::Emea).unwrap();
        assert_eq!(emea.skill_standard_deviation, Some(7.12));
        assert_eq!(season.rank_table().len(), 5);
    }

    #[test]
    fn test_rank_names() {
        assert_eq!(UpstreamFixtures::rank_name(0), "Unranked");
        assert_eq!(UpstreamFixtures::rank_name(22), "Diamond");
        assert_eq!(UpstreamFixtures::rank_name(40), "Rank 40");
    }

    #[test]
    fn test_candidate_without_region() {
        let candidate = UpstreamFixtures::candidate("abc-123", "Ghost", "pc", None);
        assert!(candidate.get("seasonalStats").is_none());
    }

    #[test]
    fn test_validate_assembled_profile() {
        let stats: StatsPayload =
            serde_json::from_value(UpstreamFixtures::stats_payload("Ghost", "pc")).unwrap();
        let seasonal: SeasonalPayload = serde_json::from_value(UpstreamFixtures::seasonal_payload(
            vec![UpstreamFixtures::season("Shadow Legacy", 5, 7)],
        ))
        .unwrap();
        let profile = assemble_profile(
            "abc-123",
            &stats,
            Some(&seasonal),
            Region::Emea,
            "https://cdn.example.com/ranks",
        );
        assert!(ProfileChecks::validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_id_and_relative_badge() {
        let profile = PlayerProfile {
            id: " ".to_string(),
            ..Default::default()
        };
        assert!(ProfileChecks::validate_profile(&profile).is_err());

        let badge = RankBadge {
            name: "Gold I".to_string(),
            image_url: "gold-1.svg".to_string(),
        };
        assert!(
            ProfileChecks::validate_badge(&badge)
                .unwrap_err()
                .contains("not absolute")
        );
    }
}
