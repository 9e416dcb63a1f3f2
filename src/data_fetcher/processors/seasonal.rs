//! Seasonal payload → [`SeasonRecord`]s, including per-season rank badge
//! resolution.

use crate::constants::rank::{UNKNOWN_RANK_NAME, UNRANKED_IMAGE};
use crate::data_fetcher::models::{
    RankBadge, RawRank, RawRegionRecord, RawSeason, Region, RegionalRankStats, SeasonRecord,
    SeasonalPayload,
};
use crate::data_fetcher::processors::time_parsing::parse_optional_timestamp;

/// Normalizes every season in upstream order. `null` entries are skipped and
/// an absent season list produces an empty vector.
pub fn normalize_seasons(payload: &SeasonalPayload, image_base: &str) -> Vec<SeasonRecord> {
    payload
        .seasons
        .as_deref()
        .unwrap_or_default()
        .iter()
        .flatten()
        .map(|season| normalize_season(season, image_base))
        .collect()
}

pub fn normalize_season(season: &RawSeason, image_base: &str) -> SeasonRecord {
    let ranks = season.rank_table();
    let regional = |region| normalize_region(season.region_record(region), ranks, image_base);

    SeasonRecord {
        season_name: season.name.clone(),
        start_date: parse_optional_timestamp(season.start_date.as_deref()),
        end_date: parse_optional_timestamp(season.end_date.as_deref()),
        primary_color: season.primary_color.clone(),
        ncsa: regional(Region::Ncsa),
        emea: regional(Region::Emea),
        apac: regional(Region::Apac),
    }
}

/// Builds one region's stats. `ranks` must be the table of the season the
/// record belongs to.
pub fn normalize_region(
    record: Option<&RawRegionRecord>,
    ranks: &[RawRank],
    image_base: &str,
) -> RegionalRankStats {
    let empty = RawRegionRecord::default();
    let record = record.unwrap_or(&empty);

    RegionalRankStats {
        wins: record.wins,
        losses: record.losses,
        abandons: record.abandons,
        kills: record.kills,
        deaths: record.deaths,
        prev_mmr: record.prev_rank_mmr,
        mmr: record.mmr,
        next_mmr: record.next_rank_mmr,
        max_mmr: record.max_mmr,
        last_match_mmr_change: record.last_match_mmr_change,
        rank: resolve_rank_badge(ranks, record.rank, image_base),
        max_rank: resolve_rank_badge(ranks, record.max_rank, image_base),
        champions_rank_position: record.champions_rank_position,
        skill_mean: record.skill_mean,
        last_match_skill_mean_change: record.last_match_skill_mean_change,
        skill_standard_deviation: record.skill_standard_deviation,
        last_match_skill_standard_deviation_change: record
            .last_match_skill_standard_deviation_change,
        updated_at: parse_optional_timestamp(record.updated_at.as_deref()),
    }
}

/// Looks up a rank index in one season's rank table.
///
/// An absent, negative or out-of-range index, or an entry without a name,
/// resolves to the `Unknown` badge with the unranked artwork.
///
/// # Examples
///
/// ```
/// use siege_profile::data_fetcher::models::RawRank;
/// use siege_profile::data_fetcher::processors::resolve_rank_badge;
///
/// let ranks = vec![RawRank {
///     name: Some("Copper V".to_string()),
///     path: Some("copper-5.svg".to_string()),
/// }];
///
/// let badge = resolve_rank_badge(&ranks, Some(0), "https://cdn.example.com/ranks");
/// assert_eq!(badge.name, "Copper V");
/// assert_eq!(badge.image_url, "https://cdn.example.com/ranks/copper-5.svg");
///
/// let missing = resolve_rank_badge(&ranks, Some(7), "https://cdn.example.com/ranks");
/// assert_eq!(missing.name, "Unknown");
/// assert_eq!(missing.image_url, "https://cdn.example.com/ranks/unranked.svg");
/// ```
pub fn resolve_rank_badge(ranks: &[RawRank], index: Option<i64>, image_base: &str) -> RankBadge {
    let entry = index
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| ranks.get(i));

    let Some((entry, name)) = entry.and_then(|entry| {
        entry
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map(|name| (entry, name))
    }) else {
        return unknown_rank_badge(image_base);
    };

    let image = entry
        .path
        .as_deref()
        .filter(|path| !path.trim().is_empty())
        .unwrap_or(UNRANKED_IMAGE);

    RankBadge {
        name: name.to_string(),
        image_url: rank_image_url(image_base, image),
    }
}

/// Badge used when a rank cannot be resolved.
pub fn unknown_rank_badge(image_base: &str) -> RankBadge {
    RankBadge {
        name: UNKNOWN_RANK_NAME.to_string(),
        image_url: rank_image_url(image_base, UNRANKED_IMAGE),
    }
}

fn rank_image_url(image_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        image_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::UpstreamFixtures;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    const BASE: &str = "https://cdn.example.com/ranks";

    fn ranks(names: &[&str]) -> Vec<RawRank> {
        names
            .iter()
            .map(|name| RawRank {
                name: Some(name.to_string()),
                path: Some(format!("{}.svg", name.to_lowercase().replace(' ', "-"))),
            })
            .collect()
    }

    fn payload(value: serde_json::Value) -> SeasonalPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_resolves_index_against_table() {
        let table = ranks(&["Copper V", "Bronze V", "Silver V", "Gold III", "Platinum I"]);
        let badge = resolve_rank_badge(&table, Some(3), BASE);
        assert_eq!(badge.name, "Gold III");
        assert_eq!(badge.image_url, "https://cdn.example.com/ranks/gold-iii.svg");
    }

    #[test]
    fn test_out_of_range_and_negative_indices() {
        let table = ranks(&["Copper V", "Bronze V"]);
        let unknown = unknown_rank_badge(BASE);

        assert_eq!(resolve_rank_badge(&table, Some(2), BASE), unknown);
        assert_eq!(resolve_rank_badge(&table, Some(-1), BASE), unknown);
        assert_eq!(resolve_rank_badge(&table, None, BASE), unknown);
        assert_eq!(resolve_rank_badge(&[], Some(0), BASE), unknown);
        assert_eq!(unknown.name, "Unknown");
        assert_eq!(unknown.image_url, "https://cdn.example.com/ranks/unranked.svg");
    }

    #[test]
    fn test_entry_without_name_or_path() {
        let table = vec![
            RawRank {
                name: None,
                path: Some("mystery.svg".to_string()),
            },
            RawRank {
                name: Some("Diamond".to_string()),
                path: None,
            },
        ];

        assert_eq!(
            resolve_rank_badge(&table, Some(0), BASE),
            unknown_rank_badge(BASE)
        );
        let diamond = resolve_rank_badge(&table, Some(1), BASE);
        assert_eq!(diamond.name, "Diamond");
        assert_eq!(diamond.image_url, "https://cdn.example.com/ranks/unranked.svg");
    }

    #[test]
    fn test_image_url_joining() {
        assert_eq!(
            rank_image_url("https://cdn.example.com/ranks/", "/gold.svg"),
            "https://cdn.example.com/ranks/gold.svg"
        );
        assert_eq!(
            rank_image_url(BASE, "https://other.example.com/gold.svg"),
            "https://other.example.com/gold.svg"
        );
    }

    #[test]
    fn test_rank_lookup_is_scoped_to_each_season() {
        let seasons = payload(json!({
            "seasons": [
                {
                    "name": "Old Season",
                    "ranks": [{"name": "Old Zero", "path": "old-0.svg"}, {"name": "Old One", "path": "old-1.svg"}],
                    "regions": {"ncsa": [{"rank": 1}]}
                },
                {
                    "name": "New Season",
                    "ranks": [{"name": "New Zero", "path": "new-0.svg"}, {"name": "New One", "path": "new-1.svg"}],
                    "regions": {"ncsa": [{"rank": 1}]}
                }
            ]
        }));

        let records = normalize_seasons(&seasons, BASE);
        assert_eq!(records[0].ncsa.rank.name, "Old One");
        assert_eq!(records[1].ncsa.rank.name, "New One");
        assert_eq!(records[1].ncsa.rank.image_url, format!("{BASE}/new-1.svg"));
    }

    #[test]
    fn test_absent_seasons_yield_empty_list() {
        assert!(normalize_seasons(&payload(json!({})), BASE).is_empty());
        assert!(normalize_seasons(&payload(json!({"seasons": null})), BASE).is_empty());
    }

    #[test]
    fn test_null_seasons_are_skipped() {
        let records = normalize_seasons(
            &payload(json!({"seasons": [null, {"name": "Burnt Horizon"}, null]})),
            BASE,
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].season_name.as_deref(), Some("Burnt Horizon"));
    }

    #[test]
    fn test_missing_region_records_resolve_to_unknown() {
        let records = normalize_seasons(
            &payload(json!({"seasons": [{"name": "Phantom Sight", "regions": {"emea": []}}]})),
            BASE,
        );
        let emea = &records[0].emea;
        assert_eq!(emea.mmr, None);
        assert_eq!(emea.rank, unknown_rank_badge(BASE));
        assert_eq!(emea.max_rank, unknown_rank_badge(BASE));
        assert_eq!(records[0].apac.wins, None);
    }

    #[test]
    fn test_dates_are_parsed_leniently() {
        let records = normalize_seasons(
            &payload(json!({"seasons": [{
                "start_date": "2020-06-11T14:00:00Z",
                "end_date": "not yet",
                "regions": {"apac": [{"updated_at": "2020-07-01 10:30:00"}]}
            }]})),
            BASE,
        );

        assert_eq!(
            records[0].start_date,
            Some(Utc.with_ymd_and_hms(2020, 6, 11, 14, 0, 0).unwrap())
        );
        assert_eq!(records[0].end_date, None);
        assert_eq!(
            records[0].apac.updated_at,
            Some(Utc.with_ymd_and_hms(2020, 7, 1, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_fixture_season_maps_all_region_fields() {
        let seasons = payload(json!({
            "seasons": [UpstreamFixtures::season("Shadow Legacy", 5, 3)]
        }));
        let records = normalize_seasons(&seasons, BASE);
        let record = &records[0];

        assert_eq!(record.season_name.as_deref(), Some("Shadow Legacy"));
        assert_eq!(record.primary_color.as_deref(), Some("#d2005a"));
        for region in Region::TRACKED {
            let stats = record.region(region).unwrap();
            assert_eq!(stats.rank.name, UpstreamFixtures::rank_name(3));
            assert!(stats.mmr.is_some());
            assert!(stats.skill_standard_deviation.is_some());
            assert!(stats.updated_at.is_some());
        }
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        let seasons = payload(json!({
            "seasons": [UpstreamFixtures::season("Shadow Legacy", 5, 3)]
        }));
        assert_eq!(
            normalize_seasons(&seasons, BASE),
            normalize_seasons(&seasons, BASE)
        );
    }
}
