//! Raw payload of the per-player seasonal endpoint.

use super::lenient;
use super::platform::Region;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SeasonalPayload {
    /// `null` entries are tolerated and skipped during normalization.
    pub seasons: Option<Vec<Option<RawSeason>>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawSeason {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub primary_color: Option<String>,
    /// This season's rank table. Region records index into it.
    pub ranks: Option<Vec<RawRank>>,
    pub regions: Option<RawSeasonRegions>,
}

impl RawSeason {
    /// The season's rank table, empty when upstream omitted it.
    pub fn rank_table(&self) -> &[RawRank] {
        self.ranks.as_deref().unwrap_or_default()
    }

    /// The record upstream reports for `region`: the first entry of that
    /// region's list.
    pub fn region_record(&self, region: Region) -> Option<&RawRegionRecord> {
        let regions = self.regions.as_ref()?;
        let records = match region {
            Region::Ncsa => regions.ncsa.as_ref(),
            Region::Emea => regions.emea.as_ref(),
            Region::Apac => regions.apac.as_ref(),
            Region::Invalid => None,
        }?;
        records.first()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawRank {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    /// Image file name relative to the rank artwork base URL.
    #[serde(deserialize_with = "lenient::opt_text")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawSeasonRegions {
    pub ncsa: Option<Vec<RawRegionRecord>>,
    pub emea: Option<Vec<RawRegionRecord>>,
    pub apac: Option<Vec<RawRegionRecord>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RawRegionRecord {
    #[serde(deserialize_with = "lenient::opt_int")]
    pub wins: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub losses: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub abandons: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub kills: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub deaths: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub prev_rank_mmr: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub mmr: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub next_rank_mmr: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub max_mmr: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub last_match_mmr_change: Option<f64>,
    /// Index into the owning season's rank table.
    #[serde(deserialize_with = "lenient::opt_int")]
    pub rank: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub max_rank: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_int")]
    pub champions_rank_position: Option<i64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub skill_mean: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub last_match_skill_mean_change: Option<f64>,
    // Older payloads carry the misspelled key.
    #[serde(
        alias = "skill_standard_deviatation",
        deserialize_with = "lenient::opt_num"
    )]
    pub skill_standard_deviation: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_num")]
    pub last_match_skill_standard_deviation_change: Option<f64>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_seasons() {
        let payload: SeasonalPayload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.seasons.is_none());
    }

    #[test]
    fn test_null_season_entries_parse() {
        let payload: SeasonalPayload =
            serde_json::from_value(json!({"seasons": [null, {"name": "Void Edge"}]})).unwrap();
        let seasons = payload.seasons.unwrap();
        assert_eq!(seasons.len(), 2);
        assert!(seasons[0].is_none());
        assert_eq!(
            seasons[1].as_ref().unwrap().name.as_deref(),
            Some("Void Edge")
        );
    }

    #[test]
    fn test_region_record_takes_first_entry() {
        let season: RawSeason = serde_json::from_value(json!({
            "regions": {
                "ncsa": [{"rank": 3}, {"rank": 9}],
                "emea": []
            }
        }))
        .unwrap();

        assert_eq!(season.region_record(Region::Ncsa).unwrap().rank, Some(3));
        assert!(season.region_record(Region::Emea).is_none());
        assert!(season.region_record(Region::Apac).is_none());
        assert!(season.region_record(Region::Invalid).is_none());
    }

    #[test]
    fn test_misspelled_deviation_key_is_accepted() {
        let record: RawRegionRecord =
            serde_json::from_value(json!({"skill_standard_deviatation": 7.5})).unwrap();
        assert_eq!(record.skill_standard_deviation, Some(7.5));

        let record: RawRegionRecord =
            serde_json::from_value(json!({"skill_standard_deviation": 6.25})).unwrap();
        assert_eq!(record.skill_standard_deviation, Some(6.25));
    }

    #[test]
    fn test_rank_table_defaults_to_empty() {
        let season = RawSeason::default();
        assert!(season.rank_table().is_empty());
    }
}
