use crate::data_fetcher::models::{
    PlayerProfile, Region, SearchCandidate, SeasonalPayload, StatsPayload,
};
use crate::data_fetcher::processors::operators::normalize_operators;
use crate::data_fetcher::processors::seasonal::normalize_seasons;
use crate::data_fetcher::processors::stats::normalize_stats;
use crate::data_fetcher::processors::time_parsing::parse_optional_timestamp;

/// Merges the fetched payloads into one profile.
///
/// `seasonal` is `None` only when the seasonal fetch was tolerated as failed;
/// a successful fetch without seasons produces an empty list.
pub fn assemble_profile(
    player_id: &str,
    stats: &StatsPayload,
    seasonal: Option<&SeasonalPayload>,
    region: Region,
    rank_image_base: &str,
) -> PlayerProfile {
    let progression = stats.progression.as_ref();

    PlayerProfile {
        id: player_id.to_string(),
        username: stats.username.clone(),
        platform: stats.platform.clone(),
        region,
        avatar_url: stats.avatar_url_256.clone(),
        level: progression.and_then(|p| p.level),
        total_xp: progression.and_then(|p| p.total_xp),
        lootbox_probability: progression.and_then(|p| p.lootbox_probability),
        last_updated: parse_optional_timestamp(stats.last_updated.as_deref()),
        next_update_estimate: parse_optional_timestamp(
            stats.queue.as_ref().and_then(|q| q.estimated.as_deref()),
        ),
        stats: normalize_stats(stats),
        operators: normalize_operators(stats.operators.as_deref()),
        seasonal_stats: seasonal.map(|payload| normalize_seasons(payload, rank_image_base)),
    }
}

/// Picks the player's region out of a search response.
///
/// The candidate whose id matches `player_id` wins; otherwise the first
/// candidate is used. Missing candidates or region strings give
/// [`Region::Invalid`].
pub fn region_from_candidates(candidates: &[SearchCandidate], player_id: &str) -> Region {
    candidates
        .iter()
        .find(|candidate| candidate.ubisoft_id.as_deref() == Some(player_id))
        .or_else(|| candidates.first())
        .and_then(SearchCandidate::region)
        .map(Region::from_upstream)
        .unwrap_or(Region::Invalid)
}
