//! Player id → fully assembled [`PlayerProfile`].

use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::fetch;
use super::identity::search_candidates;
use super::urls::{build_seasonal_url, build_stats_url};
use crate::config::Config;
use crate::data_fetcher::models::{
    ApiEnvelope, PlayerProfile, Region, SeasonalPayload, StatsPayload,
};
use crate::data_fetcher::processors::{assemble_profile, region_from_candidates};
use crate::error::{AppError, USER_NOT_FOUND_MESSAGE};

/// Fetches and assembles the profile of `player_id`.
///
/// The stats and seasonal requests run concurrently; the region lookup is
/// chained after stats because it needs the username and platform. A stats
/// failure always wins. Seasonal and region failures are fatal when
/// `config.strict_enrichment` is set, otherwise they degrade to `null`
/// seasonal stats and an `invalid` region.
#[instrument(skip(client, config))]
pub async fn fetch_profile(
    client: &Client,
    config: &Config,
    player_id: &str,
) -> Result<PlayerProfile, AppError> {
    let player_id = player_id.trim();
    if player_id.is_empty() {
        return Err(AppError::invalid_input("Player id cannot be empty"));
    }

    let stats_then_region = async {
        let stats = fetch_stats(client, config, player_id).await?;
        let region = lookup_region(client, config, player_id, &stats).await;
        Ok::<_, AppError>((stats, region))
    };
    let seasonal = fetch_seasonal(client, config, player_id);

    let (primary, seasonal) = tokio::join!(stats_then_region, seasonal);
    let (stats, region) = primary?;

    let seasonal = match seasonal {
        Ok(payload) => Some(payload),
        Err(e) if !config.strict_enrichment => {
            warn!("Seasonal stats unavailable for {player_id}, continuing without them: {e}");
            None
        }
        Err(e) => return Err(e),
    };

    let region = match region {
        Ok(region) => region,
        Err(e) if !config.strict_enrichment => {
            warn!("Region lookup failed for {player_id}, marking region invalid: {e}");
            Region::Invalid
        }
        Err(e) => return Err(e),
    };

    let profile = assemble_profile(
        player_id,
        &stats,
        seasonal.as_ref(),
        region,
        &config.rank_image_base_url,
    );

    info!(
        "Assembled profile for {} ({} operators, {} seasons, region {})",
        player_id,
        profile.operators.len(),
        profile.seasonal_stats.as_ref().map_or(0, Vec::len),
        profile.region
    );
    Ok(profile)
}

async fn fetch_stats(
    client: &Client,
    config: &Config,
    player_id: &str,
) -> Result<StatsPayload, AppError> {
    let url = build_stats_url(&config.api_domain, player_id)?;

    let envelope = match fetch::<ApiEnvelope<StatsPayload>>(client, &url).await {
        Ok(envelope) => envelope,
        Err(e) if e.is_client_error() || matches!(e, AppError::ApiNoData { .. }) => {
            info!("No stats record for {player_id}: {e}");
            return Err(AppError::player_not_found(USER_NOT_FOUND_MESSAGE));
        }
        Err(e) => return Err(e),
    };

    match envelope.data {
        Some(stats) if stats != StatsPayload::default() => Ok(stats),
        _ => {
            info!("Stats response for {player_id} carried no data");
            Err(AppError::player_not_found(USER_NOT_FOUND_MESSAGE))
        }
    }
}

async fn fetch_seasonal(
    client: &Client,
    config: &Config,
    player_id: &str,
) -> Result<SeasonalPayload, AppError> {
    let url = build_seasonal_url(&config.api_domain, player_id)?;
    let envelope = fetch::<ApiEnvelope<SeasonalPayload>>(client, &url).await?;
    Ok(envelope.data.unwrap_or_default())
}

async fn lookup_region(
    client: &Client,
    config: &Config,
    player_id: &str,
    stats: &StatsPayload,
) -> Result<Region, AppError> {
    let (Some(username), Some(platform)) = (stats.username.as_deref(), stats.platform.as_deref())
    else {
        debug!("Stats for {player_id} lack username or platform, region unknown");
        return Ok(Region::Invalid);
    };

    let candidates = search_candidates(client, config, username, platform).await?;
    Ok(candidates
        .map(|candidates| region_from_candidates(&candidates, player_id))
        .unwrap_or(Region::Invalid))
}
