//! Name → profile orchestration on top of the resolver and aggregator.

use reqwest::Client;
use tracing::{info, instrument};

use super::http_client::create_http_client_with_timeout;
use super::identity::resolve_identity;
use super::profile::fetch_profile;
use crate::config::Config;
use crate::data_fetcher::models::{Platform, PlayerProfile};
use crate::error::{AppError, PLAYER_ID_NOT_FOUND_MESSAGE};

/// Resolves `name` on `platform` and fetches the profile of the first match.
///
/// An empty match list is reported as not found.
#[instrument(skip(client, config))]
pub async fn lookup_player_profile(
    client: &Client,
    config: &Config,
    name: &str,
    platform: Platform,
) -> Result<PlayerProfile, AppError> {
    let ids = resolve_identity(client, config, name, platform).await?;

    let Some(player_id) = ids.first() else {
        info!("No player named '{}' on {}", name.trim(), platform);
        return Err(AppError::player_not_found(PLAYER_ID_NOT_FOUND_MESSAGE));
    };

    if ids.len() > 1 {
        info!(
            "{} players match '{}', using the first ({})",
            ids.len(),
            name.trim(),
            player_id
        );
    }

    fetch_profile(client, config, player_id).await
}

/// Loads the configuration, builds a client and looks the player up.
///
/// # Example
/// ```rust,no_run
/// use siege_profile::data_fetcher::api::fetch_player_profile;
/// use siege_profile::data_fetcher::models::Platform;
///
/// #[tokio::main]
/// async fn main() -> Result<(), siege_profile::AppError> {
///     let profile = fetch_player_profile("Ghost", Platform::Pc).await?;
///     println!("{} is level {:?}", profile.id, profile.level);
///     Ok(())
/// }
/// ```
#[instrument]
pub async fn fetch_player_profile(
    name: &str,
    platform: Platform,
) -> Result<PlayerProfile, AppError> {
    let config = Config::load().await?;
    info!("Config loaded successfully");
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    lookup_player_profile(&client, &config, name, platform).await
}
