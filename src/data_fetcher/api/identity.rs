//! Player name + platform → upstream ids.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::fetch;
use super::urls::build_search_url;
use crate::config::Config;
use crate::data_fetcher::models::{ApiEnvelope, Platform, SearchCandidate};
use crate::error::{AppError, PLAYER_ID_NOT_FOUND_MESSAGE};

/// Resolves every upstream id matching `name` on `platform`, in upstream order.
///
/// A well-formed response with an empty match list resolves to `Ok(vec![])`.
/// A response without a `data` list (absent, `null`, or another type)
/// resolves to a not-found error.
#[instrument(skip(client, config))]
pub async fn resolve_identity(
    client: &Client,
    config: &Config,
    name: &str,
    platform: Platform,
) -> Result<Vec<String>, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Player name cannot be empty"));
    }

    let candidates = search_candidates(client, config, name, platform.as_str())
        .await?
        .ok_or_else(|| AppError::player_not_found(PLAYER_ID_NOT_FOUND_MESSAGE))?;

    let ids: Vec<String> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(index, candidate)| match candidate.ubisoft_id {
            Some(id) if !id.trim().is_empty() => Some(id),
            _ => {
                warn!("Skipping search candidate {index} for '{name}' without an id");
                None
            }
        })
        .collect();

    info!("Resolved {} id(s) for '{}' on {}", ids.len(), name, platform);
    Ok(ids)
}

/// Runs one search query and returns its candidate list.
///
/// `Ok(None)` means upstream answered without a usable `data` list. Transport
/// and status failures are returned unchanged; an empty body or a body of
/// the wrong shape counts as no usable list.
#[instrument(skip(client, config))]
pub(super) async fn search_candidates(
    client: &Client,
    config: &Config,
    name: &str,
    platform: &str,
) -> Result<Option<Vec<SearchCandidate>>, AppError> {
    let url = build_search_url(&config.api_domain, name, platform)?;

    let envelope = match fetch::<ApiEnvelope<Value>>(client, &url).await {
        Ok(envelope) => envelope,
        Err(AppError::ApiNoData { .. } | AppError::ApiUnexpectedStructure { .. }) => {
            debug!("Search response for '{name}' carried no usable payload");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    Ok(candidate_list(envelope.data))
}

fn candidate_list(data: Option<Value>) -> Option<Vec<SearchCandidate>> {
    let Some(Value::Array(entries)) = data else {
        return None;
    };

    let candidates = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                warn!("Ignoring unreadable search candidate {index}: {e}");
                None
            }
        })
        .collect();

    Some(candidates)
}
