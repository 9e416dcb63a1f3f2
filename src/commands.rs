use crate::cli::Args;
use reqwest::Client;
use siege_profile::config::Config;
use siege_profile::data_fetcher::api::{
    create_http_client_with_timeout, fetch_profile, lookup_player_profile, resolve_identity,
};
use siege_profile::data_fetcher::models::PlayerProfile;
use siege_profile::display::format_profile_summary;
use siege_profile::error::AppError;
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Starts from the stored configuration, or defaults when none can be loaded,
/// applies the requested changes and saves the result. An update that fails
/// validation is rejected and the stored file is left as it was.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles a player lookup: `--ids-only`, `--id` or a name.
pub async fn handle_lookup_command(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    if args.ids_only {
        let name = args.name.as_deref().unwrap_or_default();
        for id in resolve_identity(&client, &config, name, args.platform).await? {
            println!("{id}");
        }
        return Ok(());
    }

    let profile = lookup(&client, &config, args).await?;
    println!("{}", render_profile(&profile, args.json)?);
    Ok(())
}

async fn lookup(client: &Client, config: &Config, args: &Args) -> Result<PlayerProfile, AppError> {
    match (&args.player_id, &args.name) {
        (Some(player_id), _) => {
            info!("Fetching profile by id {player_id}");
            fetch_profile(client, config, player_id).await
        }
        (None, Some(name)) => lookup_player_profile(client, config, name, args.platform).await,
        (None, None) => Err(AppError::invalid_input(
            "Provide a player NAME or --id (see --help)",
        )),
    }
}

/// Formats the profile as pretty JSON or as the text summary.
pub fn render_profile(profile: &PlayerProfile, json: bool) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string_pretty(profile)?)
    } else {
        Ok(format_profile_summary(profile))
    }
}
