use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use siege_profile::data_fetcher::models::Platform;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only reads or edits the configuration.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Rainbow Six Siege player profile lookup
///
/// Resolves a player name on a platform to upstream ids and fetches the
/// player's lifetime stats, operators and seasonal ranks from r6stats.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Player name to look up. The first matching player is shown.
    pub name: Option<String>,

    /// Platform the player name belongs to.
    #[arg(short, long, value_enum, default_value_t = Platform::Pc, help_heading = "Lookup")]
    pub platform: Platform,

    /// Fetch the profile of this upstream id directly, skipping name resolution.
    #[arg(long = "id", conflicts_with = "name", help_heading = "Lookup")]
    pub player_id: Option<String>,

    /// Only print the ids matching NAME, one per line.
    #[arg(long = "ids-only", requires = "name", help_heading = "Lookup")]
    pub ids_only: bool,

    /// Print the profile as pretty JSON instead of a summary.
    #[arg(long, help_heading = "Output")]
    pub json: bool,

    /// Update API domain in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
