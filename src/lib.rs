//! Rainbow Six Siege player identity resolution and profile aggregation
//!
//! This library resolves a player name on a platform to r6stats player ids and
//! assembles a player's lifetime stats, operators, seasonal ranks and region
//! into one [`PlayerProfile`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use siege_profile::config::Config;
//! use siege_profile::data_fetcher::api::{
//!     create_http_client_with_timeout, fetch_profile, resolve_identity,
//! };
//! use siege_profile::data_fetcher::models::Platform;
//! use siege_profile::display::format_profile_summary;
//! use siege_profile::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let ids = resolve_identity(&client, &config, "Ghost", Platform::Pc).await?;
//!     if let Some(id) = ids.first() {
//!         let profile = fetch_profile(&client, &config, id).await?;
//!         println!("{}", format_profile_summary(&profile));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{fetch_player_profile, fetch_profile, resolve_identity};
pub use data_fetcher::models::{Platform, PlayerProfile, Region};
pub use display::format_profile_summary;
pub use error::{AppError, ErrorCategory};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
