pub mod http_client;
pub mod urls;
mod fetch_utils;
mod identity;
mod orchestrator;
mod profile;

pub use http_client::*;
pub use identity::resolve_identity;
pub use orchestrator::{fetch_player_profile, lookup_player_profile};
pub use profile::fetch_profile;
pub use urls::*;
