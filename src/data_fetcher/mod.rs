pub mod api;
pub mod models;
pub mod processors;

pub use api::{fetch_player_profile, fetch_profile, lookup_player_profile, resolve_identity};
pub use models::{Platform, PlayerProfile, Region};
