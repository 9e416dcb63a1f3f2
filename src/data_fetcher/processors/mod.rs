pub mod operators;
pub mod profile;
pub mod seasonal;
pub mod stats;
pub mod time_parsing;

pub use operators::{normalize_operator, normalize_operators};
pub use profile::{assemble_profile, region_from_candidates};
pub use seasonal::{
    normalize_region, normalize_season, normalize_seasons, resolve_rank_badge, unknown_rank_badge,
};
pub use stats::{normalize_gamemode, normalize_general, normalize_queue, normalize_stats};
pub use time_parsing::{parse_optional_timestamp, parse_timestamp};
