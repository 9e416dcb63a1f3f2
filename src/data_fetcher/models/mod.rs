pub mod lenient;
pub mod platform;
pub mod profile;
pub mod search;
pub mod seasonal;
pub mod stats;

pub use platform::{Platform, Region};
pub use profile::{
    AbilityUsage, GamemodeStats, GamemodeStatsSet, GeneralStats, OperatorImages, OperatorInfo,
    OperatorRecord, PlayerProfile, QueueStats, RankBadge, RegionalRankStats, SeasonRecord,
    StatsBundle,
};
pub use search::{ApiEnvelope, SearchCandidate, SearchSeasonalStats};
pub use seasonal::{RawRank, RawRegionRecord, RawSeason, RawSeasonRegions, SeasonalPayload};
pub use stats::{
    RawAbility, RawGamemodeStats, RawGamemodes, RawGeneralStats, RawOperator, RawOperatorImages,
    RawOperatorInfo, RawProgression, RawQueueStats, RawQueues, RawStatsEntry, StatsPayload,
    UpdateQueue,
};
