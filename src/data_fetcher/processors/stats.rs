//! Stats payload → [`StatsBundle`].
//!
//! Each bucket is mapped from an `Option` of its raw object. A missing
//! object, at any nesting level, produces a bucket whose fields are all `None`.

use crate::data_fetcher::models::{
    GamemodeStats, GamemodeStatsSet, GeneralStats, QueueStats, RawGamemodeStats, RawGamemodes,
    RawGeneralStats, RawQueueStats, StatsBundle, StatsPayload,
};

/// Builds the stats bundle from the first stats entry of the payload.
pub fn normalize_stats(payload: &StatsPayload) -> StatsBundle {
    let entry = payload.primary_stats();
    let queues = entry.and_then(|e| e.queue.as_ref());
    let gamemodes = entry.and_then(|e| e.gamemode.as_ref());

    StatsBundle {
        general_stats: normalize_general(entry.and_then(|e| e.general.as_ref())),
        casual_stats: normalize_queue(queues.and_then(|q| q.casual.as_ref())),
        ranked_stats: normalize_queue(queues.and_then(|q| q.ranked.as_ref())),
        other_stats: normalize_queue(queues.and_then(|q| q.other.as_ref())),
        gamemode_stats: normalize_gamemodes(gamemodes),
    }
}

pub fn normalize_general(raw: Option<&RawGeneralStats>) -> GeneralStats {
    let Some(raw) = raw else {
        return GeneralStats::default();
    };

    GeneralStats {
        assists: raw.assists,
        barricades_deployed: raw.barricades_deployed,
        blind_kills: raw.blind_kills,
        bullets_fired: raw.bullets_fired,
        bullets_hit: raw.bullets_hit,
        dbnos: raw.dbnos,
        deaths: raw.deaths,
        distance_travelled: raw.distance_travelled,
        draws: raw.draws,
        gadgets_destroyed: raw.gadgets_destroyed,
        games_played: raw.games_played,
        headshots: raw.headshots,
        kd: raw.kd,
        kills: raw.kills,
        losses: raw.losses,
        melee_kills: raw.melee_kills,
        penetration_kills: raw.penetration_kills,
        playtime: raw.playtime,
        rappel_breaches: raw.rappel_breaches,
        reinforcements_deployed: raw.reinforcements_deployed,
        revives: raw.revives,
        suicides: raw.suicides,
        wins: raw.wins,
        wl: raw.wl,
    }
}

pub fn normalize_queue(raw: Option<&RawQueueStats>) -> QueueStats {
    let Some(raw) = raw else {
        return QueueStats::default();
    };

    QueueStats {
        deaths: raw.deaths,
        draws: raw.draws,
        games_played: raw.games_played,
        kd: raw.kd,
        kills: raw.kills,
        losses: raw.losses,
        playtime: raw.playtime,
        wins: raw.wins,
        wl: raw.wl,
    }
}

fn normalize_gamemodes(raw: Option<&RawGamemodes>) -> GamemodeStatsSet {
    GamemodeStatsSet {
        bomb: normalize_gamemode(raw.and_then(|g| g.bomb.as_ref())),
        secure_area: normalize_gamemode(raw.and_then(|g| g.secure_area.as_ref())),
        hostage: normalize_gamemode(raw.and_then(|g| g.hostage.as_ref())),
    }
}

pub fn normalize_gamemode(raw: Option<&RawGamemodeStats>) -> GamemodeStats {
    let Some(raw) = raw else {
        return GamemodeStats::default();
    };

    GamemodeStats {
        best_score: raw.best_score,
        games_played: raw.games_played,
        losses: raw.losses,
        playtime: raw.playtime,
        wins: raw.wins,
        wl: raw.wl,
        kills_as_attacker_in_objective: raw.kills_as_attacker_in_objective,
        kills_as_defender_in_objective: raw.kills_as_defender_in_objective,
        times_objective_secured: raw.times_objective_secured,
        extractions_denied: raw.extractions_denied,
    }
}
