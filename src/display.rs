//! Plain-text rendering of a [`PlayerProfile`] for the terminal.

use std::cmp::Reverse;
use std::fmt::Display;

use crate::constants::display::{MISSING_VALUE, TOP_OPERATORS};
use crate::data_fetcher::models::{OperatorRecord, PlayerProfile, Region, SeasonRecord};

/// Renders the profile as a short multi-line summary.
///
/// Absent values are shown as `-`. Operators are listed by playtime, most
/// played first, and only the latest season is shown.
pub fn format_profile_summary(profile: &PlayerProfile) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} [{}]  region: {}  id: {}",
        text(profile.username.as_deref()),
        text(profile.platform.as_deref()),
        profile.region,
        profile.id
    ));
    lines.push(format!(
        "Level {}  XP {}  Alpha pack {}",
        value(profile.level),
        value(profile.total_xp),
        ratio(profile.lootbox_probability)
    ));

    let general = &profile.stats.general_stats;
    lines.push(format!(
        "General  K/D {}  W/L {}  Kills {}  Deaths {}  Played {}  Time {}",
        ratio(general.kd),
        ratio(general.wl),
        value(general.kills),
        value(general.deaths),
        value(general.games_played),
        playtime(general.playtime)
    ));

    let ranked = &profile.stats.ranked_stats;
    lines.push(format!(
        "Ranked   K/D {}  W/L {}  Wins {}  Losses {}  Played {}",
        ratio(ranked.kd),
        ratio(ranked.wl),
        value(ranked.wins),
        value(ranked.losses),
        value(ranked.games_played)
    ));

    let operators = top_operators(&profile.operators);
    if !operators.is_empty() {
        lines.push("Top operators".to_string());
        for operator in operators {
            lines.push(format!(
                "  {:<12} {:<9} K/D {}  Time {}",
                text(operator.operator.name.as_deref()),
                text(operator.operator.role.as_deref()),
                ratio(operator.kd),
                playtime(operator.playtime)
            ));
        }
    }

    match profile.seasonal_stats.as_deref() {
        None => lines.push(format!("Seasons  {MISSING_VALUE}")),
        Some(seasons) => {
            if let Some(season) = latest_season(seasons) {
                lines.push(format!("Season   {}", text(season.season_name.as_deref())));
                for region in Region::TRACKED {
                    if let Some(stats) = season.region(region) {
                        lines.push(format!(
                            "  {:<5} {:<14} MMR {}  W/L {}-{}",
                            region,
                            stats.rank.name,
                            mmr(stats.mmr),
                            value(stats.wins),
                            value(stats.losses)
                        ));
                    }
                }
            }
        }
    }

    lines.push(format!(
        "Updated  {}",
        profile
            .last_updated
            .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    ));

    lines.join("\n")
}

/// Most played operators first; ties keep upstream order.
fn top_operators(operators: &[OperatorRecord]) -> Vec<&OperatorRecord> {
    let mut sorted: Vec<&OperatorRecord> = operators.iter().collect();
    sorted.sort_by_key(|operator| Reverse(operator.playtime));
    sorted.truncate(TOP_OPERATORS);
    sorted
}

/// The season with the latest start date. Undated seasons lose to dated
/// ones and ties go to the earlier list entry.
fn latest_season(seasons: &[SeasonRecord]) -> Option<&SeasonRecord> {
    seasons
        .iter()
        .enumerate()
        .max_by_key(|(index, season)| (season.start_date, Reverse(*index)))
        .map(|(_, season)| season)
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_VALUE)
}

fn value<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string())
}

fn ratio(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| format!("{v:.2}"))
}

fn mmr(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| format!("{v:.0}"))
}

fn playtime(seconds: Option<i64>) -> String {
    seconds.map_or_else(
        || MISSING_VALUE.to_string(),
        |s| format!("{}h {}m", s / 3600, (s % 3600) / 60),
    )
}
