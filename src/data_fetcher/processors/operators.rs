use crate::data_fetcher::models::{
    AbilityUsage, OperatorImages, OperatorInfo, OperatorRecord, RawAbility, RawOperator,
    RawOperatorInfo,
};

/// Maps every upstream operator entry, keeping upstream order.
/// `null` entries are skipped.
pub fn normalize_operators(raw: Option<&[Option<RawOperator>]>) -> Vec<OperatorRecord> {
    raw.unwrap_or_default()
        .iter()
        .flatten()
        .map(normalize_operator)
        .collect()
}

pub fn normalize_operator(raw: &RawOperator) -> OperatorRecord {
    OperatorRecord {
        kills: raw.kills,
        deaths: raw.deaths,
        kd: raw.kd,
        wins: raw.wins,
        losses: raw.losses,
        wl: raw.wl,
        headshots: raw.headshots,
        dbnos: raw.dbnos,
        melee_kills: raw.melee_kills,
        experience: raw.experience,
        playtime: raw.playtime,
        abilities: raw
            .abilities
            .as_deref()
            .unwrap_or_default()
            .iter()
            .flatten()
            .map(normalize_ability)
            .collect(),
        operator: normalize_operator_info(raw.operator.as_ref()),
    }
}

fn normalize_ability(raw: &RawAbility) -> AbilityUsage {
    AbilityUsage {
        key: raw.key.clone(),
        title: raw.title.clone(),
        value: raw.value,
    }
}

fn normalize_operator_info(raw: Option<&RawOperatorInfo>) -> OperatorInfo {
    let Some(raw) = raw else {
        return OperatorInfo::default();
    };

    let images = raw
        .images
        .as_ref()
        .map(|images| OperatorImages {
            badge: images.badge.clone(),
            bust: images.bust.clone(),
            figure: images.figure.clone(),
        })
        .unwrap_or_default();

    OperatorInfo {
        name: raw.name.clone(),
        internal_name: raw.internal_name.clone(),
        role: raw.role.clone(),
        ctu: raw.ctu.clone(),
        images,
    }
}
