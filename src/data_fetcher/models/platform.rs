use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platforms the search endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Pc,
    Ps4,
    Xone,
}

impl Platform {
    /// Path segment used by the upstream API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Ps4 => "ps4",
            Platform::Xone => "xone",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pc" => Ok(Platform::Pc),
            "ps4" => Ok(Platform::Ps4),
            "xone" => Ok(Platform::Xone),
            other => Err(format!(
                "unsupported platform '{other}', expected one of: pc, ps4, xone"
            )),
        }
    }
}

/// Competitive region a player is placed in. `Invalid` is the sentinel for
/// a region the lookup could not determine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Ncsa,
    Emea,
    Apac,
    #[default]
    Invalid,
}

impl Region {
    /// The three regions tracked per season, in upstream order.
    pub const TRACKED: [Region; 3] = [Region::Ncsa, Region::Emea, Region::Apac];

    /// Maps an upstream region string; anything unrecognised is `Invalid`.
    pub fn from_upstream(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "ncsa" => Region::Ncsa,
            "emea" => Region::Emea,
            "apac" => Region::Apac,
            _ => Region::Invalid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Ncsa => "ncsa",
            Region::Emea => "emea",
            Region::Apac => "apac",
            Region::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("pc".parse::<Platform>().unwrap(), Platform::Pc);
        assert_eq!(" PS4 ".parse::<Platform>().unwrap(), Platform::Ps4);
        assert_eq!("xone".parse::<Platform>().unwrap(), Platform::Xone);
        assert!("switch".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_serialization() {
        assert_eq!(serde_json::to_string(&Platform::Xone).unwrap(), "\"xone\"");
        assert_eq!(Platform::Ps4.to_string(), "ps4");
    }

    #[test]
    fn test_region_from_upstream() {
        assert_eq!(Region::from_upstream("emea"), Region::Emea);
        assert_eq!(Region::from_upstream("NCSA"), Region::Ncsa);
        assert_eq!(Region::from_upstream("apac"), Region::Apac);
        assert_eq!(Region::from_upstream(""), Region::Invalid);
        assert_eq!(Region::from_upstream("mars"), Region::Invalid);
    }

    #[test]
    fn test_region_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Region::Invalid).unwrap(), "\"invalid\"");
        assert_eq!(serde_json::to_string(&Region::Emea).unwrap(), "\"emea\"");
    }
}
