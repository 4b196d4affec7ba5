use {
    crate::{BaseStats, WeaponConfigError},
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Prefix of every authored upgrade path.
pub const BASE_STATS_PATH: &str = "baseStats";

/// A numeric field of [`BaseStats`] that upgrades may target.
///
/// Catalogs spell these as dotted paths (`"baseStats.damage"`); the path is
/// resolved once when the catalog is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
#[serde(try_from = "String", into = "String")]
pub enum StatField {
    Damage,
    Cooldown,
    Speed,
    Duration,
    Area,
    Size,
    Amount,
    Pierce,
    Knockback,
}

impl StatField {
    pub const ALL: [StatField; 9] = [
        StatField::Damage,
        StatField::Cooldown,
        StatField::Speed,
        StatField::Duration,
        StatField::Area,
        StatField::Size,
        StatField::Amount,
        StatField::Pierce,
        StatField::Knockback,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Damage => "damage",
            Self::Cooldown => "cooldown",
            Self::Speed => "speed",
            Self::Duration => "duration",
            Self::Area => "area",
            Self::Size => "size",
            Self::Amount => "amount",
            Self::Pierce => "pierce",
            Self::Knockback => "knockback",
        }
    }

    pub fn get(&self, stats: &BaseStats) -> f32 {
        match self {
            Self::Damage => stats.damage,
            Self::Cooldown => stats.cooldown,
            Self::Speed => stats.speed,
            Self::Duration => stats.duration,
            Self::Area => stats.area,
            Self::Size => stats.size,
            Self::Amount => stats.amount,
            Self::Pierce => stats.pierce,
            Self::Knockback => stats.knockback,
        }
    }

    pub fn get_mut<'a>(&self, stats: &'a mut BaseStats) -> &'a mut f32 {
        match self {
            Self::Damage => &mut stats.damage,
            Self::Cooldown => &mut stats.cooldown,
            Self::Speed => &mut stats.speed,
            Self::Duration => &mut stats.duration,
            Self::Area => &mut stats.area,
            Self::Size => &mut stats.size,
            Self::Amount => &mut stats.amount,
            Self::Pierce => &mut stats.pierce,
            Self::Knockback => &mut stats.knockback,
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", BASE_STATS_PATH, self.key())
    }
}

impl FromStr for StatField {
    type Err = WeaponConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || WeaponConfigError::UnknownStatPath {
            path: s.to_string(),
        };

        let Some((BASE_STATS_PATH, key)) = s.split_once('.') else {
            return Err(unknown());
        };

        Self::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(unknown)
    }
}

impl TryFrom<String> for StatField {
    type Error = WeaponConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatField> for String {
    fn from(value: StatField) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Reflect)]
pub enum UpgradeOp {
    /// Overwrite the field
    #[default]
    Set,
    /// Add to the current value
    Add,
}

/// One atomic stat change applied when a weapon reaches `level`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpgradeStep {
    pub level: u32,
    pub property: StatField,
    pub op: UpgradeOp,
    pub value: f32,
}

impl UpgradeStep {
    pub fn set(level: u32, property: StatField, value: f32) -> Self {
        Self {
            level,
            property,
            op: UpgradeOp::Set,
            value,
        }
    }

    pub fn add(level: u32, property: StatField, value: f32) -> Self {
        Self {
            level,
            property,
            op: UpgradeOp::Add,
            value,
        }
    }
}
