//! Weapon catalog configuration errors.
//!
//! These are authoring defects: they surface while a catalog is parsed or
//! validated at startup and never from the per-tick stat code.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WeaponConfigError {
    /// The catalog text could not be parsed.
    Parse { message: String },
    /// An archetype name outside the known set.
    UnknownArchetype { name: String },
    /// An upgrade path that does not name a numeric field of the base stats.
    UnknownStatPath { path: String },
    /// Two definitions share an id.
    DuplicateId { id: String },
    /// `max_level` must be at least 1.
    InvalidMaxLevel { id: String },
    /// Upgrade steps may only target levels `2..=max_level`.
    UpgradeLevelOutOfRange {
        id: String,
        level: u32,
        max_level: u32,
    },
    /// NaN or infinite upgrade value.
    NonFiniteUpgradeValue { id: String, level: u32 },
    /// Validation found one or more problems; each is listed.
    Invalid(Vec<WeaponConfigError>),
    /// The process-wide registry was already installed.
    AlreadyInstalled,
}

impl fmt::Display for WeaponConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "failed to parse weapon catalog: {message}"),
            Self::UnknownArchetype { name } => write!(f, "unknown weapon archetype '{name}'"),
            Self::UnknownStatPath { path } => {
                write!(f, "upgrade path '{path}' does not name a base stat")
            }
            Self::DuplicateId { id } => write!(f, "weapon id '{id}' is defined more than once"),
            Self::InvalidMaxLevel { id } => write!(f, "weapon '{id}' has max_level 0"),
            Self::UpgradeLevelOutOfRange {
                id,
                level,
                max_level,
            } => write!(
                f,
                "weapon '{id}' has an upgrade for level {level}, outside 2..={max_level}"
            ),
            Self::NonFiniteUpgradeValue { id, level } => {
                write!(f, "weapon '{id}' has a non-finite upgrade value at level {level}")
            }
            Self::Invalid(problems) => {
                write!(f, "weapon catalog has {} problem(s)", problems.len())?;
                for problem in problems {
                    write!(f, "; {problem}")?;
                }
                Ok(())
            }
            Self::AlreadyInstalled => f.write_str("weapon registry is already installed"),
        }
    }
}

impl std::error::Error for WeaponConfigError {}

pub type WeaponConfigResult<T> = Result<T, WeaponConfigError>;
