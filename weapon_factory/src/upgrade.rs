use {
    bevy::prelude::*,
    std::fmt,
    weapon_assets::{UpgradeOp, UpgradeStep, WeaponDefinition},
    weapon_components::WeaponInstance,
};

#[derive(Debug, Clone, PartialEq)]
pub enum UpgradeError {
    /// The definition passed in is not the one the instance was built from.
    DefinitionMismatch { instance: String, definition: String },
    /// The weapon cannot level any further.
    AtMaxLevel { id: String, max_level: u32 },
    /// Requested level is above the weapon's cap.
    LevelOutOfRange { id: String, level: u32, max_level: u32 },
}

impl fmt::Display for UpgradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefinitionMismatch {
                instance,
                definition,
            } => write!(
                f,
                "weapon instance '{instance}' cannot be upgraded with definition '{definition}'"
            ),
            Self::AtMaxLevel { id, max_level } => {
                write!(f, "weapon '{id}' is already at max level {max_level}")
            }
            Self::LevelOutOfRange {
                id,
                level,
                max_level,
            } => write!(f, "weapon '{id}' cannot reach level {level} (max {max_level})"),
        }
    }
}

impl std::error::Error for UpgradeError {}

/// Applies one step to the instance's own base stats.
pub fn apply_upgrade(instance: &mut WeaponInstance, step: &UpgradeStep) {
    let field = step.property.get_mut(&mut instance.base_stats);
    match step.op {
        UpgradeOp::Set => *field = step.value,
        UpgradeOp::Add => *field += step.value,
    }
}

/// Raises the instance by one level. Returns the new level.
pub fn level_up(instance: &mut WeaponInstance, def: &WeaponDefinition) -> Result<u32, UpgradeError> {
    check_definition(instance, def)?;
    if instance.level() >= def.max_level {
        return Err(UpgradeError::AtMaxLevel {
            id: def.id.clone(),
            max_level: def.max_level,
        });
    }
    level_up_to(instance, def, instance.level() + 1)
}

/// Raises the instance to `target`, applying every step of each level passed
/// in declaration order. Targets at or below the current level change nothing.
pub fn level_up_to(
    instance: &mut WeaponInstance,
    def: &WeaponDefinition,
    target: u32,
) -> Result<u32, UpgradeError> {
    check_definition(instance, def)?;
    if target > def.max_level {
        return Err(UpgradeError::LevelOutOfRange {
            id: def.id.clone(),
            level: target,
            max_level: def.max_level,
        });
    }

    while instance.level() < target {
        let Some(level) = instance.advance_level() else {
            break;
        };
        for step in def.steps_for_level(level) {
            apply_upgrade(instance, step);
        }
        debug!(weapon = def.id.as_str(), level, "Weapon leveled up");
    }

    Ok(instance.level())
}

fn check_definition(instance: &WeaponInstance, def: &WeaponDefinition) -> Result<(), UpgradeError> {
    if instance.id() != def.id {
        return Err(UpgradeError::DefinitionMismatch {
            instance: instance.id().to_string(),
            definition: def.id.clone(),
        });
    }
    Ok(())
}
