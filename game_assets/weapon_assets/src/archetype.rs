use {
    crate::WeaponConfigError,
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// Behavioural category of a weapon.
///
/// Authored as a plain name in catalogs (`"projectile_spread"`, `"orbit"`, ...);
/// unknown names are rejected while the catalog is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
#[serde(try_from = "String", into = "String")]
pub enum WeaponArchetype {
    /// Travels away from the player. `area` is its reach and is never rescaled.
    Projectile(ProjectilePattern),
    /// Damage field centred on the player. `area` is the field radius.
    Aura,
    /// Drones circling the player. `area` is the orbit radius.
    Orbit,
    /// Placed on the ground (mines, traps). `area` is the blast radius.
    Deployable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Reflect)]
pub enum ProjectilePattern {
    /// Towards the nearest enemy
    #[default]
    Aimed,
    /// Along the player's facing
    Directional,
    /// Fan of projectiles
    Spread,
    /// Steers towards a target after launch
    Homing,
}

impl WeaponArchetype {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Projectile(ProjectilePattern::Aimed) => "projectile",
            Self::Projectile(ProjectilePattern::Directional) => "projectile_directional",
            Self::Projectile(ProjectilePattern::Spread) => "projectile_spread",
            Self::Projectile(ProjectilePattern::Homing) => "projectile_homing",
            Self::Aura => "aura",
            Self::Orbit => "orbit",
            Self::Deployable => "deployable",
        }
    }
}

impl fmt::Display for WeaponArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeaponArchetype {
    type Err = WeaponConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let archetype = match s {
            "projectile" => Self::Projectile(ProjectilePattern::Aimed),
            "projectile_directional" => Self::Projectile(ProjectilePattern::Directional),
            "projectile_spread" => Self::Projectile(ProjectilePattern::Spread),
            "projectile_homing" => Self::Projectile(ProjectilePattern::Homing),
            "aura" => Self::Aura,
            "orbit" => Self::Orbit,
            "deployable" => Self::Deployable,
            other => {
                return Err(WeaponConfigError::UnknownArchetype {
                    name: other.to_string(),
                });
            }
        };
        Ok(archetype)
    }
}

impl TryFrom<String> for WeaponArchetype {
    type Error = WeaponConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeaponArchetype> for String {
    fn from(value: WeaponArchetype) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for archetype in [
            WeaponArchetype::Projectile(ProjectilePattern::Aimed),
            WeaponArchetype::Projectile(ProjectilePattern::Directional),
            WeaponArchetype::Projectile(ProjectilePattern::Spread),
            WeaponArchetype::Projectile(ProjectilePattern::Homing),
            WeaponArchetype::Aura,
            WeaponArchetype::Orbit,
            WeaponArchetype::Deployable,
        ] {
            assert_eq!(archetype.name().parse::<WeaponArchetype>(), Ok(archetype));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "laser".parse::<WeaponArchetype>().unwrap_err();
        assert_eq!(
            err,
            WeaponConfigError::UnknownArchetype {
                name: "laser".to_string()
            }
        );
    }
}
