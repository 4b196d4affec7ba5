//! Weapon type definitions and the frozen weapon registry.
//!
//! Definitions are compiled in (see [`WeaponRegistry::builtin`]) and may be
//! replaced once at startup by an authored `.ron` catalog. After installation
//! the registry is only reachable through a shared `'static` reference.

mod archetype;
mod catalog;
mod error;
mod registry;
mod upgrade;

pub use {archetype::*, error::*, registry::*, upgrade::*};
use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
};

pub struct WeaponAssetsPlugin;

impl Plugin for WeaponAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<WeaponArchetype>()
            .register_type::<ProjectilePattern>()
            .register_type::<BaseStats>()
            .register_type::<AffectedBy>()
            .register_type::<StatField>()
            .register_type::<UpgradeOp>();
    }
}

/// Weapon definition, one entry of the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponDefinition {
    /// Unique identifier for the weapon (e.g., "magic_bolt")
    pub id: String,
    /// Display name shown in UI
    pub display_name: String,
    /// Behavioural category; decides how `area` is interpreted
    pub archetype: WeaponArchetype,
    /// Stats at level 1
    pub base_stats: BaseStats,
    /// Which stat axes the player's passives scale
    pub affected_by: AffectedBy,
    pub max_level: u32,
    /// Applied in declaration order when the weapon reaches `level`
    #[serde(default)]
    pub upgrades: Vec<UpgradeStep>,
}

impl WeaponDefinition {
    /// Steps that fire when the weapon reaches exactly `level`, in declaration order.
    pub fn steps_for_level(&self, level: u32) -> impl Iterator<Item = &UpgradeStep> {
        self.upgrades.iter().filter(move |step| step.level == level)
    }
}

/// Numeric stat block shared by definitions and live weapon instances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct BaseStats {
    pub damage: f32,
    /// Seconds between attacks
    pub cooldown: f32,
    /// Projectile travel speed, or angular speed for orbiting weapons
    pub speed: f32,
    /// Seconds a spawned projectile/drone/mine stays alive
    pub duration: f32,
    /// Range for projectiles, radius for auras, orbits and explosions
    pub area: f32,
    /// Visual/hit size scale
    pub size: f32,
    /// Projectiles, drones or mines per attack
    pub amount: f32,
    pub pierce: f32,
    pub knockback: f32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            damage: 0.0,
            cooldown: 1.0,
            speed: 0.0,
            duration: 0.0,
            area: 0.0,
            size: 1.0,
            amount: 1.0,
            pierce: 0.0,
            knockback: 0.0,
        }
    }
}

/// Per-axis switches deciding whether player passives apply to a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct AffectedBy {
    pub damage: bool,
    pub area: bool,
    pub cooldown: bool,
    pub speed: bool,
    pub duration: bool,
    pub amount: bool,
}

impl AffectedBy {
    pub const ALL: Self = Self {
        damage: true,
        area: true,
        cooldown: true,
        speed: true,
        duration: true,
        amount: true,
    };
}
