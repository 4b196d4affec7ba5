use {
    bevy::prelude::*,
    weapon_assets::{AffectedBy, BaseStats, WeaponArchetype},
};

pub struct WeaponComponentsPlugin;

impl Plugin for WeaponComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<WeaponInstance>();
    }
}

/// A weapon held by the player.
///
/// Identity fields are copied from the registry entry at creation and never
/// change. `base_stats` is the instance's own copy and is rewritten in place
/// by upgrades; the registry entry is never touched.
///
/// # Usage
/// - **Creation**: `weapon_factory::create_weapon` builds it at level 1.
/// - **Progression**: `weapon_factory::level_up` applies the upgrade steps.
/// - **Combat**: callers read `weapon_stats::effective_stats` each tick and
///   own `cooldown_timer`.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct WeaponInstance {
    id: String,
    display_name: String,
    archetype: WeaponArchetype,
    affected_by: AffectedBy,
    pub base_stats: BaseStats,
    level: u32,
    max_level: u32,
    /// Seconds until the next attack; driven by the combat loop.
    pub cooldown_timer: f32,
}

impl WeaponInstance {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        archetype: WeaponArchetype,
        affected_by: AffectedBy,
        base_stats: BaseStats,
        max_level: u32,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            archetype,
            affected_by,
            base_stats,
            level: 1,
            max_level: max_level.max(1),
            cooldown_timer: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn archetype(&self) -> WeaponArchetype {
        self.archetype
    }

    pub fn affected_by(&self) -> AffectedBy {
        self.affected_by
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Moves the level forward by exactly one. Returns the new level, or
    /// `None` when the weapon is already at its cap.
    ///
    /// Stat changes for the new level are the caller's job
    /// (`weapon_factory::level_up`).
    pub fn advance_level(&mut self) -> Option<u32> {
        if self.level >= self.max_level {
            return None;
        }
        self.level += 1;
        Some(self.level)
    }
}
