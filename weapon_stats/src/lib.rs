//! Combat-ready weapon stats.
//!
//! [`effective_stats`] combines a weapon instance's current base stats with
//! the player's passives. It is pure and cheap enough to call every tick for
//! every held weapon; results are never cached.

pub mod pipeline;

use {
    passive_stats_resources::{PassiveBonuses, PassiveStats},
    weapon_assets::BaseStats,
    weapon_components::WeaponInstance,
};

/// Final stats for one weapon at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveStats {
    /// Base stats after passives
    pub stats: BaseStats,
    /// Same as `stats.speed`
    pub projectile_speed: f32,
    /// `floor(stats.amount)`, never negative
    pub projectile_count: u32,
    /// Same as `stats.area`
    pub range: f32,
    /// Attacks per second
    pub attack_speed: f32,
}

/// Resolves the stats a weapon fights with right now.
pub fn effective_stats(instance: &WeaponInstance, passives: &PassiveStats) -> EffectiveStats {
    let mut stats = instance.base_stats;
    pipeline::apply_passives(
        &mut stats,
        instance.archetype(),
        instance.affected_by(),
        passives,
    );

    EffectiveStats {
        stats,
        projectile_speed: stats.speed,
        projectile_count: pipeline::projectile_count(stats.amount),
        range: stats.area,
        attack_speed: pipeline::attack_speed(stats.cooldown),
    }
}

/// [`effective_stats`] straight from the aggregated bonus resource.
pub fn effective_stats_with_bonuses(
    instance: &WeaponInstance,
    bonuses: &PassiveBonuses,
) -> EffectiveStats {
    effective_stats(instance, &bonuses.passive_stats())
}
