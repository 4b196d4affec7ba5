//! Core weapon stat pipeline.
//! Pure functions only.

use {
    passive_stats_resources::PassiveStats,
    weapon_assets::{AffectedBy, BaseStats, WeaponArchetype},
};

/// Lowest cooldown passives can push a weapon to, in seconds.
pub const MIN_COOLDOWN: f32 = 0.1;

/// Cooldown floor used when deriving attacks per second.
pub const MIN_ATTACK_INTERVAL: f32 = 0.01;

/// Scales `stats` by every passive the weapon is affected by.
pub fn apply_passives(
    stats: &mut BaseStats,
    archetype: WeaponArchetype,
    affected_by: AffectedBy,
    passives: &PassiveStats,
) {
    if let Some(m) = active(affected_by.damage, passives.damage_multiplier) {
        stats.damage *= m;
    }
    if let Some(m) = active(affected_by.cooldown, passives.cooldown_multiplier) {
        stats.cooldown = (stats.cooldown * (1.0 + m)).max(MIN_COOLDOWN);
    }
    if let Some(m) = active(affected_by.speed, passives.speed_multiplier) {
        stats.speed *= m;
    }
    if let Some(bonus) = passives.amount_bonus.filter(|b| affected_by.amount && *b != 0) {
        stats.amount += bonus as f32;
    }
    if let Some(m) = active(affected_by.duration, passives.duration_multiplier) {
        stats.duration *= m;
    }
    if let Some(m) = active(affected_by.area, passives.area_multiplier) {
        scale_area(stats, archetype, m);
    }
}

/// `area` means reach for projectiles, radius for everything else.
pub fn scale_area(stats: &mut BaseStats, archetype: WeaponArchetype, multiplier: f32) {
    match archetype {
        // Reach comes from lifetime and speed, only the body grows
        WeaponArchetype::Projectile(_) => stats.size *= multiplier,
        WeaponArchetype::Aura | WeaponArchetype::Deployable => stats.area *= multiplier,
        // Wider orbit and bigger drones
        WeaponArchetype::Orbit => {
            stats.area *= multiplier;
            stats.size *= multiplier;
        }
    }
}

/// Zero passives count as absent.
fn active(affected: bool, value: Option<f32>) -> Option<f32> {
    value.filter(|v| affected && *v != 0.0)
}

pub fn projectile_count(amount: f32) -> u32 {
    amount.floor().max(0.0) as u32
}

pub fn attack_speed(cooldown: f32) -> f32 {
    1.0 / cooldown.max(MIN_ATTACK_INTERVAL)
}
