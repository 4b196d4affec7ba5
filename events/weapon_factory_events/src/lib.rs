use bevy::prelude::*;

/// Request to give a weapon to an entity. The factory builds the instance.
#[derive(Event, Clone, Debug)]
pub struct SpawnWeaponRequest {
    /// Weapon type ID (e.g., "magic_bolt")
    pub weapon_id: String,
    /// Entity holding the weapon (usually the player)
    pub holder: Option<Entity>,
}

/// Request to raise a weapon instance by one level.
#[derive(Event, Clone, Debug)]
pub struct LevelUpWeaponRequest {
    pub weapon: Entity,
}

#[derive(Event, Clone, Debug)]
pub struct WeaponSpawned {
    pub weapon: Entity,
    pub weapon_id: String,
}

#[derive(Event, Clone, Debug)]
pub struct WeaponLeveledUp {
    pub weapon: Entity,
    pub weapon_id: String,
    pub level: u32,
}
