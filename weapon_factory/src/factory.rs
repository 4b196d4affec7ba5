use {
    weapon_assets::{WeaponDefinition, WeaponRegistry, weapon_registry},
    weapon_components::WeaponInstance,
};

/// Builds a fresh level-1 instance of `type_id`.
///
/// Returns `None` when the registry has no such weapon (the registry logs the
/// miss); the caller should simply not hand out the weapon.
pub fn create_weapon(registry: &WeaponRegistry, type_id: &str) -> Option<WeaponInstance> {
    registry.get(type_id).map(instantiate)
}

/// [`create_weapon`] against the process-wide registry.
pub fn spawn_weapon(type_id: &str) -> Option<WeaponInstance> {
    create_weapon(weapon_registry(), type_id)
}

/// `BaseStats` is `Copy`, so the instance owns an independent stat block.
pub fn instantiate(def: &WeaponDefinition) -> WeaponInstance {
    WeaponInstance::new(
        def.id.clone(),
        def.display_name.clone(),
        def.archetype,
        def.affected_by,
        def.base_stats,
        def.max_level,
    )
}
