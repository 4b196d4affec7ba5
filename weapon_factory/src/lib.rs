//! Builds weapon instances from the registry and levels them up.

mod factory;
mod upgrade;


pub use {factory::*, upgrade::*};
use {
    bevy::prelude::*,
    weapon_assets::weapon_registry,
    weapon_components::WeaponInstance,
    weapon_factory_events::{LevelUpWeaponRequest, SpawnWeaponRequest, WeaponLeveledUp, WeaponSpawned},
};

pub struct WeaponFactoryPlugin;

impl Plugin for WeaponFactoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(handle_spawn_weapon_request)
            .add_observer(handle_level_up_request);
    }
}

fn handle_spawn_weapon_request(trigger: On<SpawnWeaponRequest>, mut commands: Commands) {
    let event = trigger.event();

    // Unknown ids are already logged by the registry
    let Some(instance) = spawn_weapon(&event.weapon_id) else {
        return;
    };

    let weapon = commands
        .spawn((Name::new(instance.display_name().to_string()), instance))
        .id();

    match event.holder {
        Some(holder) => {
            commands.entity(holder).add_child(weapon);
            info!("Spawned weapon '{}' for {:?}", event.weapon_id, holder);
        }
        None => info!("Spawned weapon '{}'", event.weapon_id),
    }

    commands.trigger(WeaponSpawned {
        weapon,
        weapon_id: event.weapon_id.clone(),
    });
}

fn handle_level_up_request(
    trigger: On<LevelUpWeaponRequest>,
    mut commands: Commands,
    mut weapons: Query<&mut WeaponInstance>,
) {
    let event = trigger.event();

    let Ok(mut instance) = weapons.get_mut(event.weapon) else {
        warn!("Level up requested for {:?}, which holds no weapon", event.weapon);
        return;
    };

    let Some(def) = weapon_registry().get(instance.id()) else {
        return;
    };

    match level_up(&mut instance, def) {
        Ok(level) => {
            info!(weapon = def.id.as_str(), level, "Weapon upgraded");
            commands.trigger(WeaponLeveledUp {
                weapon: event.weapon,
                weapon_id: def.id.clone(),
                level,
            });
        }
        Err(err) => warn!("{}", err),
    }
}
