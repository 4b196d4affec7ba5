use {
    bevy::prelude::*,
    loading::LoadingPlugin,
    passive_stats::PassiveStatsPlugin,
    passive_stats_resources::PassiveBonuses,
    spawn_assets::SpawnAssetsPlugin,
    system_schedule::SystemSchedulePlugin,
    waves::WavesPlugin,
    weapon_assets::WeaponAssetsPlugin,
    weapon_components::{WeaponComponentsPlugin, WeaponInstance},
    weapon_factory::WeaponFactoryPlugin,
    weapon_factory_events::{SpawnWeaponRequest, WeaponLeveledUp, WeaponSpawned},
    weapon_stats::effective_stats_with_bonuses,
};

pub struct GameCorePlugin;

impl Plugin for GameCorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SystemSchedulePlugin,
            LoadingPlugin,
            WeaponAssetsPlugin,
            SpawnAssetsPlugin,
            WeaponComponentsPlugin,
            WeaponFactoryPlugin,
            PassiveStatsPlugin,
            WavesPlugin,
        ))
        .register_type::<Player>()
        .init_resource::<StartingWeapon>()
        // Tables must be installed before the first weapon is built
        .add_systems(Startup, spawn_player.after(loading::load_tuning_tables))
        .add_observer(log_weapon_spawned)
        .add_observer(log_weapon_leveled);
    }
}

/// Holder of the player's weapons.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct Player;

/// Weapon id the player starts the session with.
#[derive(Resource, Debug, Clone)]
pub struct StartingWeapon(pub String);

impl Default for StartingWeapon {
    fn default() -> Self {
        Self("magic_bolt".to_string())
    }
}

fn spawn_player(mut commands: Commands, starting: Res<StartingWeapon>) {
    let player = commands.spawn((Name::new("Player"), Player)).id();
    commands.trigger(SpawnWeaponRequest {
        weapon_id: starting.0.clone(),
        holder: Some(player),
    });
}

fn log_weapon_spawned(
    trigger: On<WeaponSpawned>,
    weapons: Query<&WeaponInstance>,
    bonuses: Res<PassiveBonuses>,
) {
    log_effective_stats(trigger.event().weapon, &weapons, &bonuses);
}

fn log_weapon_leveled(
    trigger: On<WeaponLeveledUp>,
    weapons: Query<&WeaponInstance>,
    bonuses: Res<PassiveBonuses>,
) {
    log_effective_stats(trigger.event().weapon, &weapons, &bonuses);
}

fn log_effective_stats(weapon: Entity, weapons: &Query<&WeaponInstance>, bonuses: &PassiveBonuses) {
    let Ok(instance) = weapons.get(weapon) else {
        return;
    };
    let effective = effective_stats_with_bonuses(instance, bonuses);
    debug!(
        weapon = instance.id(),
        level = instance.level(),
        damage = effective.stats.damage,
        projectiles = effective.projectile_count,
        attack_speed = effective.attack_speed,
        range = effective.range,
        "Effective weapon stats"
    );
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        passive_stats_events::AddPassiveBonus,
        passive_stats_resources::{PassiveAxis, StatMode},
        weapon_factory_events::LevelUpWeaponRequest,
    };

    fn core_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(GameCorePlugin)
            .insert_resource(loading::TuningPaths {
                weapons: "missing/weapons.ron".into(),
                spawn_schedule: "missing/spawn_schedule.ron".into(),
            });
        app.update();
        app
    }

    fn player_weapon(app: &mut App) -> Entity {
        let mut query = app
            .world_mut()
            .query_filtered::<(Entity, &ChildOf), With<WeaponInstance>>();
        let (weapon, parent) = query.single(app.world()).expect("one weapon");
        let parent = parent.parent();
        assert!(app.world().get::<Player>(parent).is_some());
        weapon
    }

    #[test]
    fn test_player_starts_with_weapon() {
        let mut app = core_app();
        let weapon = player_weapon(&mut app);

        let instance = app.world().get::<WeaponInstance>(weapon).unwrap();
        assert_eq!(instance.id(), "magic_bolt");
        assert_eq!(instance.level(), 1);
    }

    #[test]
    fn test_upgrades_and_passives_flow_into_effective_stats() {
        let mut app = core_app();
        let weapon = player_weapon(&mut app);

        app.world_mut().trigger(LevelUpWeaponRequest { weapon });
        app.world_mut().trigger(AddPassiveBonus {
            axis: PassiveAxis::Amount,
            value: 1.0,
            mode: StatMode::Additive,
        });
        app.update();

        let instance = app.world().get::<WeaponInstance>(weapon).unwrap();
        let bonuses = app.world().resource::<PassiveBonuses>();
        let effective = effective_stats_with_bonuses(instance, bonuses);

        // Base 1, +1 from level 2, +1 passive
        assert_eq!(instance.base_stats.amount, 2.0);
        assert_eq!(effective.projectile_count, 3);
    }
}
