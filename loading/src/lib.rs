//! Startup loading of the authored tuning tables.
//!
//! Both tables are optional on disk. A missing file keeps the compiled-in
//! table; a file that fails to parse or validate is reported and ignored.

mod error;

pub use error::LoadError;
use {
    bevy::prelude::*,
    spawn_assets::{SpawnSchedule, install_spawn_schedule, spawn_schedule},
    std::{
        io::ErrorKind,
        path::{Path, PathBuf},
    },
    weapon_assets::{WeaponRegistry, install_weapon_registry, weapon_registry},
};

pub const WEAPONS_PATH: &str = "assets/weapons.ron";
pub const SPAWN_SCHEDULE_PATH: &str = "assets/spawn_schedule.ron";

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningPaths>()
            .init_resource::<LoadingStatus>()
            .add_systems(Startup, load_tuning_tables);
    }
}

/// Where the authored tables are looked up.
#[derive(Resource, Debug, Clone)]
pub struct TuningPaths {
    pub weapons: PathBuf,
    pub spawn_schedule: PathBuf,
}

impl Default for TuningPaths {
    fn default() -> Self {
        Self {
            weapons: PathBuf::from(WEAPONS_PATH),
            spawn_schedule: PathBuf::from(SPAWN_SCHEDULE_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TableSource {
    #[default]
    Builtin,
    Authored(PathBuf),
}

/// Which version of each table ended up installed.
#[derive(Resource, Debug, Default)]
pub struct LoadingStatus {
    pub weapons: TableSource,
    pub spawn_schedule: TableSource,
}

/// Reads and validates a weapon catalog. `Ok(None)` when the file does not exist.
pub fn read_weapon_catalog(path: &Path) -> Result<Option<WeaponRegistry>, LoadError> {
    let Some(text) = read_optional(path)? else {
        return Ok(None);
    };
    let registry = WeaponRegistry::from_ron(&text)?;
    registry.validate()?;
    Ok(Some(registry))
}

/// Reads and validates a spawn schedule. `Ok(None)` when the file does not exist.
pub fn read_spawn_schedule(path: &Path) -> Result<Option<SpawnSchedule>, LoadError> {
    let Some(text) = read_optional(path)? else {
        return Ok(None);
    };
    let schedule = SpawnSchedule::from_ron(&text)?;
    schedule.validate()?;
    Ok(Some(schedule))
}

fn read_optional(path: &Path) -> Result<Option<String>, LoadError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(LoadError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }),
    }
}

pub fn load_tuning_tables(paths: Res<TuningPaths>, mut status: ResMut<LoadingStatus>) {
    match read_weapon_catalog(&paths.weapons) {
        Ok(Some(registry)) => {
            let count = registry.len();
            match install_weapon_registry(registry) {
                Ok(()) => {
                    info!(weapons = count, "Loaded weapon catalog from {}", paths.weapons.display());
                    status.weapons = TableSource::Authored(paths.weapons.clone());
                }
                Err(err) => error!("{}", err),
            }
        }
        Ok(None) => info!("No {} found; using builtin weapons", paths.weapons.display()),
        Err(err) => error!("{}; using builtin weapons", err),
    }

    match read_spawn_schedule(&paths.spawn_schedule) {
        Ok(Some(schedule)) => {
            let phases = schedule.phases().len();
            match install_spawn_schedule(schedule) {
                Ok(()) => {
                    info!(
                        phases,
                        "Loaded spawn schedule from {}",
                        paths.spawn_schedule.display()
                    );
                    status.spawn_schedule = TableSource::Authored(paths.spawn_schedule.clone());
                }
                Err(err) => error!("{}", err),
            }
        }
        Ok(None) => info!(
            "No {} found; using builtin spawn schedule",
            paths.spawn_schedule.display()
        ),
        Err(err) => error!("{}; using builtin spawn schedule", err),
    }

    // Freezes the builtin tables if nothing was installed
    if let Err(err) = weapon_registry().validate() {
        error!("Active weapon registry is invalid: {}", err);
    }
    if let Err(err) = spawn_schedule().validate() {
        error!("Active spawn schedule is invalid: {}", err);
    }
}
