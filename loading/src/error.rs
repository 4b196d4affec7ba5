use {spawn_assets::SpawnConfigError, std::fmt, std::path::PathBuf, weapon_assets::WeaponConfigError};

/// Why an authored tuning file was rejected.
#[derive(Debug)]
pub enum LoadError {
    /// The file exists but could not be read.
    Io { path: PathBuf, message: String },
    Weapons(WeaponConfigError),
    SpawnSchedule(SpawnConfigError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "could not read {}: {}", path.display(), message)
            }
            Self::Weapons(err) => write!(f, "{err}"),
            Self::SpawnSchedule(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<WeaponConfigError> for LoadError {
    fn from(err: WeaponConfigError) -> Self {
        Self::Weapons(err)
    }
}

impl From<SpawnConfigError> for LoadError {
    fn from(err: SpawnConfigError) -> Self {
        Self::SpawnSchedule(err)
    }
}
