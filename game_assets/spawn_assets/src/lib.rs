//! Time-phased spawn parameters and enemy unlock gating.
//!
//! A [`SpawnSchedule`] splits the session clock into [`SpawnPhase`]s, each
//! with its own wave cadence and curated roster, plus a global table of enemy
//! unlock times.

mod error;
mod schedule;

pub use {error::*, schedule::*};
use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
};

pub struct SpawnAssetsPlugin;

impl Plugin for SpawnAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<WaveParams>();
    }
}

/// Wave cadence for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct WaveParams {
    /// Seconds between waves
    pub interval: f32,
    /// Enemies per wave
    pub size: u32,
    pub min_directions: u32,
    pub max_directions: u32,
}

/// A contiguous `[start_time, end_time)` bracket of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnPhase {
    pub name: String,
    pub start_time: f32,
    /// `None` means the phase never ends.
    #[serde(default)]
    pub end_time: Option<f32>,
    pub wave: WaveParams,
    /// Curated roster for this phase
    pub enemy_types: Vec<String>,
}

impl SpawnPhase {
    pub fn contains(&self, game_time: f32) -> bool {
        game_time >= self.start_time && self.end_time.is_none_or(|end| game_time < end)
    }
}

/// Earliest session time at which an enemy type may appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyUnlock {
    pub enemy_id: String,
    pub unlock_time: f32,
}

impl EnemyUnlock {
    pub fn new(enemy_id: impl Into<String>, unlock_time: f32) -> Self {
        Self {
            enemy_id: enemy_id.into(),
            unlock_time,
        }
    }
}
