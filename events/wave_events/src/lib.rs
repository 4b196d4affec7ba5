use bevy::prelude::*;

/// Request for the spawning subsystem to place one wave of enemies.
#[derive(Event, Clone, Debug, PartialEq)]
pub struct SpawnWave {
    /// Name of the phase the wave was built from
    pub phase: String,
    /// Session time the wave fired at, in seconds
    pub game_time: f32,
    /// Enemies to place
    pub size: u32,
    /// Number of screen edges the wave arrives from
    pub directions: u32,
    /// Enemy types the spawner may pick from
    pub enemy_ids: Vec<String>,
}
