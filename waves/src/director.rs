use {
    bevy::prelude::*,
    rand::Rng,
    spawn_assets::SpawnSchedule,
    wave_events::SpawnWave,
};

/// Builds the wave due at `game_time`, or `None` when nothing may spawn yet.
///
/// The roster is the current phase's curated list filtered by unlock time.
/// The direction count is drawn uniformly from the phase's inclusive range.
pub fn build_wave(schedule: &SpawnSchedule, game_time: f32, rng: &mut impl Rng) -> Option<SpawnWave> {
    let phase = schedule.current_phase(game_time);
    let enemy_ids: Vec<String> = schedule
        .spawnable_enemies(game_time)
        .into_iter()
        .map(str::to_string)
        .collect();

    if enemy_ids.is_empty() {
        debug!(
            phase = phase.name.as_str(),
            "No unlocked enemies in roster at {:.1}s; skipping wave", game_time
        );
        return None;
    }

    let wave = phase.wave;
    let low = wave.min_directions.min(wave.max_directions);
    let high = wave.min_directions.max(wave.max_directions);

    Some(SpawnWave {
        phase: phase.name.clone(),
        game_time,
        size: wave.size,
        directions: rng.random_range(low..=high),
        enemy_ids,
    })
}
