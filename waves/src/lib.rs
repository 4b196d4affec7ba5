//! Session clock and the wave director that turns the spawn schedule into
//! [`SpawnWave`](wave_events::SpawnWave) events.

mod director;

#[cfg(test)]
mod tests;

pub use director::*;
use {
    bevy::prelude::*,
    rand::{SeedableRng, rngs::StdRng},
    spawn_assets::spawn_schedule,
    std::time::Duration,
    system_schedule::GameSchedule,
};

pub struct WavesPlugin;

impl Plugin for WavesPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GameClock>()
            .init_resource::<GameClock>()
            .init_resource::<WaveDirector>()
            .add_systems(Update, advance_game_clock.in_set(GameSchedule::FrameStart))
            .add_systems(Update, run_wave_director.in_set(GameSchedule::PerformAction));
    }
}

/// Seconds since the session started. Drives every schedule lookup.
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct GameClock {
    elapsed: f32,
    paused: bool,
}

impl GameClock {
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, seconds: f32) {
        if !self.paused {
            self.elapsed += seconds;
        }
    }
}

/// Fires a wave every `interval` seconds of the current phase.
#[derive(Resource)]
pub struct WaveDirector {
    timer: Timer,
    rng: StdRng,
    waves_fired: u32,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl WaveDirector {
    /// The timer takes the active phase's interval on the first run.
    pub fn new(rng: StdRng) -> Self {
        Self {
            timer: Timer::new(Duration::ZERO, TimerMode::Repeating),
            rng,
            waves_fired: 0,
        }
    }

    pub fn waves_fired(&self) -> u32 {
        self.waves_fired
    }
}

fn advance_game_clock(time: Res<Time>, mut clock: ResMut<GameClock>) {
    clock.advance(time.delta_secs());
}

fn run_wave_director(
    time: Res<Time>,
    clock: Res<GameClock>,
    mut director: ResMut<WaveDirector>,
    mut commands: Commands,
) {
    if clock.is_paused() {
        return;
    }

    let schedule = spawn_schedule();
    let game_time = clock.elapsed();
    let director = &mut *director;

    // Phase changes shorten or stretch the running timer
    let interval = schedule.wave_params(game_time).interval;
    let Ok(interval) = Duration::try_from_secs_f32(interval) else {
        warn!("Wave interval {} cannot drive a timer; no waves", interval);
        return;
    };
    if director.timer.duration() != interval {
        director.timer.set_duration(interval);
    }

    director.timer.tick(time.delta());
    for _ in 0..director.timer.times_finished_this_tick() {
        let Some(wave) = build_wave(schedule, game_time, &mut director.rng) else {
            continue;
        };
        director.waves_fired += 1;
        info!(
            phase = wave.phase.as_str(),
            size = wave.size,
            directions = wave.directions,
            "Wave {} at {:.1}s",
            director.waves_fired,
            game_time
        );
        commands.trigger(wave);
    }
}
