use {
    crate::*,
    bevy::{prelude::*, time::TimeUpdateStrategy},
    rand::{SeedableRng, rngs::StdRng},
    spawn_assets::{EnemyUnlock, SpawnPhase, SpawnSchedule, WaveParams},
    std::time::Duration,
    system_schedule::SystemSchedulePlugin,
    wave_events::SpawnWave,
};

const STEP: f32 = 0.25;

#[derive(Resource, Default)]
struct WaveLog(Vec<SpawnWave>);

fn wave_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins((SystemSchedulePlugin, WavesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(STEP)))
        .init_resource::<WaveLog>()
        .add_observer(|trigger: On<SpawnWave>, mut log: ResMut<WaveLog>| {
            log.0.push(trigger.event().clone());
        });
    // First frame only establishes the time baseline
    app.update();
    app.world_mut().resource_mut::<GameClock>().reset();
    app.insert_resource(WaveDirector::new(StdRng::seed_from_u64(7)));
    app
}

fn advance(app: &mut App, seconds: f32) {
    let frames = (seconds / STEP).round() as u32;
    for _ in 0..frames {
        app.update();
    }
}

fn single_phase(enemy_types: &[&str], unlocks: Vec<EnemyUnlock>) -> SpawnSchedule {
    SpawnSchedule::new(
        vec![SpawnPhase {
            name: "Only".to_string(),
            start_time: 0.0,
            end_time: None,
            wave: WaveParams {
                interval: 1.0,
                size: 4,
                min_directions: 1,
                max_directions: 3,
            },
            enemy_types: enemy_types.iter().map(|e| e.to_string()).collect(),
        }],
        unlocks,
    )
    .unwrap()
}

#[test]
fn test_game_clock_pause_and_reset() {
    let mut clock = GameClock::default();
    clock.advance(1.5);
    assert_eq!(clock.elapsed(), 1.5);

    clock.pause();
    clock.advance(10.0);
    assert!(clock.is_paused());
    assert_eq!(clock.elapsed(), 1.5);

    clock.resume();
    clock.advance(0.5);
    assert_eq!(clock.elapsed(), 2.0);

    clock.reset();
    assert_eq!(clock.elapsed(), 0.0);
}

#[test]
fn test_build_wave_uses_phase_params() {
    let schedule = SpawnSchedule::builtin();
    let mut rng = StdRng::seed_from_u64(1);

    let wave = build_wave(&schedule, 200.0, &mut rng).expect("mid game wave");
    assert_eq!(wave.phase, "Mid Game");
    assert_eq!(wave.size, 6);
    assert_eq!(wave.game_time, 200.0);
    assert_eq!(wave.enemy_ids, vec!["basic", "fast", "ranger"]);
    assert!((1..=2).contains(&wave.directions));
}

#[test]
fn test_build_wave_filters_locked_enemies() {
    let schedule = SpawnSchedule::builtin();
    let mut rng = StdRng::seed_from_u64(1);

    // Late Game lists tank and swarmer, only tank is unlocked at 400s
    let wave = build_wave(&schedule, 400.0, &mut rng).unwrap();
    assert_eq!(wave.enemy_ids, vec!["basic", "fast", "ranger", "tank"]);
}

#[test]
fn test_build_wave_directions_stay_in_range() {
    let schedule = SpawnSchedule::builtin();
    let mut rng = StdRng::seed_from_u64(42);

    let mut seen = [false; 5];
    for _ in 0..200 {
        let wave = build_wave(&schedule, 500.0, &mut rng).unwrap();
        assert!((2..=4).contains(&wave.directions));
        seen[wave.directions as usize] = true;
    }
    assert_eq!(seen, [false, false, true, true, true]);
}

#[test]
fn test_build_wave_skips_empty_roster() {
    let schedule = single_phase(&["brute"], vec![EnemyUnlock::new("brute", 30.0)]);
    let mut rng = StdRng::seed_from_u64(3);

    assert!(build_wave(&schedule, 10.0, &mut rng).is_none());
    assert!(build_wave(&schedule, 30.0, &mut rng).is_some());
}

#[test]
fn test_director_fires_on_interval() {
    let mut app = wave_app();

    advance(&mut app, 2.75);
    assert!(app.world().resource::<WaveLog>().0.is_empty());

    // Early Game fires every 3 seconds
    advance(&mut app, 0.25);
    let log = &app.world().resource::<WaveLog>().0;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].phase, "Early Game");
    assert_eq!(log[0].game_time, 3.0);
    assert_eq!(log[0].size, 3);
    assert_eq!(log[0].directions, 1);
    // fast is listed but unlocks at 60s
    assert_eq!(log[0].enemy_ids, vec!["basic"]);

    advance(&mut app, 3.0);
    assert_eq!(app.world().resource::<WaveLog>().0.len(), 2);
    assert_eq!(app.world().resource::<WaveDirector>().waves_fired(), 2);
    assert_eq!(app.world().resource::<GameClock>().elapsed(), 6.0);
}

#[test]
fn test_paused_clock_stops_waves() {
    let mut app = wave_app();
    app.world_mut().resource_mut::<GameClock>().pause();

    advance(&mut app, 10.0);
    assert!(app.world().resource::<WaveLog>().0.is_empty());
    assert_eq!(app.world().resource::<GameClock>().elapsed(), 0.0);

    app.world_mut().resource_mut::<GameClock>().resume();
    advance(&mut app, 3.0);
    assert_eq!(app.world().resource::<WaveLog>().0.len(), 1);
}
