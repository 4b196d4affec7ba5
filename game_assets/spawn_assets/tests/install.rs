use spawn_assets::*;

fn single_phase(name: &str, interval: f32) -> SpawnSchedule {
    SpawnSchedule::new(
        vec![SpawnPhase {
            name: name.to_string(),
            start_time: 0.0,
            end_time: None,
            wave: WaveParams {
                interval,
                size: 5,
                min_directions: 1,
                max_directions: 1,
            },
            enemy_types: vec!["basic".to_string()],
        }],
        vec![EnemyUnlock::new("basic", 0.0)],
    )
    .expect("one phase")
}

// One test per file: the installed schedule lives for the whole process.
#[test]
fn schedule_installs_once() {
    assert!(matches!(
        install_spawn_schedule(single_phase("broken", f32::INFINITY)),
        Err(SpawnConfigError::Invalid(_))
    ));

    install_spawn_schedule(single_phase("first", 2.0)).expect("first install should succeed");
    assert_eq!(
        install_spawn_schedule(single_phase("second", 1.0)),
        Err(SpawnConfigError::AlreadyInstalled)
    );
    assert_eq!(
        install_spawn_schedule(SpawnSchedule::builtin()),
        Err(SpawnConfigError::AlreadyInstalled)
    );

    let schedule = spawn_schedule();
    assert_eq!(schedule.phases().len(), 1);
    assert_eq!(schedule.current_phase(500.0).name, "first");
    assert_eq!(schedule.wave_params(0.0).interval, 2.0);
}
