use {
    bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*},
    game_core::GameCorePlugin,
    std::time::Duration,
};

const LOG_FILTER: &str = "error,loading=trace,\
    weapon_assets=warn,\
    spawn_assets=warn,\
    waves=info,\
    weapon_factory=debug,\
    passive_stats=debug,\
    game_core=debug";

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin {
            filter: LOG_FILTER.into(),
            level: bevy::log::Level::TRACE,
            ..Default::default()
        })
        .add_plugins(GameCorePlugin)
        .run();
}
