use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameSchedule {
    FrameStart,
    PerformAction,
}

/// Orders the [`GameSchedule`] sets within `Update`.
pub struct SystemSchedulePlugin;

impl Plugin for SystemSchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (GameSchedule::FrameStart, GameSchedule::PerformAction).chain(),
        );
    }
}
