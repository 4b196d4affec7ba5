use {
    bevy::prelude::*,
    passive_stats_resources::{PassiveAxis, StatMode},
};

#[derive(Event, Debug, Clone)]
pub struct AddPassiveBonus {
    pub axis: PassiveAxis,
    pub value: f32,
    pub mode: StatMode,
}

#[derive(Event, Debug, Clone)]
pub struct RemovePassiveBonus {
    pub axis: PassiveAxis,
    pub value: f32,
    pub mode: StatMode,
}
