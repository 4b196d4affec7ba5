use {
    bevy::prelude::*,
    passive_stats_events::{AddPassiveBonus, RemovePassiveBonus},
    passive_stats_resources::{PassiveBonuses, StatBonus},
};

pub struct PassiveStatsPlugin;

impl Plugin for PassiveStatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PassiveBonuses>()
            .register_type::<PassiveBonuses>()
            .add_observer(on_add_passive_bonus)
            .add_observer(on_remove_passive_bonus);
    }
}

fn on_add_passive_bonus(trigger: On<AddPassiveBonus>, mut bonuses: ResMut<PassiveBonuses>) {
    let event = trigger.event();
    bonuses.add(event.axis, StatBonus::new(event.value, event.mode));
    debug!(
        "Added passive bonus: {:?} {} ({:?})",
        event.axis, event.value, event.mode
    );
}

fn on_remove_passive_bonus(trigger: On<RemovePassiveBonus>, mut bonuses: ResMut<PassiveBonuses>) {
    let event = trigger.event();
    bonuses.remove(event.axis, StatBonus::new(event.value, event.mode));
    debug!(
        "Removed passive bonus: {:?} {} ({:?})",
        event.axis, event.value, event.mode
    );
}
