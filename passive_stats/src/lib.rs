pub mod plugin;

pub use plugin::PassiveStatsPlugin;
