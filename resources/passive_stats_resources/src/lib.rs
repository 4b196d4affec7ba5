use {
    bevy::prelude::*,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Reflect)]
pub enum StatMode {
    #[default]
    Additive, // +1
    Percent,        // +10% (0.10)
    Multiplicative, // x2.0
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Reflect)]
pub struct StatBonus {
    pub value: f32,
    pub mode: StatMode,
}

impl StatBonus {
    pub fn new(value: f32, mode: StatMode) -> Self {
        Self { value, mode }
    }
}

/// Stat axes that player passives can scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum PassiveAxis {
    Damage,
    Cooldown,
    Speed,
    Duration,
    Area,
    Amount,
}

/// Aggregated bonuses for one axis.
#[derive(Debug, Clone, Serialize, Deserialize, Reflect)]
pub struct BonusStat {
    pub additive: f32,
    pub percent: f32,        // Sum of percentages (e.g., 0.1 + 0.2 = 0.3)
    pub multiplicative: f32, // Product of multipliers (starts at 1.0)
}

impl Default for BonusStat {
    fn default() -> Self {
        Self {
            additive: 0.0,
            percent: 0.0,
            multiplicative: 1.0,
        }
    }
}

impl BonusStat {
    pub fn add(&mut self, bonus: &StatBonus) {
        match bonus.mode {
            StatMode::Additive => self.additive += bonus.value,
            StatMode::Percent => self.percent += bonus.value,
            StatMode::Multiplicative => self.multiplicative *= bonus.value,
        }
    }

    pub fn remove(&mut self, bonus: &StatBonus) {
        match bonus.mode {
            StatMode::Additive => self.additive -= bonus.value,
            StatMode::Percent => self.percent -= bonus.value,
            StatMode::Multiplicative => {
                if bonus.value != 0.0 {
                    self.multiplicative /= bonus.value;
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.additive = 0.0;
        self.percent = 0.0;
        self.multiplicative = 1.0;
    }

    /// (Base + Additive) * (1 + Percent) * Multiplicative
    pub fn apply(&self, base: f32) -> f32 {
        (base + self.additive) * (1.0 + self.percent) * self.multiplicative
    }
}

/// Player-wide passive values handed to the weapon stat resolver.
///
/// `None` (and `Some(0.0)`) on any field means "no effect".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct PassiveStats {
    pub damage_multiplier: Option<f32>,
    /// Signed; -0.2 shortens cooldowns by 20%.
    pub cooldown_multiplier: Option<f32>,
    pub speed_multiplier: Option<f32>,
    /// Extra projectiles/drones/mines per attack.
    pub amount_bonus: Option<i32>,
    pub duration_multiplier: Option<f32>,
    pub area_multiplier: Option<f32>,
}

/// Resource aggregating the player's passive bonuses per axis.
#[derive(Resource, Default, Debug, Reflect)]
#[reflect(Resource)]
pub struct PassiveBonuses {
    bonuses: HashMap<PassiveAxis, BonusStat>,
}

impl PassiveBonuses {
    /// Adds a bonus to an axis.
    pub fn add(&mut self, axis: PassiveAxis, bonus: StatBonus) {
        self.bonuses.entry(axis).or_default().add(&bonus);
    }

    /// Removes a bonus from an axis.
    pub fn remove(&mut self, axis: PassiveAxis, bonus: StatBonus) {
        if let Some(stat) = self.bonuses.get_mut(&axis) {
            stat.remove(&bonus);
        }
    }

    pub fn get(&self, axis: PassiveAxis) -> Option<&BonusStat> {
        self.bonuses.get(&axis)
    }

    /// Folds the aggregated bonuses into the record the stat resolver reads.
    ///
    /// Multiplier axes start from 1.0, cooldown is reported as the signed
    /// deviation from 1.0, and amount starts from 0 and is rounded.
    pub fn passive_stats(&self) -> PassiveStats {
        let multiplier = |axis| self.get(axis).map(|stat| stat.apply(1.0));

        PassiveStats {
            damage_multiplier: multiplier(PassiveAxis::Damage),
            cooldown_multiplier: multiplier(PassiveAxis::Cooldown).map(|m| m - 1.0),
            speed_multiplier: multiplier(PassiveAxis::Speed),
            amount_bonus: self
                .get(PassiveAxis::Amount)
                .map(|stat| stat.apply(0.0).round() as i32),
            duration_multiplier: multiplier(PassiveAxis::Duration),
            area_multiplier: multiplier(PassiveAxis::Area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove() {
        let mut bonuses = PassiveBonuses::default();
        let bonus = StatBonus::new(2.0, StatMode::Additive);

        bonuses.add(PassiveAxis::Amount, bonus.clone());
        assert_eq!(bonuses.get(PassiveAxis::Amount).unwrap().additive, 2.0);

        bonuses.remove(PassiveAxis::Amount, bonus);
        assert_eq!(bonuses.get(PassiveAxis::Amount).unwrap().additive, 0.0);
    }

    #[test]
    fn test_accumulation() {
        let mut bonuses = PassiveBonuses::default();
        bonuses.add(PassiveAxis::Damage, StatBonus::new(0.1, StatMode::Percent));
        bonuses.add(PassiveAxis::Damage, StatBonus::new(0.2, StatMode::Percent));
        bonuses.add(PassiveAxis::Damage, StatBonus::new(2.0, StatMode::Multiplicative));

        let raw = bonuses.get(PassiveAxis::Damage).unwrap();
        assert!((raw.percent - 0.3).abs() < 1e-6);
        assert_eq!(raw.multiplicative, 2.0);
        assert_eq!(raw.additive, 0.0);
    }

    #[test]
    fn test_multiplicative_remove_ignores_zero() {
        let mut stat = BonusStat::default();
        stat.add(&StatBonus::new(0.0, StatMode::Multiplicative));
        stat.remove(&StatBonus::new(0.0, StatMode::Multiplicative));
        assert_eq!(stat.multiplicative, 0.0);
        stat.reset();
        assert_eq!(stat.multiplicative, 1.0);
    }

    #[test]
    fn test_empty_bonuses_have_no_effect() {
        assert_eq!(PassiveBonuses::default().passive_stats(), PassiveStats::default());
    }

    #[test]
    fn test_passive_stats_folding() {
        let mut bonuses = PassiveBonuses::default();
        bonuses.add(PassiveAxis::Damage, StatBonus::new(0.5, StatMode::Percent));
        bonuses.add(PassiveAxis::Cooldown, StatBonus::new(-0.25, StatMode::Percent));
        bonuses.add(PassiveAxis::Area, StatBonus::new(1.5, StatMode::Multiplicative));
        bonuses.add(PassiveAxis::Amount, StatBonus::new(1.0, StatMode::Additive));
        bonuses.add(PassiveAxis::Amount, StatBonus::new(1.0, StatMode::Additive));

        let stats = bonuses.passive_stats();
        assert_eq!(stats.damage_multiplier, Some(1.5));
        assert_eq!(stats.cooldown_multiplier, Some(-0.25));
        assert_eq!(stats.area_multiplier, Some(1.5));
        assert_eq!(stats.amount_bonus, Some(2));
        assert_eq!(stats.speed_multiplier, None);
        assert_eq!(stats.duration_multiplier, None);
    }
}
