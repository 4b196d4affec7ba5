use {
    crate::{EnemyUnlock, SpawnConfigError, SpawnConfigResult, SpawnPhase, WaveParams},
    serde::{Deserialize, Serialize},
    std::{sync::OnceLock, time::Duration},
};

static INSTALLED_SCHEDULE: OnceLock<SpawnSchedule> = OnceLock::new();

/// Returns the process-wide schedule, falling back to the compiled-in one if
/// nothing was installed at startup.
pub fn spawn_schedule() -> &'static SpawnSchedule {
    INSTALLED_SCHEDULE.get_or_init(SpawnSchedule::builtin)
}

/// Validates `schedule` and makes it the process-wide schedule.
pub fn install_spawn_schedule(schedule: SpawnSchedule) -> SpawnConfigResult<()> {
    schedule.validate()?;
    INSTALLED_SCHEDULE
        .set(schedule)
        .map_err(|_| SpawnConfigError::AlreadyInstalled)
}

/// Authored layout: `(phases: [...], enemy_unlocks: [...])`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnScheduleConfig {
    pub phases: Vec<SpawnPhase>,
    #[serde(default)]
    pub enemy_unlocks: Vec<EnemyUnlock>,
}

/// Ordered phases plus the enemy unlock table. Always holds at least one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpawnScheduleConfig", into = "SpawnScheduleConfig")]
pub struct SpawnSchedule {
    phases: Vec<SpawnPhase>,
    enemy_unlocks: Vec<EnemyUnlock>,
}

impl TryFrom<SpawnScheduleConfig> for SpawnSchedule {
    type Error = SpawnConfigError;

    fn try_from(config: SpawnScheduleConfig) -> Result<Self, Self::Error> {
        Self::new(config.phases, config.enemy_unlocks)
    }
}

impl From<SpawnSchedule> for SpawnScheduleConfig {
    fn from(schedule: SpawnSchedule) -> Self {
        Self {
            phases: schedule.phases,
            enemy_unlocks: schedule.enemy_unlocks,
        }
    }
}

impl SpawnSchedule {
    /// Only rejects an empty phase list; call [`validate`](Self::validate) for
    /// the full tiling checks.
    pub fn new(phases: Vec<SpawnPhase>, enemy_unlocks: Vec<EnemyUnlock>) -> SpawnConfigResult<Self> {
        if phases.is_empty() {
            return Err(SpawnConfigError::NoPhases);
        }
        Ok(Self {
            phases,
            enemy_unlocks,
        })
    }

    pub fn from_ron(text: &str) -> SpawnConfigResult<Self> {
        ron::from_str(text).map_err(|e| SpawnConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Compiled-in schedule.
    pub fn builtin() -> Self {
        let phase = |name: &str, start: f32, end: Option<f32>, wave: WaveParams, enemies: &[&str]| {
            SpawnPhase {
                name: name.to_string(),
                start_time: start,
                end_time: end,
                wave,
                enemy_types: enemies.iter().map(|e| e.to_string()).collect(),
            }
        };

        Self {
            phases: vec![
                phase(
                    "Early Game",
                    0.0,
                    Some(150.0),
                    WaveParams {
                        interval: 3.0,
                        size: 3,
                        min_directions: 1,
                        max_directions: 1,
                    },
                    &["basic", "fast"],
                ),
                phase(
                    "Mid Game",
                    150.0,
                    Some(360.0),
                    WaveParams {
                        interval: 2.0,
                        size: 6,
                        min_directions: 1,
                        max_directions: 2,
                    },
                    &["basic", "fast", "ranger"],
                ),
                phase(
                    "Late Game",
                    360.0,
                    None,
                    WaveParams {
                        interval: 1.2,
                        size: 10,
                        min_directions: 2,
                        max_directions: 4,
                    },
                    &["basic", "fast", "ranger", "tank", "swarmer"],
                ),
            ],
            enemy_unlocks: vec![
                EnemyUnlock::new("basic", 0.0),
                EnemyUnlock::new("fast", 60.0),
                EnemyUnlock::new("ranger", 120.0),
                EnemyUnlock::new("tank", 240.0),
                EnemyUnlock::new("swarmer", 420.0),
            ],
        }
    }

    pub fn phases(&self) -> &[SpawnPhase] {
        &self.phases
    }

    pub fn enemy_unlocks(&self) -> &[EnemyUnlock] {
        &self.enemy_unlocks
    }

    /// First phase whose bracket contains `game_time`, or the last phase when
    /// none does.
    pub fn current_phase(&self, game_time: f32) -> &SpawnPhase {
        self.phases
            .iter()
            .find(|phase| phase.contains(game_time))
            .unwrap_or_else(|| self.last_phase())
    }

    /// Copy of the current phase's wave parameters.
    pub fn wave_params(&self, game_time: f32) -> WaveParams {
        self.current_phase(game_time).wave
    }

    /// Every enemy unlocked at `game_time`, in unlock-table order. Ignores the
    /// phase roster.
    pub fn available_enemies(&self, game_time: f32) -> Vec<&str> {
        self.enemy_unlocks
            .iter()
            .filter(|unlock| unlock.unlock_time <= game_time)
            .map(|unlock| unlock.enemy_id.as_str())
            .collect()
    }

    /// The current phase roster restricted to unlocked enemies, in roster order.
    pub fn spawnable_enemies(&self, game_time: f32) -> Vec<&str> {
        self.current_phase(game_time)
            .enemy_types
            .iter()
            .filter(|enemy| self.is_unlocked(enemy, game_time))
            .map(String::as_str)
            .collect()
    }

    pub fn is_unlocked(&self, enemy_id: &str, game_time: f32) -> bool {
        self.enemy_unlocks
            .iter()
            .any(|unlock| unlock.enemy_id == enemy_id && unlock.unlock_time <= game_time)
    }

    fn last_phase(&self) -> &SpawnPhase {
        // never empty, see `new`
        &self.phases[self.phases.len() - 1]
    }

    /// Checks that phases tile `[0, +inf)` and that waves and unlocks are sane.
    pub fn validate(&self) -> SpawnConfigResult<()> {
        let mut problems = Vec::new();

        let first = &self.phases[0];
        if first.start_time != 0.0 {
            problems.push(SpawnConfigError::FirstPhaseStart {
                name: first.name.clone(),
                start_time: first.start_time,
            });
        }

        for phase in &self.phases {
            if !phase.start_time.is_finite() || phase.end_time.is_some_and(|end| !end.is_finite()) {
                problems.push(SpawnConfigError::NonFiniteTime {
                    name: phase.name.clone(),
                });
            }
            if phase.end_time.is_some_and(|end| end <= phase.start_time) {
                problems.push(SpawnConfigError::EmptyPhase {
                    name: phase.name.clone(),
                });
            }
            if !(phase.wave.interval > 0.0)
                || Duration::try_from_secs_f32(phase.wave.interval).is_err()
            {
                problems.push(SpawnConfigError::InvalidInterval {
                    name: phase.name.clone(),
                    interval: phase.wave.interval,
                });
            }
            let WaveParams {
                min_directions: min,
                max_directions: max,
                ..
            } = phase.wave;
            if min == 0 || min > max {
                problems.push(SpawnConfigError::InvalidDirections {
                    name: phase.name.clone(),
                    min,
                    max,
                });
            }
            for enemy_id in &phase.enemy_types {
                if !self.enemy_unlocks.iter().any(|u| &u.enemy_id == enemy_id) {
                    problems.push(SpawnConfigError::UnlistedEnemy {
                        name: phase.name.clone(),
                        enemy_id: enemy_id.clone(),
                    });
                }
            }
        }

        for pair in self.phases.windows(2) {
            let (after, before) = (&pair[0], &pair[1]);
            match after.end_time {
                None => problems.push(SpawnConfigError::OpenEndedBeforeLast {
                    name: after.name.clone(),
                }),
                Some(end) if end < before.start_time => problems.push(SpawnConfigError::Gap {
                    after: after.name.clone(),
                    before: before.name.clone(),
                }),
                Some(end) if end > before.start_time => {
                    problems.push(SpawnConfigError::Overlap {
                        after: after.name.clone(),
                        before: before.name.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        let last = self.last_phase();
        if last.end_time.is_some() {
            problems.push(SpawnConfigError::ClosedFinalPhase {
                name: last.name.clone(),
            });
        }

        for (i, unlock) in self.enemy_unlocks.iter().enumerate() {
            if self.enemy_unlocks[..i]
                .iter()
                .any(|earlier| earlier.enemy_id == unlock.enemy_id)
            {
                problems.push(SpawnConfigError::DuplicateEnemy {
                    enemy_id: unlock.enemy_id.clone(),
                });
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(SpawnConfigError::Invalid(problems))
        }
    }
}
