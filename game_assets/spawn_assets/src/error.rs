use std::fmt;

/// Problems found while parsing or validating a spawn schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnConfigError {
    Parse { message: String },
    /// A schedule needs at least one phase.
    NoPhases,
    /// The first phase must start at time 0.
    FirstPhaseStart { name: String, start_time: f32 },
    /// `end_time` must be greater than `start_time`.
    EmptyPhase { name: String },
    /// Time between two consecutive phases is not covered.
    Gap { after: String, before: String },
    /// Two consecutive phases cover the same time.
    Overlap { after: String, before: String },
    /// Only the last phase may be open-ended.
    OpenEndedBeforeLast { name: String },
    /// The last phase must be open-ended.
    ClosedFinalPhase { name: String },
    /// A phase boundary is NaN or infinite.
    NonFiniteTime { name: String },
    /// Wave interval must be positive and fit a timer duration.
    InvalidInterval { name: String, interval: f32 },
    InvalidDirections { name: String, min: u32, max: u32 },
    DuplicateEnemy { enemy_id: String },
    /// A phase roster names an enemy missing from the unlock table.
    UnlistedEnemy { name: String, enemy_id: String },
    Invalid(Vec<SpawnConfigError>),
    AlreadyInstalled,
}

impl fmt::Display for SpawnConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "failed to parse spawn schedule: {message}"),
            Self::NoPhases => f.write_str("spawn schedule has no phases"),
            Self::FirstPhaseStart { name, start_time } => write!(
                f,
                "first phase '{name}' starts at {start_time} instead of 0"
            ),
            Self::EmptyPhase { name } => write!(f, "phase '{name}' ends before it starts"),
            Self::Gap { after, before } => {
                write!(f, "gap between phases '{after}' and '{before}'")
            }
            Self::Overlap { after, before } => {
                write!(f, "phases '{after}' and '{before}' overlap")
            }
            Self::OpenEndedBeforeLast { name } => {
                write!(f, "phase '{name}' is open-ended but is not the last phase")
            }
            Self::ClosedFinalPhase { name } => {
                write!(f, "last phase '{name}' must not have an end time")
            }
            Self::NonFiniteTime { name } => {
                write!(f, "phase '{name}' has a non-finite start or end time")
            }
            Self::InvalidInterval { name, interval } => {
                write!(f, "phase '{name}' has invalid wave interval {interval}")
            }
            Self::InvalidDirections { name, min, max } => write!(
                f,
                "phase '{name}' has invalid spawn directions {min}..={max}"
            ),
            Self::DuplicateEnemy { enemy_id } => {
                write!(f, "enemy '{enemy_id}' is listed more than once in the unlock table")
            }
            Self::UnlistedEnemy { name, enemy_id } => write!(
                f,
                "phase '{name}' lists enemy '{enemy_id}' which has no unlock time"
            ),
            Self::Invalid(problems) => {
                write!(f, "spawn schedule has {} problem(s)", problems.len())?;
                for problem in problems {
                    write!(f, "; {problem}")?;
                }
                Ok(())
            }
            Self::AlreadyInstalled => f.write_str("spawn schedule is already installed"),
        }
    }
}

impl std::error::Error for SpawnConfigError {}

pub type SpawnConfigResult<T> = Result<T, SpawnConfigError>;
