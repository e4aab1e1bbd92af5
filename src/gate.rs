use std::fmt::Display;

use tracing::debug;

use crate::{errors::ScoreError, report::MutationScore};

/// Drops smaller than this are treated as float noise.
pub const DEFAULT_TOLERANCE: f64 = 0.000001;

#[derive(Debug, Clone, Copy)]
pub struct ScoreGate {
    tolerance: f64,
}

impl Default for ScoreGate {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreComparison {
    pub previous: f64,
    pub current: f64,
}

impl Display for ScoreComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mutation score OK: previous={:.2}% current={:.2}%",
            self.previous, self.current
        )
    }
}

impl ScoreGate {
    pub fn new(tolerance: f64) -> Result<Self, ScoreError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ScoreError::InvalidArgument(format!(
                "Tolerance must be a non-negative number, got {}",
                tolerance
            )));
        }
        Ok(Self { tolerance })
    }

    /// Fails when `current` is lower than `previous` by more than the
    /// tolerance.
    pub fn compare(&self, previous: &str, current: &str) -> Result<ScoreComparison, ScoreError> {
        let previous: MutationScore = previous.parse()?;
        let current: MutationScore = current.parse()?;
        debug!(
            "Comparing previous={} current={} tolerance={}",
            previous, current, self.tolerance
        );

        if current.value() + self.tolerance < previous.value() {
            return Err(ScoreError::ScoreDropped {
                previous: previous.value(),
                current: current.value(),
            });
        }
        Ok(ScoreComparison {
            previous: previous.value(),
            current: current.value(),
        })
    }
}
