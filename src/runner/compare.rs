use crate::{errors::ScoreError, gate::ScoreGate};

use super::Runner;

pub struct CompareRunner {
    previous: String,
    current: String,
    gate: ScoreGate,
}

impl CompareRunner {
    pub fn new(previous: String, current: String, gate: ScoreGate) -> Self {
        Self {
            previous,
            current,
            gate,
        }
    }
}

impl Runner for CompareRunner {
    fn run(&self) -> Result<(), ScoreError> {
        let comparison = self.gate.compare(&self.previous, &self.current)?;
        println!("{}", comparison);
        Ok(())
    }
}
