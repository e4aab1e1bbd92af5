use std::path::PathBuf;

use crate::{
    errors::ScoreError,
    gate::ScoreGate,
    report::{ScoreExtractor, Strategy},
};

use super::{Runner, compare::CompareRunner, extract::ExtractRunner, verify::VerifyRunner};

#[derive(Debug, Clone, PartialEq)]
pub enum RunnerMode {
    Extract { report_root: PathBuf },
    Compare { previous: String, current: String },
    Verify { report_root: PathBuf },
}

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub verbose: bool,
    pub strategy: Strategy,
    pub tolerance: f64,
    pub mode: RunnerMode,
}

impl RunnerConfig {
    pub fn new(verbose: bool, strategy: Strategy, tolerance: f64, mode: RunnerMode) -> Self {
        Self {
            verbose,
            strategy,
            tolerance,
            mode,
        }
    }

    pub fn into_runner(self) -> Result<Box<dyn Runner>, ScoreError> {
        let extractor = ScoreExtractor::new(self.strategy);
        let runner: Box<dyn Runner> = match self.mode {
            RunnerMode::Extract { report_root } => {
                Box::new(ExtractRunner::new(report_root, extractor))
            }
            RunnerMode::Compare { previous, current } => Box::new(CompareRunner::new(
                previous,
                current,
                ScoreGate::new(self.tolerance)?,
            )),
            RunnerMode::Verify { report_root } => {
                Box::new(VerifyRunner::new(report_root, extractor))
            }
        };
        Ok(runner)
    }
}
