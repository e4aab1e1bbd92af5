use crate::errors::ScoreError;

pub mod compare;
pub mod config;
pub mod extract;
pub mod verify;

pub use config::{RunnerConfig, RunnerMode};

pub trait Runner {
    fn run(&self) -> Result<(), ScoreError>;
}
