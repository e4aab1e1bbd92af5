pub mod cli;
pub mod errors;
pub mod gate;
pub mod report;
pub mod runner;
pub mod utils;
