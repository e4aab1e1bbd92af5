use std::path::PathBuf;

use crate::{errors::ScoreError, report::ScoreExtractor};

use super::Runner;

pub struct ExtractRunner {
    report_root: PathBuf,
    extractor: ScoreExtractor,
}

impl ExtractRunner {
    pub fn new(report_root: PathBuf, extractor: ScoreExtractor) -> Self {
        Self {
            report_root,
            extractor,
        }
    }
}

impl Runner for ExtractRunner {
    fn run(&self) -> Result<(), ScoreError> {
        // Nothing reaches stdout unless a score was found.
        let score = self.extractor.extract_from_report(&self.report_root)?;
        println!("{}", score);
        Ok(())
    }
}
