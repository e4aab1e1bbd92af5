use std::{fs, path::PathBuf};

use colored::Colorize;

use crate::{
    errors::ScoreError,
    report::{MutationScore, ScoreExtractor, extractor::summary_percentages, resolver::INDEX_FILE},
};

use super::Runner;

/// Cross-checks the extractor against a direct read of `<root>/index.html`.
pub struct VerifyRunner {
    report_root: PathBuf,
    extractor: ScoreExtractor,
}

impl VerifyRunner {
    pub fn new(report_root: PathBuf, extractor: ScoreExtractor) -> Self {
        Self {
            report_root,
            extractor,
        }
    }

    fn expected_score(&self) -> Result<String, ScoreError> {
        if !self.report_root.is_dir() {
            return Err(ScoreError::RootNotFound(self.report_root.clone()));
        }
        let index_path = self.report_root.join(INDEX_FILE);
        if !index_path.exists() {
            return Err(ScoreError::IndexMissing(index_path));
        }

        println!(
            "{} Reading expected value from {}...",
            "[INFO]".blue().bold(),
            index_path.display()
        );
        let html = fs::read_to_string(&index_path)?;
        let percentages = summary_percentages(&html)?;
        let expected = percentages
            .get(1)
            .ok_or(ScoreError::InsufficientPercentages(percentages.len()))?
            .to_string();
        println!(
            "{} Expected Mutation Coverage: {}%",
            "[OK]".green().bold(),
            expected
        );
        Ok(expected)
    }

    pub fn verify(&self) -> Result<MutationScore, ScoreError> {
        let expected = self.expected_score()?;

        println!(
            "{} Running extractor on {}",
            "[INFO]".blue().bold(),
            self.report_root.display()
        );
        let actual = self.extractor.extract_from_report(&self.report_root)?;
        println!(
            "{} Actual Mutation Coverage extracted: {}%",
            "[INFO]".blue().bold(),
            actual
        );

        if actual.as_str() != expected {
            println!(
                "{} Expected {}%, got {}%",
                "[FAILURE]".red().bold(),
                expected,
                actual
            );
            return Err(ScoreError::VerificationMismatch {
                expected,
                actual: actual.to_string(),
            });
        }
        println!(
            "{} Extractor correctly extracted {}%",
            "[SUCCESS]".green().bold(),
            actual
        );
        Ok(actual)
    }
}

impl Runner for VerifyRunner {
    fn run(&self) -> Result<(), ScoreError> {
        self.verify().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Strategy;
    use pretty_assertions::assert_eq;

    fn report_root() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join(INDEX_FILE),
            include_str!("../report/test_data/project_summary.html"),
        )
        .unwrap();
        root
    }

    #[test]
    fn extractor_matches_index() {
        let root = report_root();
        let runner = VerifyRunner::new(root.path().to_path_buf(), ScoreExtractor::default());

        assert_eq!(runner.verify().unwrap().as_str(), "100.0");
    }

    #[test]
    fn diverging_strategy_is_reported() {
        let root = report_root();
        let runner = VerifyRunner::new(
            root.path().to_path_buf(),
            ScoreExtractor::new(Strategy::Loose),
        );

        match runner.verify().unwrap_err() {
            ScoreError::VerificationMismatch { expected, actual } => {
                assert_eq!(expected, "100.0");
                assert_eq!(actual, "87.5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn requires_top_level_index() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("202306011200")).unwrap();
        let runner = VerifyRunner::new(root.path().to_path_buf(), ScoreExtractor::default());

        assert!(matches!(
            runner.run().unwrap_err(),
            ScoreError::IndexMissing(_)
        ));
    }
}
