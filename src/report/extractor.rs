use std::{fs, path::Path, str::FromStr};

use regex::Regex;
use tracing::debug;

use crate::errors::ScoreError;

use super::{resolver::resolve_summary_document, score::MutationScore};

/// Project or package summary heading, through the `Mutation Coverage`
/// header cell, up to the end of the first body row.
const SUMMARY_BLOCK_PATTERN: &str = r"(?s)<h[23]>(?:Project|Package) Summary</h[23]>.*?<th>Mutation Coverage</th>.*?<tbody>.*?<tr>.*?</tr>";
const CELL_PERCENTAGE_PATTERN: &str = r"<td>\s*(\d+(?:\.\d+)?)%";
const LOOSE_PATTERN: &str = r"(?s)Mutation Coverage.*?(\d+(?:\.\d+)?)%";

// Row layout: classes, line coverage, mutation coverage, test strength.
const MUTATION_COVERAGE_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Second percentage of the first summary table row.
    #[default]
    Summary,
    /// First percentage after the words `Mutation Coverage`.
    Loose,
}

impl FromStr for Strategy {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Strategy::Summary),
            "loose" => Ok(Strategy::Loose),
            other => Err(ScoreError::InvalidArgument(format!(
                "Unknown strategy '{}', expected 'summary' or 'loose'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoreExtractor {
    strategy: Strategy,
}

impl ScoreExtractor {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn extract_from_report(&self, report_root: &Path) -> Result<MutationScore, ScoreError> {
        let index_path = resolve_summary_document(report_root)?;
        let html = fs::read_to_string(&index_path)?;
        self.extract(&html)
    }

    pub fn extract(&self, html: &str) -> Result<MutationScore, ScoreError> {
        match self.strategy {
            Strategy::Summary => {
                let percentages = summary_percentages(html)?;
                percentages
                    .get(MUTATION_COVERAGE_INDEX)
                    .ok_or(ScoreError::InsufficientPercentages(percentages.len()))?
                    .parse()
            }
            Strategy::Loose => loose_percentage(html)?.parse(),
        }
    }
}

/// Percentages found in `<td>` cells of the first summary table row, in
/// document order.
pub fn summary_percentages(html: &str) -> Result<Vec<&str>, ScoreError> {
    let block_pattern = Regex::new(SUMMARY_BLOCK_PATTERN)?;
    let cell_pattern = Regex::new(CELL_PERCENTAGE_PATTERN)?;

    let block = block_pattern
        .find(html)
        .ok_or(ScoreError::SummaryBlockNotFound)?;
    let percentages: Vec<&str> = cell_pattern
        .captures_iter(block.as_str())
        .filter_map(|captures| captures.get(1))
        .map(|value| value.as_str())
        .collect();
    debug!(
        "Summary block at byte {} holds percentages {:?}",
        block.start(),
        percentages
    );
    Ok(percentages)
}

fn loose_percentage(html: &str) -> Result<&str, ScoreError> {
    let pattern = Regex::new(LOOSE_PATTERN)?;
    let value = pattern
        .captures(html)
        .and_then(|captures| captures.get(1))
        .ok_or(ScoreError::SummaryBlockNotFound)?
        .as_str();
    debug!("First percentage after Mutation Coverage: {}", value);
    Ok(value)
}
