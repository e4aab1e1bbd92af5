use std::{fmt::Display, str::FromStr};

use crate::errors::ScoreError;

/// A coverage percentage as rendered in the report, without the `%` sign.
///
/// The original text is kept so the score can be echoed back unchanged
/// (`80.0` stays `80.0`, `80` stays `80`).
#[derive(Debug, Clone, PartialEq)]
pub struct MutationScore {
    text: String,
    value: f64,
}

impl MutationScore {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl FromStr for MutationScore {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let value = text
            .parse::<f64>()
            .map_err(|_| ScoreError::InvalidArgument(String::from("Scores must be numbers.")))?;
        Ok(Self {
            text: text.to_string(),
            value,
        })
    }
}

impl Display for MutationScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
