//! Yes/No token prediction from sample outputs

use serde::{Deserialize, Serialize};
use crate::prediction::evidence::PredictionError;
use crate::prediction::markup::Statement;

/// Words that mark a boolean-style answer, compared case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YesNoVocabulary {
    #[serde(default = "default_affirmative")]
    pub affirmative: Vec<String>,
    #[serde(default = "default_negative")]
    pub negative: Vec<String>,
}

impl Default for YesNoVocabulary {
    fn default() -> Self {
        Self {
            affirmative: default_affirmative(),
            negative: default_negative(),
        }
    }
}

fn default_affirmative() -> Vec<String> {
    vec!["yes".to_string(), "possible".to_string()]
}

fn default_negative() -> Vec<String> {
    vec!["no".to_string(), "impossible".to_string()]
}

fn in_vocabulary(lowered: &str, vocabulary: &[String]) -> bool {
    vocabulary.iter().any(|w| w.to_lowercase() == lowered)
}

/// Predict the literal yes/no tokens the judge expects.
///
/// The first matching sample line in document order fixes the casing of
/// each polarity.
pub fn predict_yes_no(
    statement: &Statement,
    vocabulary: &YesNoVocabulary,
) -> Result<(Option<String>, Option<String>), PredictionError> {
    let samples = statement.samples()?;

    let mut yes_token: Option<String> = None;
    let mut no_token: Option<String> = None;

    for line in samples.iter().flat_map(|s| s.output.split('\n')) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lowered = line.to_lowercase();
        if yes_token.is_none() && in_vocabulary(&lowered, &vocabulary.affirmative) {
            yes_token = Some(line.to_string());
        }
        if no_token.is_none() && in_vocabulary(&lowered, &vocabulary.negative) {
            no_token = Some(line.to_string());
        }
    }

    tracing::debug!(?yes_token, ?no_token, "yes/no prediction");
    Ok((yes_token, no_token))
}
