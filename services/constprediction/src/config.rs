use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::prediction::anchors::AnchorSet;
use crate::prediction::judge::{JudgeVocabulary, ThresholdPattern};
use crate::prediction::yes_no::YesNoVocabulary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionConfig {
    #[serde(default)]
    pub anchors: AnchorConfig,
    #[serde(default)]
    pub yes_no: YesNoVocabulary,
    #[serde(default)]
    pub judge: JudgeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorConfig {
    #[serde(default = "AnchorSet::modulo")]
    pub modulo: AnchorSet,
    #[serde(default = "AnchorSet::decimal")]
    pub decimal: AnchorSet,
    #[serde(default = "AnchorSet::interactive")]
    pub interactive: AnchorSet,
    #[serde(default = "AnchorSet::multi_solution")]
    pub multi_solution: AnchorSet,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            modulo: AnchorSet::modulo(),
            decimal: AnchorSet::decimal(),
            interactive: AnchorSet::interactive(),
            multi_solution: AnchorSet::multi_solution(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeConfig {
    #[serde(default = "ThresholdPattern::defaults")]
    pub threshold_patterns: Vec<ThresholdPattern>,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            threshold_patterns: ThresholdPattern::defaults(),
        }
    }
}

impl PredictionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config from {:?}", path.as_ref()))?;
        let config: PredictionConfig = toml::from_str(&content)
            .context("Failed to parse config TOML")?;
        Ok(config)
    }

    /// Built-in vocabularies unless a path is given
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn judge_vocabulary(&self) -> JudgeVocabulary<'_> {
        JudgeVocabulary {
            interactive: &self.anchors.interactive,
            decimal: &self.anchors.decimal,
            threshold_patterns: &self.judge.threshold_patterns,
        }
    }
}
