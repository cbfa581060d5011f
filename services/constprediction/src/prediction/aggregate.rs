//! Merge every classifier into one constant set, degrading failures to defaults

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use crate::config::PredictionConfig;
use crate::prediction::constant_set::{JudgeMethod, ProblemConstantSet};
use crate::prediction::evidence::PredictionError;
use crate::prediction::judge::predict_judge_method;
use crate::prediction::markup::Statement;
use crate::prediction::modulo::predict_modulus;
use crate::prediction::multi_solution::predict_multiple_solutions;
use crate::prediction::sections::{extract_constraint_texts, extract_output_texts};
use crate::prediction::yes_no::predict_yes_no;

/// Field of the constant set a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantField {
    Modulus,
    JudgeMethod,
    YesNo,
}

impl ConstantField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstantField::Modulus => "modulus",
            ConstantField::JudgeMethod => "judge_method",
            ConstantField::YesNo => "yes_no",
        }
    }
}

/// Record of a field degraded to its default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub field: ConstantField,
    pub reason: String,
    pub rejected: Vec<String>,
}

impl Diagnostic {
    fn from_error(field: ConstantField, err: &PredictionError) -> Self {
        Self {
            field,
            reason: err.to_string(),
            rejected: err.rejected_candidates(),
        }
    }
}

/// Constant set plus what was discarded while building it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    /// sha256 of the raw markup
    pub statement_hash: String,
    /// Epoch milliseconds
    pub generated_ts: i64,
    pub constants: ProblemConstantSet,
    pub diagnostics: Vec<Diagnostic>,
}

impl PredictionReport {
    pub fn is_degraded(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn degraded_fields(&self) -> Vec<ConstantField> {
        self.diagnostics.iter().map(|d| d.field).collect()
    }
}

pub fn statement_hash(html: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(html.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Swap a failed prediction for `fallback`, recording and logging it once
fn degrade<T>(
    field: ConstantField,
    result: Result<T, PredictionError>,
    fallback: T,
    diagnostics: &mut Vec<Diagnostic>,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            let diagnostic = Diagnostic::from_error(field, &err);
            tracing::warn!(
                field = field.as_str(),
                candidates = ?diagnostic.rejected,
                "{} prediction failed -- {}",
                field.as_str(),
                diagnostic.reason
            );
            diagnostics.push(diagnostic);
            fallback
        }
    }
}

/// Run every classifier over an already parsed statement. Never fails.
pub fn predict_statement(
    statement: &Statement,
    config: &PredictionConfig,
) -> (ProblemConstantSet, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let (yes_token, no_token) = degrade(
        ConstantField::YesNo,
        predict_yes_no(statement, &config.yes_no),
        (None, None),
        &mut diagnostics,
    );

    let modulus = degrade(
        ConstantField::Modulus,
        predict_modulus(statement, &config.anchors.modulo),
        None,
        &mut diagnostics,
    );

    let judge_method = degrade(
        ConstantField::JudgeMethod,
        predict_judge_method(statement, &config.judge_vocabulary()),
        JudgeMethod::Exact,
        &mut diagnostics,
    );

    let constants = ProblemConstantSet::new()
        .with_modulus(modulus)
        .with_yes_no(yes_token, no_token)
        .with_judge_method(judge_method)
        .with_output_description_texts(extract_output_texts(statement))
        .with_constraint_texts(extract_constraint_texts(statement))
        .with_multiple_solutions(predict_multiple_solutions(
            statement,
            &config.anchors.multi_solution,
        ));

    (constants, diagnostics)
}

/// Predict constants for a raw statement and keep the diagnostics
pub fn predict_report(html: &str, config: &PredictionConfig) -> PredictionReport {
    let statement = Statement::parse(html);
    let (constants, diagnostics) = predict_statement(&statement, config);

    PredictionReport {
        statement_hash: statement_hash(html),
        generated_ts: chrono::Utc::now().timestamp_millis(),
        constants,
        diagnostics,
    }
}

/// Predict constants with the built-in vocabularies
pub fn predict_constants(html: &str) -> ProblemConstantSet {
    predict_report(html, &PredictionConfig::default()).constants
}

/// Predict constants for many statements
pub fn predict_batch(statements: &[String], config: &PredictionConfig) -> Vec<PredictionReport> {
    statements.iter().map(|html| predict_report(html, config)).collect()
}
