//! Core value types for predicted problem constants

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// How the numeric error of a decimal answer is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Absolute,
    Relative,
    AbsoluteOrRelative,
}

impl ErrorKind {
    /// Combine the keyword flags seen in decimal-context sentences.
    ///
    /// A statement that names no kind at all is treated as accepting either.
    pub fn from_flags(absolute: bool, relative: bool) -> Self {
        match (absolute, relative) {
            (true, false) => ErrorKind::Absolute,
            (false, true) => ErrorKind::Relative,
            _ => ErrorKind::AbsoluteOrRelative,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Absolute => "absolute",
            ErrorKind::Relative => "relative",
            ErrorKind::AbsoluteOrRelative => "absolute_or_relative",
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct ToleranceRepr {
    error_kind: ErrorKind,
    threshold: f64,
}

/// Allowed error margin of a decimal judge. The threshold is always finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ToleranceRepr")]
pub struct Tolerance {
    error_kind: ErrorKind,
    threshold: f64,
}

impl Tolerance {
    pub fn new(error_kind: ErrorKind, threshold: f64) -> Option<Self> {
        if threshold.is_finite() && threshold > 0.0 {
            Some(Self { error_kind, threshold })
        } else {
            None
        }
    }

    /// Tolerance of `10^exponent`
    pub fn from_exponent(error_kind: ErrorKind, exponent: i32) -> Option<Self> {
        // parsed rather than powi'd so the value is the correctly rounded literal
        let threshold = format!("1e{}", exponent).parse::<f64>().ok()?;
        Self::new(error_kind, threshold)
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl TryFrom<ToleranceRepr> for Tolerance {
    type Error = String;

    fn try_from(repr: ToleranceRepr) -> Result<Self, Self::Error> {
        Tolerance::new(repr.error_kind, repr.threshold)
            .ok_or_else(|| format!("tolerance threshold must be positive, got {}", repr.threshold))
    }
}

/// Rule by which a submitted answer is compared to the expected one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JudgeMethod {
    Exact,
    DecimalTolerance(Tolerance),
    Interactive,
}

impl Default for JudgeMethod {
    fn default() -> Self {
        Self::Exact
    }
}

impl JudgeMethod {
    pub fn tolerance(&self) -> Option<&Tolerance> {
        match self {
            JudgeMethod::DecimalTolerance(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JudgeMethod::Exact => "exact",
            JudgeMethod::DecimalTolerance(_) => "decimal_tolerance",
            JudgeMethod::Interactive => "interactive",
        }
    }
}

/// Constants predicted from one problem statement.
///
/// Built once by the aggregator and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemConstantSet {
    #[serde(deserialize_with = "positive_modulus")]
    modulus: Option<u64>,
    yes_token: Option<String>,
    no_token: Option<String>,
    judge_method: JudgeMethod,
    output_description_texts: Vec<String>,
    constraint_texts: Vec<String>,
    multiple_solutions: bool,
}

fn positive_modulus<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<u64>::deserialize(deserializer)? {
        Some(0) => Err(D::Error::custom("modulus must be positive, got 0")),
        modulus => Ok(modulus),
    }
}

impl ProblemConstantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero is not a modulus and is dropped.
    pub fn with_modulus(mut self, modulus: Option<u64>) -> Self {
        self.modulus = modulus.filter(|m| *m > 0);
        self
    }

    pub fn with_yes_no(mut self, yes_token: Option<String>, no_token: Option<String>) -> Self {
        self.yes_token = yes_token;
        self.no_token = no_token;
        self
    }

    pub fn with_judge_method(mut self, judge_method: JudgeMethod) -> Self {
        self.judge_method = judge_method;
        self
    }

    pub fn with_output_description_texts(mut self, texts: Vec<String>) -> Self {
        self.output_description_texts = texts;
        self
    }

    pub fn with_constraint_texts(mut self, texts: Vec<String>) -> Self {
        self.constraint_texts = texts;
        self
    }

    pub fn with_multiple_solutions(mut self, multiple_solutions: bool) -> Self {
        self.multiple_solutions = multiple_solutions;
        self
    }

    pub fn modulus(&self) -> Option<u64> {
        self.modulus
    }

    pub fn yes_token(&self) -> Option<&str> {
        self.yes_token.as_deref()
    }

    pub fn no_token(&self) -> Option<&str> {
        self.no_token.as_deref()
    }

    pub fn judge_method(&self) -> &JudgeMethod {
        &self.judge_method
    }

    pub fn output_description_texts(&self) -> &[String] {
        &self.output_description_texts
    }

    pub fn constraint_texts(&self) -> &[String] {
        &self.constraint_texts
    }

    pub fn multiple_solutions(&self) -> bool {
        self.multiple_solutions
    }
}
