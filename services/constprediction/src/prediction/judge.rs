//! Judge-method classification: interactive, decimal tolerance or exact

use std::collections::BTreeSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::prediction::anchors::AnchorSet;
use crate::prediction::constant_set::{ErrorKind, JudgeMethod, Tolerance};
use crate::prediction::evidence::{Evidence, PredictionError};
use crate::prediction::markup::Statement;
use crate::prediction::normalize::normalize_sentence;

static ERROR_KIND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(絶対|相対)誤差|(absolute|relative)").expect("valid regex"));
static POWER_OF_TEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"10\^\(?(-[0-9]+)\)?").expect("valid regex"));
static E_NOTATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"1e(-[0-9]+)").expect("valid regex"));
static DECIMAL_LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^0-9.])0\.(0*)1(?:[^0-9]|$)").expect("valid regex"));

/// Notation a tolerance threshold may be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPattern {
    /// `10^-6`, `10^(-6)`
    PowerOfTen,
    /// `1e-6`
    ENotation,
    /// `0.000001`
    DecimalLiteral,
}

impl ThresholdPattern {
    pub fn defaults() -> Vec<ThresholdPattern> {
        vec![ThresholdPattern::PowerOfTen, ThresholdPattern::ENotation]
    }

    /// Power-of-ten exponents written in this notation
    pub fn exponents(&self, normalized: &str) -> Vec<i32> {
        match self {
            ThresholdPattern::PowerOfTen => Self::captured(&POWER_OF_TEN_RE, normalized),
            ThresholdPattern::ENotation => Self::captured(&E_NOTATION_RE, normalized),
            ThresholdPattern::DecimalLiteral => DECIMAL_LITERAL_RE
                .captures_iter(normalized)
                .filter_map(|caps| i32::try_from(caps.get(1)?.as_str().len()).ok())
                .map(|zeros| -(zeros + 1))
                .collect(),
        }
    }

    fn captured(re: &Regex, normalized: &str) -> Vec<i32> {
        re.captures_iter(normalized)
            .filter_map(|caps| caps.get(1)?.as_str().parse::<i32>().ok())
            .collect()
    }
}

/// Anchors and notations the judge classifier works from
#[derive(Debug, Clone)]
pub struct JudgeVocabulary<'a> {
    pub interactive: &'a AnchorSet,
    pub decimal: &'a AnchorSet,
    pub threshold_patterns: &'a [ThresholdPattern],
}

/// Keyword flags and threshold candidates found in decimal-context sentences
#[derive(Debug, Default)]
pub struct DecimalScan {
    pub context_sentences: usize,
    pub absolute: bool,
    pub relative: bool,
    pub exponents: BTreeSet<i32>,
}

impl DecimalScan {
    pub fn error_kind(&self) -> ErrorKind {
        ErrorKind::from_flags(self.absolute, self.relative)
    }
}

/// Scan decimal-context sentences for tolerance kind and threshold
pub fn scan_decimal(statement: &Statement, vocab: &JudgeVocabulary<'_>) -> DecimalScan {
    let mut scan = DecimalScan::default();

    for sentence in vocab.decimal.select(statement.sentences()) {
        scan.context_sentences += 1;
        let normalized = normalize_sentence(sentence);

        for caps in ERROR_KIND_RE.captures_iter(&normalized) {
            let kind = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str());
            match kind {
                Some("絶対") | Some("absolute") => scan.absolute = true,
                Some("相対") | Some("relative") => scan.relative = true,
                _ => {}
            }
        }

        for pattern in vocab.threshold_patterns {
            scan.exponents.extend(pattern.exponents(&normalized));
        }
    }

    scan
}

/// Classify how answers are judged.
///
/// Interactive anchors win outright. Otherwise a decimal context must yield
/// exactly one threshold; a context with none, or with several, is an error.
pub fn predict_judge_method(
    statement: &Statement,
    vocab: &JudgeVocabulary<'_>,
) -> Result<JudgeMethod, PredictionError> {
    if statement.sentences().iter().any(|s| vocab.interactive.matches(s)) {
        tracing::debug!("interactive anchor found");
        return Ok(JudgeMethod::Interactive);
    }

    let scan = scan_decimal(statement, vocab);
    if scan.context_sentences == 0 {
        return Ok(JudgeMethod::Exact);
    }

    let error_kind = scan.error_kind();
    let exponent = Evidence::from_candidates(scan.exponents)
        .into_result(|candidates| PredictionError::AmbiguousDecimalCandidates { candidates })?
        .ok_or(PredictionError::NoDecimalThresholdFound)?;

    let tolerance = Tolerance::from_exponent(error_kind, exponent)
        .ok_or(PredictionError::NoDecimalThresholdFound)?;
    tracing::debug!(
        error_kind = error_kind.as_str(),
        threshold = tolerance.threshold(),
        "decimal tolerance judge"
    );
    Ok(JudgeMethod::DecimalTolerance(tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predict_with(
        html: &str,
        patterns: &[ThresholdPattern],
    ) -> Result<JudgeMethod, PredictionError> {
        let interactive = AnchorSet::interactive();
        let decimal = AnchorSet::decimal();
        let vocab = JudgeVocabulary {
            interactive: &interactive,
            decimal: &decimal,
            threshold_patterns: patterns,
        };
        predict_judge_method(&Statement::parse(html), &vocab)
    }

    fn predict(html: &str) -> Result<JudgeMethod, PredictionError> {
        predict_with(html, &ThresholdPattern::defaults())
    }

    fn tolerance(method: JudgeMethod) -> Tolerance {
        match method {
            JudgeMethod::DecimalTolerance(t) => t,
            other => panic!("expected decimal judge, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_patterns() {
        assert_eq!(ThresholdPattern::PowerOfTen.exponents("atmost10^-6."), vec![-6]);
        assert_eq!(ThresholdPattern::PowerOfTen.exponents("atmost10^(-9)"), vec![-9]);
        assert_eq!(ThresholdPattern::ENotation.exponents("within1e-6or1e-9"), vec![-6, -9]);
        assert_eq!(ThresholdPattern::DecimalLiteral.exponents("atmost0.000001."), vec![-6]);
        assert!(ThresholdPattern::DecimalLiteral.exponents("atmost10.01").is_empty());
    }

    #[test]
    fn test_exact_by_default() {
        assert_eq!(predict("<p>Print the answer.</p>"), Ok(JudgeMethod::Exact));
    }

    #[test]
    fn test_interactive_wins() {
        let html = "<p>This is an interactive task.</p>\n\
                    <p>Your answer is accepted if the absolute error is at most 10^{-6}.</p>";
        assert_eq!(predict(html), Ok(JudgeMethod::Interactive));

        let html = "<p>この問題はインタラクティブな問題です。</p>";
        assert_eq!(predict(html), Ok(JudgeMethod::Interactive));
    }

    #[test]
    fn test_relative_error() {
        let html = "<p>The output is judged correct if the relative error is at most 10^{-6}.</p>";
        let t = tolerance(predict(html).unwrap());
        assert_eq!(t.error_kind(), ErrorKind::Relative);
        assert!((t.threshold() - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn test_absolute_or_relative_error() {
        let html = "<p>Your output is considered correct if its absolute or relative error from ours is at most \\(10^{\u{2212}9}\\).</p>";
        let t = tolerance(predict(html).unwrap());
        assert_eq!(t.error_kind(), ErrorKind::AbsoluteOrRelative);
        assert!((t.threshold() - 1e-9).abs() < 1e-21);
    }

    #[test]
    fn test_japanese_absolute_error() {
        let html = "<p>想定解との絶対誤差が <var>10^{-6}</var> 以下であれば正解とみなされる。</p>";
        let t = tolerance(predict(html).unwrap());
        assert_eq!(t.error_kind(), ErrorKind::Absolute);
    }

    #[test]
    fn test_kind_unspecified() {
        let html = "<p>誤差は 1e-4 まで許容される。</p>";
        let t = tolerance(predict(html).unwrap());
        assert_eq!(t.error_kind(), ErrorKind::AbsoluteOrRelative);
        assert!((t.threshold() - 1e-4).abs() < 1e-16);
    }

    #[test]
    fn test_same_threshold_across_languages() {
        let html = "<p>絶対誤差または相対誤差が <var>10^{-6}</var> 以下ならば正解です。</p>\n\
                    <p>Your answer is correct if the absolute or relative error is at most 1e-6.</p>";
        let t = tolerance(predict(html).unwrap());
        assert_eq!(t.error_kind(), ErrorKind::AbsoluteOrRelative);
    }

    #[test]
    fn test_missing_threshold() {
        let html = "<p>Your answer is accepted if the absolute error is small enough.</p>";
        assert_eq!(predict(html), Err(PredictionError::NoDecimalThresholdFound));
    }

    #[test]
    fn test_decimal_literal_opt_in() {
        let html = "<p>Accepted if the absolute error is at most 0.000001.</p>";
        assert_eq!(predict(html), Err(PredictionError::NoDecimalThresholdFound));

        let patterns = [ThresholdPattern::PowerOfTen, ThresholdPattern::DecimalLiteral];
        let t = tolerance(predict_with(html, &patterns).unwrap());
        assert!((t.threshold() - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn test_conflicting_thresholds() {
        let html = "<p>The absolute error must be at most 10^{-6}.</p>\n\
                    <p>The relative error must be at most 10^{-9}.</p>";
        match predict(html) {
            Err(PredictionError::AmbiguousDecimalCandidates { candidates }) => {
                assert_eq!(candidates, BTreeSet::from([-9, -6]));
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }
}
