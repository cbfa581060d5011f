//! Modulus prediction from modulo-context sentences

use std::collections::BTreeSet;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::prediction::anchors::AnchorSet;
use crate::prediction::evidence::{Evidence, PredictionError};
use crate::prediction::markup::Statement;
use crate::prediction::normalize::normalize_sentence;

/// Applied in order to each normalized sentence; group 1 is the modulus.
static MODULO_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"([0-9]+).?.?.?で割った",
        r"modu?l?o?[^0-9]?[^0-9]?[^0-9]?([0-9]+)",
        r"dividedby([0-9]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid modulo pattern"))
    .collect()
});

/// Every modulus candidate extracted from one normalized sentence
fn extract_candidates(normalized: &str) -> Vec<u64> {
    MODULO_PATTERNS
        .iter()
        .filter_map(|re| re.captures(normalized))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u64>().ok())
        .filter(|m| *m > 0)
        .collect()
}

/// Collect candidates across all sentences in modulo context
pub fn modulus_evidence(statement: &Statement, anchors: &AnchorSet) -> Evidence<u64> {
    let candidates: BTreeSet<u64> = anchors
        .select(statement.sentences())
        .map(|s| normalize_sentence(s))
        .flat_map(|s| extract_candidates(&s))
        .collect();

    Evidence::from_candidates(candidates)
}

/// Predict the modulus the answer must be reduced by.
///
/// `Ok(None)` when no modulo sentence yields a value; an error carrying all
/// candidates when they disagree.
pub fn predict_modulus(
    statement: &Statement,
    anchors: &AnchorSet,
) -> Result<Option<u64>, PredictionError> {
    let result = modulus_evidence(statement, anchors)
        .into_result(|candidates| PredictionError::AmbiguousModulus { candidates });
    tracing::debug!(?result, "modulus prediction");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predict(html: &str) -> Result<Option<u64>, PredictionError> {
        predict_modulus(&Statement::parse(html), &AnchorSet::modulo())
    }

    #[test]
    fn test_extract_candidates() {
        assert_eq!(extract_candidates("答えを998244353で割った余りを出力せよ"), vec![998244353]);
        assert_eq!(extract_candidates("printtheanswermodulo1000000007."), vec![1000000007]);
        assert_eq!(extract_candidates("answermod998244353"), vec![998244353]);
        assert_eq!(extract_candidates("remainderwhendividedby998244353"), vec![998244353]);
        assert!(extract_candidates("printtheanswer").is_empty());
    }

    #[test]
    fn test_no_modulo_context() {
        assert_eq!(predict("<p>Print the sum of 3 and 4.</p>"), Ok(None));
    }

    #[test]
    fn test_context_without_value() {
        assert_eq!(predict("<p>Print the remainder.</p>"), Ok(None));
    }

    #[test]
    fn test_japanese_modulus() {
        let html = "<p>答えを <var>998244353</var> で割った余りを出力してください。</p>";
        assert_eq!(predict(html), Ok(Some(998244353)));
    }

    #[test]
    fn test_literal_mod_expression() {
        let html = "<p>答えは非常に大きくなる可能性があるので、<var>10^9+7</var> で割った余りを出力してください。</p>";
        assert_eq!(predict(html), Ok(Some(1000000007)));

        let html = "<p>Print the count modulo \\(10^9 + 7\\).</p>";
        assert_eq!(predict(html), Ok(Some(1000000007)));
    }

    #[test]
    fn test_divided_by_english() {
        let html = "<p>Print the remainder when the answer is divided by 998244353.</p>";
        assert_eq!(predict(html), Ok(Some(998244353)));
    }

    #[test]
    fn test_same_value_across_languages() {
        let html = "<p>答えを <var>998244353</var> で割った余りを出力せよ。</p>\n\
                    <p>Print the answer modulo <var>998244353</var>.</p>";
        assert_eq!(predict(html), Ok(Some(998244353)));
    }

    #[test]
    fn test_bare_less_than_keeps_sentence() {
        let html = "<ul><li><var>1 < N < 10</var></li>\n<li>x</li></ul>\n\
                    <p>If A < B, print the answer modulo 998244353.</p>";
        assert_eq!(predict(html), Ok(Some(998244353)));
    }

    #[test]
    fn test_conflicting_values() {
        let html = "<p>Print A modulo 998244353.</p>\n<p>Print B modulo 1000000007.</p>";
        match predict(html) {
            Err(PredictionError::AmbiguousModulus { candidates }) => {
                assert_eq!(candidates, BTreeSet::from([998244353, 1000000007]));
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }
}
