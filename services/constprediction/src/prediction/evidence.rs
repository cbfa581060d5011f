//! Outcome types shared by every classifier

use std::collections::BTreeSet;
use std::fmt::Debug;
use thiserror::Error;

/// Failure to obtain sample outputs from a statement
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("no sample outputs found in statement")]
    NoSamplesFound,

    #[error("sample format not recognized: {reason}")]
    FormatNotRecognized { reason: String },
}

/// Conditions a classifier reports instead of guessing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("two or more modulus candidates detected: {candidates:?}")]
    AmbiguousModulus { candidates: BTreeSet<u64> },

    #[error("two or more decimal threshold exponents detected: {candidates:?}")]
    AmbiguousDecimalCandidates { candidates: BTreeSet<i32> },

    #[error("statement mentions an error tolerance but no threshold could be extracted")]
    NoDecimalThresholdFound,

    #[error("sample outputs unavailable: {0}")]
    SampleUnavailable(#[from] SampleError),
}

impl PredictionError {
    /// Rejected candidate values rendered for diagnostics
    pub fn rejected_candidates(&self) -> Vec<String> {
        match self {
            PredictionError::AmbiguousModulus { candidates } => {
                candidates.iter().map(|c| c.to_string()).collect()
            }
            PredictionError::AmbiguousDecimalCandidates { candidates } => {
                candidates.iter().map(|c| format!("1e{}", c)).collect()
            }
            PredictionError::NoDecimalThresholdFound | PredictionError::SampleUnavailable(_) => {
                Vec::new()
            }
        }
    }
}

/// What a set of extracted candidates amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence<T: Ord> {
    None,
    Single(T),
    Ambiguous(BTreeSet<T>),
}

impl<T: Ord + Clone + Debug> Evidence<T> {
    pub fn from_candidates(mut candidates: BTreeSet<T>) -> Self {
        match candidates.len() {
            0 => Evidence::None,
            1 => match candidates.pop_first() {
                Some(value) => Evidence::Single(value),
                None => Evidence::None,
            },
            _ => Evidence::Ambiguous(candidates),
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Evidence::Ambiguous(_))
    }

    /// Map to the classifier contract: `Ok(None)`, `Ok(Some(v))`, or the
    /// error built from the full candidate set.
    pub fn into_result<E>(
        self,
        ambiguous: impl FnOnce(BTreeSet<T>) -> E,
    ) -> Result<Option<T>, E> {
        match self {
            Evidence::None => Ok(None),
            Evidence::Single(value) => Ok(Some(value)),
            Evidence::Ambiguous(candidates) => Err(ambiguous(candidates)),
        }
    }
}
