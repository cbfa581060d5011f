//! Anchor vocabularies and the sentence-context matcher

use serde::{Deserialize, Serialize};

pub const MODULO_ANCHORS: [&str; 7] = [
    "余り",
    "あまり",
    "mod",
    "割っ",
    "modulo",
    "remainder",
    "divided by",
];
/// `" error "` keeps its spaces so it never matches inside another word.
pub const DECIMAL_ANCHORS: [&str; 2] = ["誤差", " error "];
pub const MULTI_SOLUTION_ANCHORS: [&str; 4] = [
    "複数ある場合",
    "どれを出力しても構わない",
    "any of them",
    "if there are multiple",
];
pub const INTERACTIVE_ANCHORS: [&str; 4] =
    ["インタラクティブ", "リアクティブ", "interactive", "reactive"];

/// Immutable set of keywords signalling that a sentence discusses one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AnchorSet {
    keywords: Vec<String>,
}

impl AnchorSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn modulo() -> Self {
        Self::new(MODULO_ANCHORS)
    }

    pub fn decimal() -> Self {
        Self::new(DECIMAL_ANCHORS)
    }

    pub fn multi_solution() -> Self {
        Self::new(MULTI_SOLUTION_ANCHORS)
    }

    pub fn interactive() -> Self {
        Self::new(INTERACTIVE_ANCHORS)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True iff any anchor occurs in the sentence. Latin letters compare
    /// case-insensitively; Japanese keywords are unaffected by case folding.
    pub fn matches(&self, sentence: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        let lowered = sentence.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// Sentences of `sentences` that are in context for this anchor set
    pub fn select<'a>(&'a self, sentences: &'a [String]) -> impl Iterator<Item = &'a String> + 'a {
        sentences.iter().filter(move |s| self.matches(s))
    }
}

impl From<Vec<String>> for AnchorSet {
    fn from(keywords: Vec<String>) -> Self {
        Self::new(keywords)
    }
}

impl From<AnchorSet> for Vec<String> {
    fn from(set: AnchorSet) -> Self {
        set.keywords
    }
}

/// Free function form of [`AnchorSet::matches`]
pub fn matches_context(sentence: &str, anchors: &AnchorSet) -> bool {
    anchors.matches(sentence)
}
