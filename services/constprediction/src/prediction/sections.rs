//! Verbatim excerpts from the constraints and output sections

use serde::{Deserialize, Serialize};
use crate::prediction::markup::{Section, Statement};
use crate::prediction::normalize::normalize_excerpt;

const CONSTRAINTS_PREFIX: &str = "制約";
const OUTPUT_PREFIX: &str = "出力";
const OUTPUT_EXAMPLE_PREFIX: &str = "出力例";

/// Which statement section to excerpt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// `制約`: one excerpt per list item
    Constraints,
    /// `出力` but not `出力例`: one excerpt per paragraph
    OutputDescription,
}

impl SectionKind {
    fn accepts(&self, section: &Section) -> bool {
        let title = section.japanese_title();
        match self {
            SectionKind::Constraints => title.starts_with(CONSTRAINTS_PREFIX),
            SectionKind::OutputDescription => {
                title.starts_with(OUTPUT_PREFIX) && !title.starts_with(OUTPUT_EXAMPLE_PREFIX)
            }
        }
    }

    fn raw_excerpts(&self, section: &Section) -> Vec<String> {
        match self {
            SectionKind::Constraints => section.list_items(),
            SectionKind::OutputDescription => section.paragraphs(),
        }
    }
}

/// Excerpts of every matching section, in document order. Empty when no
/// section matches.
pub fn extract_section(statement: &Statement, kind: SectionKind) -> Vec<String> {
    statement
        .sections()
        .iter()
        .filter(|section| kind.accepts(section))
        .flat_map(|section| kind.raw_excerpts(section))
        .map(|text| normalize_excerpt(&text))
        .collect()
}

pub fn extract_constraint_texts(statement: &Statement) -> Vec<String> {
    extract_section(statement, SectionKind::Constraints)
}

pub fn extract_output_texts(statement: &Statement) -> Vec<String> {
    extract_section(statement, SectionKind::OutputDescription)
}
