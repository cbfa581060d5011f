//! Detect statements that accept any one of several valid answers

use crate::prediction::anchors::AnchorSet;
use crate::prediction::markup::Statement;

pub fn predict_multiple_solutions(statement: &Statement, anchors: &AnchorSet) -> bool {
    anchors.select(statement.sentences()).next().is_some()
}
