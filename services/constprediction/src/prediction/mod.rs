//! Statement → sentences → independent classifiers → constant set
//!
//! This module implements a pipeline for:
//! 1. Parsing a problem statement into sentences and headed sections
//! 2. Predicting the modulus, judge method and yes/no tokens
//! 3. Excerpting constraints and output descriptions
//! 4. Merging everything into one immutable constant set, with diagnostics
//!    for every field that had to fall back to its default

pub mod constant_set;
pub mod evidence;
pub mod markup;
pub mod normalize;
pub mod anchors;
pub mod modulo;
pub mod judge;
pub mod yes_no;
pub mod sections;
pub mod multi_solution;
pub mod aggregate;
pub mod outputs;

pub use constant_set::*;
pub use evidence::*;
pub use markup::*;
pub use normalize::*;
pub use anchors::*;
pub use modulo::*;
pub use judge::*;
pub use yes_no::*;
pub use sections::*;
pub use multi_solution::*;
pub use aggregate::*;
pub use outputs::*;
