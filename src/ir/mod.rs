//! Intermediate representation (IR) definitions for the ExpLang back end.
//!
//! The IR is constructed once by the upstream semantic-analysis stage and is
//! immutable input to code generation: every node already carries its
//! resolved type, and the generator only reads it.

use serde::{Deserialize, Serialize};
use std::fmt;

mod expressions;
mod module;
mod statements;
mod types;

pub use expressions::*;
pub use module::*;
pub use statements::*;
pub use types::*;

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
