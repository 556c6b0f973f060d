//! Leading-indentation stripping for linear selections.

use crate::document::Document;
use std::ops::Range;

/// How much leading whitespace to drop from each line of a selection.
///
/// The first line is handled by moving the effective start forward; every
/// later line strips its own indentation width. Blank lines strip nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentPlan {
    first_line_start: usize,
    // Strip width per line, indexed by line ordinal within the selection.
    strips: Vec<usize>,
}

impl IndentPlan {
    /// Compute the plan for `range` of `doc`.
    #[must_use]
    pub fn compute(doc: &Document, range: &Range<usize>) -> Self {
        let first_line = doc.line_of(range.start);
        let last_line = doc.line_of(range.end);
        let mut first_line_start = range.start;
        let mut strips = Vec::with_capacity(last_line - first_line + 1);

        for line in first_line..=last_line {
            let strip = match doc.first_non_whitespace(line) {
                None => 0,
                Some(indent_end) if line == first_line => {
                    if indent_end > range.start {
                        first_line_start = indent_end.min(range.end);
                    }
                    0
                }
                Some(indent_end) => indent_end - doc.line_start(line),
            };
            strips.push(strip);
        }

        Self {
            first_line_start,
            strips,
        }
    }

    /// Effective start of the selection.
    #[must_use]
    pub const fn first_line_start(&self) -> usize {
        self.first_line_start
    }

    /// Strip width for the line with the given ordinal (0 = first line).
    #[must_use]
    pub fn strip_for(&self, line_ordinal: usize) -> usize {
        self.strips.get(line_ordinal).copied().unwrap_or(0)
    }
}
