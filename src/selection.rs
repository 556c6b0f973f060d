//! Selection shapes and their plain-text rendition.

use crate::document::Document;
use crate::error::{Error, Result};
use std::ops::Range;

/// What the user selected, as document char ranges.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    /// One contiguous range.
    Linear(Range<usize>),
    /// Several carets, each with its own range; pasted joined by line feeds.
    MultiCaret(Vec<Range<usize>>),
    /// Column selection: one range per row, all rows `width` columns wide.
    Block {
        rows: Vec<Range<usize>>,
        width: usize,
    },
}

impl Selection {
    /// Build a selection from parallel start / end arrays.
    ///
    /// A `block_width` makes it a block selection; otherwise one region is
    /// linear and several are multi-caret.
    pub fn from_bounds(starts: &[usize], ends: &[usize], block_width: Option<usize>) -> Result<Self> {
        if starts.len() != ends.len() {
            return Err(Error::InvalidSelection(format!(
                "{} start offsets but {} end offsets",
                starts.len(),
                ends.len()
            )));
        }
        if starts.is_empty() {
            return Err(Error::InvalidSelection("no regions".to_string()));
        }
        let regions: Vec<Range<usize>> = starts.iter().zip(ends).map(|(&s, &e)| s..e).collect();
        let selection = match (block_width, regions.len()) {
            (Some(width), _) => Self::Block {
                rows: regions,
                width,
            },
            (None, 1) => Self::Linear(regions[0].clone()),
            (None, _) => Self::MultiCaret(regions),
        };
        selection.check_shape()?;
        Ok(selection)
    }

    /// Regions in document order.
    #[must_use]
    pub fn regions(&self) -> &[Range<usize>] {
        match self {
            Self::Linear(range) => std::slice::from_ref(range),
            Self::MultiCaret(regions) | Self::Block { rows: regions, .. } => regions,
        }
    }

    /// Width of a block selection.
    #[must_use]
    pub const fn block_width(&self) -> Option<usize> {
        match self {
            Self::Block { width, .. } => Some(*width),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_linear(&self) -> bool {
        matches!(self, Self::Linear(_))
    }

    /// True if no region selects anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions().iter().all(|r| r.start >= r.end)
    }

    /// Padding after row `idx` of a block selection, zero otherwise.
    #[must_use]
    pub fn padding_after(&self, idx: usize) -> usize {
        match self {
            Self::Block { rows, width } => rows
                .get(idx)
                .map_or(0, |row| width.saturating_sub(row.end - row.start)),
            _ => 0,
        }
    }

    fn check_shape(&self) -> Result<()> {
        let regions = self.regions();
        if regions.is_empty() {
            return Err(Error::InvalidSelection("no regions".to_string()));
        }
        for (idx, region) in regions.iter().enumerate() {
            if region.start > region.end {
                return Err(Error::InvalidSelection(format!(
                    "region {idx} is inverted ({}..{})",
                    region.start, region.end
                )));
            }
            if idx > 0 && region.start < regions[idx - 1].end {
                return Err(Error::InvalidSelection(format!(
                    "region {idx} starts before the previous region ends"
                )));
            }
        }
        Ok(())
    }

    /// Check the selection is well formed and inside `doc`.
    pub fn validate(&self, doc: &Document) -> Result<()> {
        self.check_shape()?;
        let len = doc.len_chars();
        if let Some(region) = self.regions().iter().find(|r| r.end > len) {
            return Err(Error::InvalidSelection(format!(
                "region {}..{} is past the document end ({len})",
                region.start, region.end
            )));
        }
        Ok(())
    }

    /// The text a plain-text paste of this selection produces.
    ///
    /// Block rows other than the last are padded with spaces to the block
    /// width. Rows and carets are separated by `\n`.
    #[must_use]
    pub fn plain_text(&self, doc: &Document) -> String {
        let regions = self.regions();
        let mut out = String::new();
        for (idx, region) in regions.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.extend(doc.chars(region.clone()));
            if idx + 1 < regions.len() {
                out.extend(std::iter::repeat_n(' ', self.padding_after(idx)));
            }
        }
        out
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::Linear(range)
    }
}
