//! Styled character ranges produced by segment sources.

use crate::color::Rgb;
use crate::style::{FontStyle, TextStyle};
use std::fmt;
use std::ops::Range;

/// A range of document chars with the styling one source assigns to it.
///
/// Offsets are char indices into the document. Segments of one source are
/// sorted by start and never overlap each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Char range in the document.
    pub range: Range<usize>,
    /// Foreground color (None = scheme default).
    pub fg: Option<Rgb>,
    /// Background color (None = scheme default).
    pub bg: Option<Rgb>,
    /// Font family name.
    pub font_family: String,
    /// Bold / italic flags.
    pub font_style: FontStyle,
    /// Font size in points.
    pub font_size: u16,
}

impl Segment {
    /// Create a segment from a text style and a concrete font.
    #[must_use]
    pub fn new(
        range: Range<usize>,
        style: TextStyle,
        font_family: impl Into<String>,
        font_size: u16,
    ) -> Self {
        Self {
            range,
            fg: style.fg,
            bg: style.bg,
            font_family: font_family.into(),
            font_style: style.font_style,
            font_size,
        }
    }

    /// The colors and font style of this segment.
    #[must_use]
    pub const fn style(&self) -> TextStyle {
        TextStyle {
            fg: self.fg,
            bg: self.bg,
            font_style: self.font_style,
        }
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.range.start
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.range.end
    }

    /// Check if this segment overlaps with another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.range.start < other.range.end && other.range.start < self.range.end
    }

    /// Length in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// Same styling over a different range.
    #[must_use]
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.range = range;
        self
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}: {}, {}",
            self.range.start, self.range.end, self.font_family, self.font_style
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(range: Range<usize>) -> Segment {
        Segment::new(range, TextStyle::NONE, "Mono", 12)
    }

    #[test]
    fn test_segment_overlap() {
        let a = seg(0..10);
        let b = seg(5..15);
        let c = seg(10..20);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // adjacent, not overlapping
    }

    #[test]
    fn test_segment_len() {
        assert_eq!(seg(3..8).len(), 5);
        assert!(seg(4..4).is_empty());
        assert!(!seg(4..5).is_empty());
    }

    #[test]
    fn test_segment_style_round_trip() {
        let style = TextStyle::fg(Rgb::RED).with_italic();
        let s = Segment::new(0..3, style, "Mono", 11);
        assert_eq!(s.style(), style);
        assert_eq!(s.to_string(), "0-3: Mono, italic");
    }
}
