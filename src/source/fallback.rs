//! Font fallback and per-char font splitting.

use crate::document::Document;
use crate::segment::Segment;
use crate::style::{FontStyle, TextStyle};
use std::ops::{Range, RangeInclusive};

/// Picks the font that actually displays a char.
pub trait FontFallback {
    /// Family and size to use for `ch` when `preferred` at `size` is asked for.
    fn font_for<'a>(&'a self, ch: char, style: FontStyle, preferred: &'a str, size: u16)
    -> (&'a str, u16);
}

/// Every char is displayed by the preferred font.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleFont;

impl FontFallback for SingleFont {
    fn font_for<'a>(
        &'a self,
        _ch: char,
        _style: FontStyle,
        preferred: &'a str,
        size: u16,
    ) -> (&'a str, u16) {
        (preferred, size)
    }
}

/// A fallback font and the chars it covers.
#[derive(Clone, Debug)]
pub struct FallbackFont {
    pub family: String,
    /// Size override; `None` keeps the requested size.
    pub size: Option<u16>,
    pub coverage: Vec<RangeInclusive<char>>,
}

impl FallbackFont {
    #[must_use]
    pub fn new(family: impl Into<String>, coverage: Vec<RangeInclusive<char>>) -> Self {
        Self {
            family: family.into(),
            size: None,
            coverage,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    fn covers(&self, ch: char) -> bool {
        self.coverage.iter().any(|r| r.contains(&ch))
    }
}

/// Coverage-table fallback.
///
/// Chars inside `primary` are displayed by the preferred font. Other chars go
/// to the first fallback covering them, or stay with the preferred font when
/// none does.
#[derive(Clone, Debug)]
pub struct CoverageFallback {
    primary: Vec<RangeInclusive<char>>,
    fallbacks: Vec<FallbackFont>,
}

impl CoverageFallback {
    #[must_use]
    pub fn new(primary: Vec<RangeInclusive<char>>) -> Self {
        Self {
            primary,
            fallbacks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, font: FallbackFont) -> Self {
        self.fallbacks.push(font);
        self
    }
}

impl FontFallback for CoverageFallback {
    fn font_for<'a>(
        &'a self,
        ch: char,
        _style: FontStyle,
        preferred: &'a str,
        size: u16,
    ) -> (&'a str, u16) {
        if self.primary.iter().any(|r| r.contains(&ch)) {
            return (preferred, size);
        }
        self.fallbacks
            .iter()
            .find(|f| f.covers(ch))
            .map_or((preferred, size), |f| {
                (f.family.as_str(), f.size.unwrap_or(size))
            })
    }
}

/// Split `range` into maximal runs sharing one displaying font.
///
/// The result is one batch: sorted, contiguous, and empty only for an empty
/// range.
#[must_use]
pub fn split_by_font(
    doc: &Document,
    range: Range<usize>,
    style: TextStyle,
    family: &str,
    size: u16,
    fallback: &dyn FontFallback,
) -> Vec<Segment> {
    let mut batch = Vec::new();
    let mut run_start = range.start;
    let mut current: Option<(&str, u16)> = None;

    for (offset, ch) in doc.chars(range.clone()).enumerate() {
        let pos = range.start + offset;
        let font = fallback.font_for(ch, style.font_style, family, size);
        match current {
            Some(active) if active != font => {
                batch.push(Segment::new(run_start..pos, style, active.0, active.1));
                run_start = pos;
                current = Some(font);
            }
            Some(_) => {}
            None => current = Some(font),
        }
    }

    if let Some((name, points)) = current {
        let end = range.end.min(doc.len_chars());
        if run_start < end {
            batch.push(Segment::new(run_start..end, style, name, points));
        }
    }
    batch
}
