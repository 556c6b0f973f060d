//! Overlay segment source over editor highlights.

use super::fallback::{FontFallback, SingleFont, split_by_font};
use super::{SegmentSource, StyleProvider, next_generation};
use crate::document::Document;
use crate::scheme::ColorScheme;
use crate::style::TextStyle;
use std::ops::Range;

/// Highlight layers, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    CaretRow,
    Syntax,
    AdditionalSyntax,
    GuardedBlocks,
    Warning,
    Error,
    Selection,
}

impl Layer {
    /// Layers carrying styling that belongs to the code itself.
    #[must_use]
    pub const fn is_syntax(self) -> bool {
        matches!(self, Self::Syntax | Self::AdditionalSyntax)
    }
}

/// One overlay highlight (semantic coloring, annotation, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub range: Range<usize>,
    pub layer: Layer,
    pub style: TextStyle,
}

impl Highlight {
    #[must_use]
    pub const fn new(range: Range<usize>, layer: Layer, style: TextStyle) -> Self {
        Self {
            range,
            layer,
            style,
        }
    }
}

/// Overlay style provider.
///
/// Only syntax-layer highlights take part in the export. Highlights whose
/// style says nothing beyond the scheme defaults are skipped. Highlights must
/// be sorted by start; the syntax-layer ones must not overlap.
pub struct OverlayModel {
    highlights: Vec<Highlight>,
    fallback: Box<dyn FontFallback + Send + Sync>,
    generation: u64,
}

impl OverlayModel {
    #[must_use]
    pub fn new(highlights: Vec<Highlight>) -> Self {
        Self {
            highlights,
            fallback: Box::new(SingleFont),
            generation: next_generation(),
        }
    }

    /// Replace the font fallback used to split highlights.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl FontFallback + Send + Sync + 'static) -> Self {
        self.fallback = Box::new(fallback);
        self.generation = next_generation();
        self
    }

    /// Replace the highlights, e.g. when a background analysis pass
    /// finished after the document stopped changing.
    pub fn set_highlights(&mut self, highlights: Vec<Highlight>) {
        self.highlights = highlights;
        self.generation = next_generation();
    }

    #[must_use]
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }
}

fn is_exported(highlight: &Highlight, scheme: &ColorScheme) -> bool {
    highlight.layer.is_syntax()
        && highlight.range.start < highlight.range.end
        && !highlight
            .style
            .is_uninformative(scheme.foreground(), scheme.background())
}

impl StyleProvider for OverlayModel {
    fn generation(&self) -> u64 {
        self.generation
    }

    fn open<'a>(
        &'a self,
        doc: &'a Document,
        scheme: &'a ColorScheme,
        window: Range<usize>,
    ) -> Box<dyn SegmentSource + 'a> {
        let (start, end) = (window.start, window.end);
        let batches = self
            .highlights
            .iter()
            .take_while(move |h| h.range.start < end)
            .filter(move |h| h.range.end > start && is_exported(h, scheme))
            .map(move |h| {
                let range = h.range.start.max(start)..h.range.end.min(end);
                split_by_font(
                    doc,
                    range,
                    h.style,
                    scheme.font_family(),
                    scheme.font_size(),
                    self.fallback.as_ref(),
                )
            })
            .filter(|batch| !batch.is_empty());
        Box::new(batches)
    }
}
