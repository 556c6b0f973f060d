//! Segment sources: the boundary to the lexer and the overlay model.
//!
//! A [`StyleProvider`] opens a [`SegmentSource`] over a char window of a
//! document. Sources hand out batches of segments lazily; the merge engine
//! pulls the next batch only once the previous one has been consumed.
//!
//! Every iterator over `Vec<Segment>` is a source, so providers usually
//! return an iterator chain.

mod fallback;
mod overlay;
mod token;

pub use fallback::{CoverageFallback, FallbackFont, FontFallback, SingleFont, split_by_font};
pub use overlay::{Highlight, Layer, OverlayModel};
pub use token::{Token, TokenHighlighter, TokenKind};

use crate::document::Document;
use crate::scheme::ColorScheme;
use crate::segment::Segment;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Fresh provider generation, unique within the process. Zero is reserved
/// for providers that never contribute anything.
pub(crate) fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// A lazily pulled stream of segment batches.
///
/// Within a source, segments are sorted by start and pairwise
/// non-overlapping, across batches too. `None` means the source is
/// exhausted.
pub trait SegmentSource {
    fn next_batch(&mut self) -> Option<Vec<Segment>>;
}

impl<I> SegmentSource for I
where
    I: Iterator<Item = Vec<Segment>>,
{
    fn next_batch(&mut self) -> Option<Vec<Segment>> {
        self.next()
    }
}

/// Opens segment sources over document windows.
///
/// `scheme` is the scheme the export resolved; providers use it to turn
/// token kinds into colors and to pick the editor font.
///
/// `generation` identifies the provider's current content: it must differ
/// from every other provider's and change whenever the segments it would
/// produce change for reasons other than a document edit. Cached results
/// are keyed by it.
pub trait StyleProvider {
    fn generation(&self) -> u64;

    fn open<'a>(
        &'a self,
        doc: &'a Document,
        scheme: &'a ColorScheme,
        window: Range<usize>,
    ) -> Box<dyn SegmentSource + 'a>;
}

/// Provider over segments computed up front, one batch per segment.
#[derive(Clone, Debug)]
pub struct SegmentList {
    segments: Vec<Segment>,
    generation: u64,
}

impl SegmentList {
    /// Segments must be sorted by start and non-overlapping.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            generation: next_generation(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Default for SegmentList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Segment>> for SegmentList {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl StyleProvider for SegmentList {
    fn generation(&self) -> u64 {
        self.generation
    }

    fn open<'a>(
        &'a self,
        _doc: &'a Document,
        _scheme: &'a ColorScheme,
        window: Range<usize>,
    ) -> Box<dyn SegmentSource + 'a> {
        let first = self.segments.partition_point(|s| s.end() <= window.start);
        let end = window.end;
        Box::new(
            self.segments[first..]
                .iter()
                .take_while(move |s| s.start() < end)
                .map(move |s| {
                    let range = s.start().max(window.start)..s.end().min(window.end);
                    vec![s.clone().with_range(range)]
                })
                .filter(|batch| batch.iter().all(|s| !s.is_empty())),
        )
    }
}

/// A provider contributing nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStyles;

impl StyleProvider for NoStyles {
    fn generation(&self) -> u64 {
        0
    }

    fn open<'a>(
        &'a self,
        _doc: &'a Document,
        _scheme: &'a ColorScheme,
        _window: Range<usize>,
    ) -> Box<dyn SegmentSource + 'a> {
        Box::new(std::iter::empty())
    }
}
