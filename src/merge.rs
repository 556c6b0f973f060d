//! K-way merge of segment sources into one canonical segment sequence.
//!
//! Segments from all sources go into a min-heap keyed by start offset. Each
//! popped segment absorbs every queued segment that ends no later than it
//! does, combining their styles with [`merge_segments`]. Sources are pulled
//! lazily: a source's next batch is requested only when the last segment of
//! its previous batch leaves the heap.

use crate::color::Rgb;
use crate::segment::Segment;
use crate::source::SegmentSource;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Range;

/// Combine two segments covering the same text.
///
/// `a` wins on every channel where it says something: colors unless unset or
/// equal to the scheme default, font style unless plain. Range, family and
/// size always come from `a`.
#[must_use]
pub fn merge_segments(a: Segment, b: &Segment, default_fg: Rgb, default_bg: Rgb) -> Segment {
    let informative = |color: Option<Rgb>, default: Rgb| color.filter(|c| *c != default);
    Segment {
        bg: informative(a.bg, default_bg).or(b.bg),
        fg: informative(a.fg, default_fg).or(b.fg),
        font_style: if a.font_style.is_plain() {
            b.font_style
        } else {
            a.font_style
        },
        ..a
    }
}

struct Queued {
    segment: Segment,
    source: usize,
    seq: u64,
    last_in_batch: bool,
}

impl Queued {
    const fn key(&self) -> (usize, usize, u64) {
        (self.segment.range.start, self.source, self.seq)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    // Reversed so the max-heap pops the smallest start first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Iterator over merged segments, clipped to a window.
///
/// Source order matters: on equal starts the source with the lower index is
/// popped first and so wins the merge. The output is sorted, pairwise
/// non-overlapping, and covers exactly the union of the sources' extents
/// inside the window.
pub struct SegmentMerger<'a> {
    sources: Vec<Box<dyn SegmentSource + 'a>>,
    heap: BinaryHeap<Queued>,
    window: Range<usize>,
    default_fg: Rgb,
    default_bg: Rgb,
    seq: u64,
    emitted_end: usize,
}

impl<'a> SegmentMerger<'a> {
    /// Prime the heap with the first batch of every source.
    #[must_use]
    pub fn new(
        sources: Vec<Box<dyn SegmentSource + 'a>>,
        window: Range<usize>,
        default_fg: Rgb,
        default_bg: Rgb,
    ) -> Self {
        let mut merger = Self {
            sources,
            heap: BinaryHeap::new(),
            emitted_end: window.start,
            window,
            default_fg,
            default_bg,
            seq: 0,
        };
        for source in 0..merger.sources.len() {
            merger.pull(source);
        }
        merger
    }

    /// Queue the next non-empty batch of `source`.
    fn pull(&mut self, source: usize) {
        while let Some(batch) = self.sources[source].next_batch() {
            if batch.first().is_some_and(|s| s.start() >= self.window.end) {
                return;
            }
            let clipped: Vec<Segment> = batch
                .into_iter()
                .filter_map(|s| clip(s, &self.window))
                .collect();
            let Some(last) = clipped.len().checked_sub(1) else {
                continue;
            };
            for (idx, segment) in clipped.into_iter().enumerate() {
                self.seq += 1;
                self.heap.push(Queued {
                    segment,
                    source,
                    seq: self.seq,
                    last_in_batch: idx == last,
                });
            }
            return;
        }
    }

    fn pop(&mut self) -> Option<Segment> {
        let queued = self.heap.pop()?;
        if queued.last_in_batch {
            self.pull(queued.source);
        }
        Some(queued.segment)
    }
}

fn clip(segment: Segment, window: &Range<usize>) -> Option<Segment> {
    let start = segment.start().max(window.start);
    let end = segment.end().min(window.end);
    (start < end).then(|| segment.with_range(start..end))
}

impl Iterator for SegmentMerger<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            let mut merged = self.pop()?;
            while self
                .heap
                .peek()
                .is_some_and(|next| next.segment.end() <= merged.end())
            {
                let Some(next) = self.pop() else { break };
                merged = merge_segments(merged, &next, self.default_fg, self.default_bg);
            }

            if merged.end() <= self.emitted_end {
                continue;
            }
            if merged.start() < self.emitted_end {
                merged.range.start = self.emitted_end;
            }
            self.emitted_end = merged.end();
            return Some(merged);
        }
    }
}
