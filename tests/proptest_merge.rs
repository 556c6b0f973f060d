//! Property-based tests for the segment merge engine.
//!
//! Sources are generated as sorted, non-overlapping segment runs split into
//! batches of random size, then merged over a random window.

use proptest::prelude::*;
use richcopy::{Rgb, Segment, SegmentMerger, SegmentSource, TextStyle};
use std::collections::BTreeSet;
use std::ops::Range;

const FG: Rgb = Rgb::BLACK;
const BG: Rgb = Rgb::WHITE;

// ============================================================================
// Strategies
// ============================================================================

fn style_strategy() -> impl Strategy<Value = TextStyle> {
    prop::sample::select(vec![
        TextStyle::NONE,
        TextStyle::bold(),
        TextStyle::fg(Rgb::RED),
        TextStyle::fg(Rgb::BLUE).with_italic(),
        TextStyle::bg(Rgb::GREEN),
        TextStyle::fg(FG),
    ])
}

/// Sorted, non-overlapping segments grouped into batches.
fn source_strategy() -> impl Strategy<Value = Vec<Vec<Segment>>> {
    (
        prop::collection::vec((0usize..5, 1usize..8, style_strategy()), 0..12),
        1usize..4,
    )
        .prop_map(|(parts, batch_size)| {
            let mut pos = 0;
            let segments: Vec<Segment> = parts
                .into_iter()
                .map(|(gap, len, style)| {
                    let start = pos + gap;
                    pos = start + len;
                    Segment::new(start..pos, style, "Mono", 12)
                })
                .collect();
            segments.chunks(batch_size).map(<[Segment]>::to_vec).collect()
        })
}

fn window_strategy() -> impl Strategy<Value = Range<usize>> {
    (0usize..60, 0usize..60).prop_map(|(a, b)| a.min(b)..a.max(b))
}

// ============================================================================
// Helpers
// ============================================================================

fn merge(sources: &[Vec<Vec<Segment>>], window: Range<usize>) -> Vec<Segment> {
    let sources: Vec<Box<dyn SegmentSource>> = sources
        .iter()
        .map(|batches| Box::new(batches.clone().into_iter()) as Box<dyn SegmentSource>)
        .collect();
    SegmentMerger::new(sources, window, FG, BG).collect()
}

fn covered(segments: impl IntoIterator<Item = Range<usize>>) -> BTreeSet<usize> {
    segments.into_iter().flatten().collect()
}

fn clipped(batches: &[Vec<Segment>], window: &Range<usize>) -> Vec<Segment> {
    batches
        .iter()
        .flatten()
        .filter_map(|s| {
            let range = s.start().max(window.start)..s.end().min(window.end);
            (range.start < range.end).then(|| s.clone().with_range(range))
        })
        .collect()
}

// ============================================================================
// Output shape
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Output is sorted, non-empty and pairwise non-overlapping.
    #[test]
    fn output_sorted_and_disjoint(
        sources in prop::collection::vec(source_strategy(), 0..4),
        window in window_strategy(),
    ) {
        let merged = merge(&sources, window);
        for segment in &merged {
            prop_assert!(!segment.is_empty(), "empty segment {:?}", segment.range);
        }
        for pair in merged.windows(2) {
            prop_assert!(
                pair[0].end() <= pair[1].start(),
                "{:?} overlaps {:?}",
                pair[0].range,
                pair[1].range
            );
        }
    }

    /// Nothing is emitted outside the window.
    #[test]
    fn output_inside_window(
        sources in prop::collection::vec(source_strategy(), 0..4),
        window in window_strategy(),
    ) {
        for segment in merge(&sources, window.clone()) {
            prop_assert!(segment.start() >= window.start);
            prop_assert!(segment.end() <= window.end);
        }
    }

    /// The output covers exactly the union of the inputs inside the window.
    #[test]
    fn output_covers_union(
        sources in prop::collection::vec(source_strategy(), 0..4),
        window in window_strategy(),
    ) {
        let merged = merge(&sources, window.clone());
        let expected = covered(
            sources
                .iter()
                .flat_map(|batches| clipped(batches, &window))
                .map(|s| s.range),
        );
        prop_assert_eq!(covered(merged.into_iter().map(|s| s.range)), expected);
    }

    /// A single source passes through unchanged apart from clipping.
    #[test]
    fn single_source_identity(source in source_strategy(), window in window_strategy()) {
        let merged = merge(std::slice::from_ref(&source), window.clone());
        prop_assert_eq!(merged, clipped(&source, &window));
    }
}

// ============================================================================
// Merge rule
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// With identical extents the first source's informative channels win.
    #[test]
    fn first_source_wins_ties(a in style_strategy(), b in style_strategy(), len in 1usize..20) {
        let sources = vec![
            vec![vec![Segment::new(0..len, a, "Mono", 12)]],
            vec![vec![Segment::new(0..len, b, "Sans", 9)]],
        ];
        let merged = merge(&sources, 0..len);
        prop_assert_eq!(merged.len(), 1);
        let out = &merged[0];
        prop_assert_eq!(out.range.clone(), 0..len);
        prop_assert_eq!(&out.font_family, "Mono");
        prop_assert_eq!(out.font_size, 12);
        if a.fg.is_some_and(|c| c != FG) {
            prop_assert_eq!(out.fg, a.fg);
        } else {
            prop_assert_eq!(out.fg, b.fg);
        }
        if a.font_style.is_plain() {
            prop_assert_eq!(out.font_style, b.font_style);
        } else {
            prop_assert_eq!(out.font_style, a.font_style);
        }
    }
}
