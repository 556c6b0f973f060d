//! Single-slot cache for the last computed syntax info.
//!
//! Clipboard hosts ask for several flavors of the same copy in quick
//! succession. The cache keeps the most recent recipe keyed by everything it
//! was computed from, so repeated requests skip the pipeline.

use crate::scheme::ColorScheme;
use crate::selection::Selection;
use crate::syntax_info::SyntaxInfo;
use std::sync::Arc;

/// Inputs a syntax info was computed from.
///
/// The scheme is compared by content, so editing a scheme in place misses
/// even when its name stays. `providers` holds the generation of each
/// provider in merge order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheKey {
    pub document: u64,
    pub revision: u64,
    pub selection: Selection,
    pub strip_indents: bool,
    pub scheme: ColorScheme,
    pub providers: Vec<u64>,
}

#[derive(Debug, Default)]
pub struct SyntaxInfoCache {
    slot: Option<(CacheKey, Arc<SyntaxInfo>)>,
    hits: u64,
    misses: u64,
}

impl SyntaxInfoCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached info for `key`, if the slot holds exactly that key.
    pub fn get(&mut self, key: &CacheKey) -> Option<Arc<SyntaxInfo>> {
        match &self.slot {
            Some((cached, info)) if cached == key => {
                self.hits += 1;
                Some(Arc::clone(info))
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Replace the slot.
    pub fn insert(&mut self, key: CacheKey, info: Arc<SyntaxInfo>) {
        self.slot = Some((key, info));
    }

    /// Drop the cached entry (e.g. after overlay highlights changed).
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// `(hits, misses)` since creation.
    #[must_use]
    pub const fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
