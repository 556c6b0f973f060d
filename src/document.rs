//! Rope-backed document text.
//!
//! All offsets are char indices, the coordinate space segment sources and
//! selections use.

use ropey::{Rope, RopeSlice};
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

fn next_document_id() -> u64 {
    NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Document text with an identity and a revision counter.
///
/// The revision increments on every content change. Together with the id it
/// is part of the cache key for computed syntax info. Clones get a fresh id
/// since they may diverge afterwards.
#[derive(Debug)]
pub struct Document {
    id: u64,
    rope: Rope,
    revision: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::from_str("")
    }
}

impl Clone for Document {
    fn clone(&self) -> Self {
        Self {
            id: next_document_id(),
            rope: self.rope.clone(),
            revision: self.revision,
        }
    }
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a string.
    #[must_use]
    pub fn from_str(text: &str) -> Self {
        Self {
            id: next_document_id(),
            rope: Rope::from_str(text),
            revision: 0,
        }
    }

    /// Replace the entire contents.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.revision += 1;
    }

    /// Insert text at a char position. Out-of-range positions are ignored.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if char_idx <= self.len_chars() {
            self.rope.insert(char_idx, text);
            self.revision += 1;
        }
    }

    /// Remove a char range, clamped to the document.
    pub fn remove(&mut self, range: Range<usize>) {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        if start < end {
            self.rope.remove(start..end);
            self.revision += 1;
        }
    }

    /// Process-unique document id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Content revision (increments on content changes).
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Number of lines.
    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Char at an index.
    #[must_use]
    pub fn char_at(&self, char_idx: usize) -> Option<char> {
        self.rope.get_char(char_idx)
    }

    /// Slice of a char range, clamped to the document.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> RopeSlice<'_> {
        let end = range.end.min(self.len_chars());
        let start = range.start.min(end);
        self.rope.slice(start..end)
    }

    /// Chars of a range, clamped to the document.
    pub fn chars(&self, range: Range<usize>) -> impl Iterator<Item = char> + '_ {
        self.slice(range).chars()
    }

    /// True if the range holds only spaces, tabs and line terminators.
    #[must_use]
    pub fn is_whitespace_only(&self, range: Range<usize>) -> bool {
        self.chars(range).all(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
    }

    /// Line index containing a char.
    #[must_use]
    pub fn line_of(&self, char_idx: usize) -> usize {
        self.rope.char_to_line(char_idx.min(self.len_chars()))
    }

    /// Char index at the start of a line.
    #[must_use]
    pub fn line_start(&self, line_idx: usize) -> usize {
        if line_idx >= self.len_lines() {
            self.len_chars()
        } else {
            self.rope.line_to_char(line_idx)
        }
    }

    /// Char index at the end of a line, before its terminator.
    #[must_use]
    pub fn line_end(&self, line_idx: usize) -> usize {
        if line_idx >= self.len_lines() {
            return self.len_chars();
        }
        let line = self.rope.line(line_idx);
        let mut len = line.len_chars();
        while len > 0 && matches!(line.char(len - 1), '\n' | '\r') {
            len -= 1;
        }
        self.rope.line_to_char(line_idx) + len
    }

    /// First char of a line that is neither a space nor a tab, or `None` for
    /// a blank line.
    #[must_use]
    pub fn first_non_whitespace(&self, line_idx: usize) -> Option<usize> {
        let start = self.line_start(line_idx);
        let end = self.line_end(line_idx);
        self.chars(start..end)
            .position(|c| c != ' ' && c != '\t')
            .map(|pos| start + pos)
    }

    /// Get access to the underlying rope.
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_basic() {
        let doc = Document::from_str("Hello, world!");
        assert_eq!(doc.len_chars(), 13);
        assert_eq!(doc.len_lines(), 1);
        assert_eq!(doc.char_at(4), Some('o'));
        assert_eq!(doc.char_at(13), None);
    }

    #[test]
    fn test_lines() {
        let doc = Document::from_str("ab\n  cd\r\n\nx");
        assert_eq!(doc.line_of(0), 0);
        assert_eq!(doc.line_of(3), 1);
        assert_eq!(doc.line_start(1), 3);
        assert_eq!(doc.line_end(1), 7);
        assert_eq!(doc.line_end(2), 9);
        assert_eq!(doc.line_start(99), doc.len_chars());
    }

    #[test]
    fn test_first_non_whitespace() {
        let doc = Document::from_str("  \t x\n   \nnope");
        assert_eq!(doc.first_non_whitespace(0), Some(4));
        assert_eq!(doc.first_non_whitespace(1), None);
        assert_eq!(doc.first_non_whitespace(2), Some(10));
    }

    #[test]
    fn test_whitespace_only() {
        let doc = Document::from_str("a \t\n b");
        assert!(doc.is_whitespace_only(1..4));
        assert!(!doc.is_whitespace_only(0..2));
        assert!(doc.is_whitespace_only(3..3));

        let crlf = Document::from_str("a\r\nb");
        assert!(crlf.is_whitespace_only(1..3));
    }

    #[test]
    fn test_revision_bumps() {
        let mut doc = Document::from_str("abc");
        assert_eq!(doc.revision(), 0);
        doc.insert(1, "x");
        assert_eq!(doc.revision(), 1);
        doc.remove(0..2);
        assert_eq!(doc.revision(), 2);
        doc.remove(5..9);
        assert_eq!(doc.revision(), 2);
        doc.set_text("new");
        assert_eq!(doc.revision(), 3);
        assert_eq!(doc.slice(0..3).to_string(), "new");
    }

    #[test]
    fn test_clone_gets_fresh_id() {
        let doc = Document::from_str("abc");
        let copy = doc.clone();
        assert_ne!(doc.id(), copy.id());
        assert_eq!(doc.revision(), copy.revision());
    }
}
