//! Lexical segment source over pre-computed tokens.

use super::fallback::{FontFallback, SingleFont, split_by_font};
use super::{SegmentSource, StyleProvider, next_generation};
use crate::document::Document;
use crate::scheme::ColorScheme;
use std::ops::Range;

/// Semantic token categories used by lexers and color schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Keyword,
    KeywordControl,
    KeywordType,
    KeywordModifier,

    // Literals
    String,
    StringEscape,
    Number,
    Boolean,

    // Identifiers
    Identifier,
    Type,
    Constant,
    Function,
    Macro,

    // Comments
    Comment,
    CommentBlock,
    CommentDoc,

    // Operators and punctuation
    Operator,
    Punctuation,
    Delimiter,

    // Special
    Attribute,
    Lifetime,
    Label,

    /// Characters the lexer could not classify. Never exported with styling.
    Error,

    // Whitespace and plain text
    Text,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = 24;

    /// Dense index for per-kind tables.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }
}

/// A token produced by a lexer, over document char offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "token range must be start <= end");
        Self { kind, start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Lexical style provider: tokens styled through the export's scheme.
///
/// Tokens must be sorted by start and must not overlap. `Error` tokens are
/// skipped, so their text is exported with whatever style is already active.
pub struct TokenHighlighter {
    tokens: Vec<Token>,
    fallback: Box<dyn FontFallback + Send + Sync>,
    generation: u64,
}

impl TokenHighlighter {
    /// Create a highlighter using the scheme's font for every char.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            fallback: Box::new(SingleFont),
            generation: next_generation(),
        }
    }

    /// Replace the font fallback used to split tokens.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl FontFallback + Send + Sync + 'static) -> Self {
        self.fallback = Box::new(fallback);
        self.generation = next_generation();
        self
    }

    /// Replace the tokens after the lexer re-ran.
    pub fn set_tokens(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
        self.generation = next_generation();
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl StyleProvider for TokenHighlighter {
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
        let first = self.tokens.partition_point(|t| t.end <= start);
        let batches = self.tokens[first..]
            .iter()
            .take_while(move |t| t.start < end)
            .filter(|t| t.kind != TokenKind::Error && !t.is_empty())
            .map(move |t| {
                split_by_font(
                    doc,
                    t.start.max(start)..t.end.min(end),
                    scheme.style_for(t.kind),
                    scheme.font_family(),
                    scheme.font_size(),
                    self.fallback.as_ref(),
                )
            })
            .filter(|batch| !batch.is_empty());
        Box::new(batches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::segment::Segment;
    use crate::style::TextStyle;

    fn drain(mut source: Box<dyn SegmentSource + '_>) -> Vec<Vec<Segment>> {
        let mut out = Vec::new();
        while let Some(batch) = source.next_batch() {
            out.push(batch);
        }
        out
    }

    #[test]
    fn test_token_construction_and_accessors() {
        let sample = Token::new(TokenKind::Keyword, 2, 8);
        assert_eq!(sample.len(), 6);
        assert!(!sample.is_empty());
        assert_eq!(sample.range(), 2..8);
        assert!(Token::new(TokenKind::Text, 5, 5).is_empty());
    }

    #[test]
    fn test_count_covers_every_kind() {
        assert_eq!(TokenKind::Text.as_usize(), TokenKind::COUNT - 1);
    }

    #[test]
    fn test_highlighter_styles_tokens() {
        let doc = Document::from_str("let x");
        let scheme = ColorScheme::new("Test")
            .with_style(TokenKind::Keyword, TextStyle::fg(Rgb::BLUE).with_bold());
        let hl = TokenHighlighter::new(vec![
            Token::new(TokenKind::Keyword, 0, 3),
            Token::new(TokenKind::Text, 3, 4),
            Token::new(TokenKind::Identifier, 4, 5),
        ]);
        let batches = drain(hl.open(&doc, &scheme, 0..5));
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0][0].fg, Some(Rgb::BLUE));
        assert!(batches[0][0].font_style.is_bold());
        assert_eq!(batches[2][0].fg, None);
        assert_eq!(batches[2][0].font_family, "Monospaced");
    }

    #[test]
    fn test_highlighter_skips_error_tokens_and_clips() {
        let doc = Document::from_str("abc#def");
        let scheme = ColorScheme::new("Test");
        let hl = TokenHighlighter::new(vec![
            Token::new(TokenKind::Identifier, 0, 3),
            Token::new(TokenKind::Error, 3, 4),
            Token::new(TokenKind::Identifier, 4, 7),
        ]);
        let batches = drain(hl.open(&doc, &scheme, 1..6));
        let ranges: Vec<_> = batches.iter().map(|b| b[0].range.clone()).collect();
        assert_eq!(ranges, vec![1..3, 4..6]);
    }

    #[test]
    fn test_highlighter_window_past_tokens() {
        let doc = Document::from_str("abc");
        let scheme = ColorScheme::new("Test");
        let hl = TokenHighlighter::new(vec![Token::new(TokenKind::Identifier, 0, 3)]);
        assert!(drain(hl.open(&doc, &scheme, 3..3)).is_empty());
    }

    #[test]
    fn test_set_tokens_bumps_generation() {
        let mut hl = TokenHighlighter::new(vec![Token::new(TokenKind::Identifier, 0, 3)]);
        let before = hl.generation();
        hl.set_tokens(vec![Token::new(TokenKind::Keyword, 0, 3)]);
        assert_ne!(hl.generation(), before);
        assert_eq!(hl.tokens()[0].kind, TokenKind::Keyword);
    }
}
