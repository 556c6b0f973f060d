#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use richcopy::{
    ColorScheme, Document, Highlight, Layer, OverlayModel, Rgb, TextStyle, Token,
    TokenHighlighter, TokenKind,
};
use std::sync::Once;

/// Route pipeline tracing to the test writer, once per test binary.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Java getter used across the construction and renderer tests.
pub const GETTER_SAMPLE: &str = concat!(
    "package org;\n",
    "\n",
    "public class TestClass {\n",
    "\n",
    "    int field;\n",
    "\n",
    "    public int getField() {\n",
    "        return field;\n",
    "    }\n",
    "}",
);

const KEYWORDS: &[&str] = &["package", "public", "class", "int", "return"];

/// Instance-field color in the overlay.
pub const FIELD: Rgb = Rgb::new(0x66, 0x0e, 0x7a);

/// Minimal lexer: whitespace runs, words (keywords or identifiers), single
/// punctuation chars; `#` is an unrecognized char.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let start = pos;
        let ch = chars[pos];
        let kind = if ch.is_whitespace() {
            while pos < chars.len() && chars[pos].is_whitespace() {
                pos += 1;
            }
            TokenKind::Text
        } else if ch.is_alphanumeric() || ch == '_' {
            while pos < chars.len() && (chars[pos].is_alphanumeric() || chars[pos] == '_') {
                pos += 1;
            }
            let word: String = chars[start..pos].iter().collect();
            if KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            }
        } else {
            pos += 1;
            if ch == '#' {
                TokenKind::Error
            } else {
                TokenKind::Punctuation
            }
        };
        tokens.push(Token::new(kind, start, pos));
    }
    tokens
}

/// Overlay marking every identifier named `field` as an instance field.
pub fn field_overlay(text: &str) -> OverlayModel {
    let highlights = tokenize(text)
        .into_iter()
        .filter(|t| t.kind == TokenKind::Identifier)
        .filter(|t| text.chars().skip(t.start).take(t.len()).eq("field".chars()))
        .map(|t| {
            Highlight::new(
                t.range(),
                Layer::AdditionalSyntax,
                TextStyle::fg(FIELD).with_bold(),
            )
        })
        .collect();
    OverlayModel::new(highlights)
}

/// Document, lexer and overlay for a text.
pub fn fixture(text: &str) -> (Document, TokenHighlighter, OverlayModel) {
    (
        Document::from_str(text),
        TokenHighlighter::new(tokenize(text)),
        field_overlay(text),
    )
}

pub fn scheme() -> ColorScheme {
    ColorScheme::classic()
}

/// Char offset of the first occurrence of `needle` at or after `from`.
pub fn find(text: &str, needle: &str, from: usize) -> usize {
    let byte_from = text.char_indices().nth(from).map_or(text.len(), |(b, _)| b);
    let byte = text[byte_from..]
        .find(needle)
        .map(|b| b + byte_from)
        .expect("needle present");
    text[..byte].chars().count()
}

/// Concatenate the raw-text slices addressed by `Text` operations.
pub fn pasted(ops: &[richcopy::Operation], raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    ops.iter()
        .filter_map(richcopy::Operation::text_range)
        .flat_map(|r| chars[r].iter().copied().collect::<Vec<_>>())
        .collect()
}
