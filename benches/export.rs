//! Export pipeline benchmarks: collection, rendering and the cached path.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use richcopy::{
    ColorScheme, Document, ExportSettings, Exporter, Highlight, Layer, OverlayModel,
    RenderOptions, Rgb, Selection, TextStyle, Token, TokenHighlighter, TokenKind,
    collect_syntax_info, render_html, render_rtf,
};
use std::hint::black_box;

const KEYWORDS: [&str; 4] = ["fn", "let", "return", "pub"];

fn build_source(lines: usize) -> String {
    let line = "    pub fn example() { let x = compute(42); return x; }\n";
    let mut text = String::with_capacity(lines * line.len());
    for _ in 0..lines {
        text.push_str(line);
    }
    text
}

fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let start = pos;
        let kind = if chars[pos].is_whitespace() {
            while pos < chars.len() && chars[pos].is_whitespace() {
                pos += 1;
            }
            TokenKind::Text
        } else if chars[pos].is_alphanumeric() {
            while pos < chars.len() && chars[pos].is_alphanumeric() {
                pos += 1;
            }
            let word: String = chars[start..pos].iter().collect();
            if KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else if word.chars().all(|c| c.is_ascii_digit()) {
                TokenKind::Number
            } else {
                TokenKind::Identifier
            }
        } else {
            pos += 1;
            TokenKind::Punctuation
        };
        tokens.push(Token::new(kind, start, pos));
    }
    tokens
}

/// Mark every `x` as a local variable.
fn overlay(tokens: &[Token], doc: &Document) -> OverlayModel {
    let style = TextStyle::fg(Rgb::new(0x66, 0x0e, 0x7a));
    OverlayModel::new(
        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier && doc.char_at(t.start) == Some('x'))
            .map(|t| Highlight::new(t.range(), Layer::AdditionalSyntax, style))
            .collect(),
    )
}

fn bench_collect(c: &mut Criterion) {
    let scheme = ColorScheme::classic();
    let mut group = c.benchmark_group("export_collect");
    for lines in [100, 1_000, 10_000] {
        let text = build_source(lines);
        let doc = Document::from_str(&text);
        let tokens = tokenize(&text);
        let fields = overlay(&tokens, &doc);
        let lexer = TokenHighlighter::new(tokens);
        let selection = Selection::Linear(0..doc.len_chars());
        group.bench_with_input(BenchmarkId::new("lines", lines), &selection, |b, selection| {
            b.iter(|| {
                collect_syntax_info(&doc, black_box(selection), &[&lexer, &fields], &scheme, true)
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let scheme = ColorScheme::classic();
    let text = build_source(1_000);
    let doc = Document::from_str(&text);
    let lexer = TokenHighlighter::new(tokenize(&text));
    let selection = Selection::Linear(0..doc.len_chars());
    let Ok(info) = collect_syntax_info(&doc, &selection, &[&lexer], &scheme, true) else {
        return;
    };
    let raw = selection.plain_text(&doc);

    let mut group = c.benchmark_group("export_render_1k_lines");
    group.bench_function("rtf", |b| {
        b.iter(|| render_rtf(black_box(&info), Some(&raw)));
    });
    group.bench_function("html", |b| {
        b.iter(|| render_html(black_box(&info), Some(&raw), RenderOptions::default()));
    });
    group.finish();
}

fn bench_block_selection(c: &mut Criterion) {
    let scheme = ColorScheme::classic();
    let text = build_source(1_000);
    let doc = Document::from_str(&text);
    let lexer = TokenHighlighter::new(tokenize(&text));
    let rows = (0..doc.len_lines().saturating_sub(1))
        .map(|line| {
            let start = doc.line_start(line);
            (start + 4).min(doc.line_end(line))..(start + 30).min(doc.line_end(line))
        })
        .collect();
    let selection = Selection::Block { rows, width: 26 };

    c.bench_function("export_collect_block_1k_rows", |b| {
        b.iter(|| collect_syntax_info(&doc, black_box(&selection), &[&lexer], &scheme, false));
    });
}

fn bench_cached_export(c: &mut Criterion) {
    let active = ColorScheme::classic();
    let text = build_source(1_000);
    let doc = Document::from_str(&text);
    let lexer = TokenHighlighter::new(tokenize(&text));
    let selection = Selection::Linear(0..doc.len_chars());
    let mut exporter = Exporter::new(ExportSettings::default());
    let _ = exporter.export(&doc, &selection, &[&lexer], &active);

    c.bench_function("export_cached_hit", |b| {
        b.iter(|| exporter.export(&doc, black_box(&selection), &[&lexer], &active));
    });
}

criterion_group!(
    benches,
    bench_collect,
    bench_render,
    bench_block_selection,
    bench_cached_export
);
criterion_main!(benches);
