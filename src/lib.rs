//! `richcopy` - Syntax-aware rich text export
//!
//! Turns a styled editor selection into RTF and HTML clipboard payloads.
//! Two style streams (lexical tokens and editor overlays) are merged into one
//! canonical segment sequence, diffed into a minimal operation stream over
//! interned colors and font names, and rendered by format-specific writers.
//!
//! # Example
//!
//! ```
//! use richcopy::{
//!     ColorScheme, Document, Exporter, ExportSettings, Selection, Token, TokenHighlighter,
//!     TokenKind,
//! };
//!
//! let doc = Document::from_str("fn main() {}");
//! let lexer = TokenHighlighter::new(vec![
//!     Token::new(TokenKind::Keyword, 0, 2),
//!     Token::new(TokenKind::Function, 3, 7),
//! ]);
//! let selection = Selection::Linear(0..12);
//!
//! let mut exporter = Exporter::new(ExportSettings::default());
//! let payloads = exporter
//!     .export(&doc, &selection, &[&lexer], &ColorScheme::classic())
//!     .unwrap();
//! let raw = selection.plain_text(&doc);
//! for payload in &payloads {
//!     let bytes = payload.render(Some(&raw)).unwrap();
//!     assert!(!bytes.is_empty());
//! }
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Char offsets fit the target types
#![allow(clippy::cast_sign_loss)] // Offsets are shifted through isize
#![allow(clippy::cast_possible_wrap)] // Offsets are shifted through isize
#![allow(clippy::module_name_repetitions)] // Allow render::render_rtf etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod cache;
pub mod color;
pub mod document;
pub mod encoder;
pub mod error;
pub mod indent;
pub mod merge;
pub mod op;
pub mod pipeline;
pub mod registry;
pub mod render;
pub mod scheme;
pub mod segment;
pub mod selection;
pub mod settings;
pub mod source;
pub mod style;
pub mod syntax_info;

// Re-export core types at crate root
pub use color::Rgb;
pub use document::Document;
pub use error::{Error, Result};
pub use op::{Channel, Operation};
pub use registry::{ColorRegistry, FontNameRegistry, Id, Registry};
pub use segment::Segment;
pub use style::{FontStyle, TextStyle, TextStyleBuilder};
pub use syntax_info::SyntaxInfo;

// Re-export pipeline types
pub use encoder::StyleEncoder;
pub use indent::IndentPlan;
pub use merge::{SegmentMerger, merge_segments};
pub use pipeline::{Exporter, Payload, collect_syntax_info};
pub use selection::Selection;

// Re-export collaborator boundary
pub use scheme::{ColorScheme, SchemeRegistry};
pub use source::{
    Highlight, Layer, OverlayModel, SegmentSource, StyleProvider, Token, TokenHighlighter,
    TokenKind,
};

// Re-export rendering and settings
pub use render::{Flavor, RenderOptions, render_html, render_rtf};
pub use settings::ExportSettings;
