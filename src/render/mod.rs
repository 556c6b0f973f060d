//! Renderers turning a [`SyntaxInfo`] plus the raw pasted text into markup.
//!
//! Rendering is a pure function of its inputs. Every `Text` operation is
//! checked against the raw text before any output is produced.

mod html;
mod rtf;

pub use html::render_html;
pub use rtf::{render_rtf, write_rtf};

use crate::error::{Error, Result};
use crate::op::Operation;
use crate::registry::Id;
use crate::style::FontStyle;
use crate::syntax_info::SyntaxInfo;
use std::fmt;

/// Rich-text output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flavor {
    Rtf,
    Html,
}

impl Flavor {
    /// MIME type a clipboard advertises this flavor under.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Rtf => "text/rtf",
            Self::Html => "text/html",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rtf => f.write_str("RTF"),
            Self::Html => f.write_str("HTML"),
        }
    }
}

/// Renderer options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Emit `<br>` instead of a literal line feed in HTML.
    pub html_line_breaks: bool,
}

/// Render `info` over `raw` in the given flavor.
pub fn render(
    info: &SyntaxInfo,
    raw: Option<&str>,
    flavor: Flavor,
    options: RenderOptions,
) -> Result<Vec<u8>> {
    match flavor {
        Flavor::Rtf => render_rtf(info, raw),
        Flavor::Html => render_html(info, raw, options).map(String::into_bytes),
    }
}

/// Raw text as chars, checked to cover every `Text` operation. Inverted
/// ranges are rejected too.
pub(crate) fn checked_chars(info: &SyntaxInfo, raw: Option<&str>) -> Result<Vec<char>> {
    let raw = raw.ok_or(Error::TextUnavailable)?;
    if let Some(range) = info
        .ops()
        .iter()
        .filter_map(Operation::text_range)
        .find(|r| r.start > r.end)
    {
        return Err(Error::InvalidTextRange {
            start: range.start,
            end: range.end,
        });
    }
    let chars: Vec<char> = raw.chars().collect();
    let needed = info.text_extent();
    if needed > chars.len() {
        return Err(Error::TextMismatch {
            needed,
            available: chars.len(),
        });
    }
    Ok(chars)
}

/// Attributes in effect while walking an operation stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ActiveAttributes {
    pub fg: Option<Id>,
    pub bg: Option<Id>,
    pub font: Option<Id>,
    pub style: FontStyle,
    pub size: Option<u16>,
}

impl ActiveAttributes {
    pub(crate) fn apply(&mut self, op: &Operation) {
        match *op {
            Operation::Text { .. } => {}
            Operation::Foreground(id) => self.fg = Some(id),
            Operation::Background(id) => self.bg = Some(id),
            Operation::FontFamily(id) => self.font = Some(id),
            Operation::FontStyle(style) => self.style = style,
            Operation::FontSize(size) => self.size = Some(size),
        }
    }
}
