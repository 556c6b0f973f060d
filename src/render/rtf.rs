//! RTF renderer.
//!
//! RTF resets every character attribute on `\plain`, so a font style change
//! re-emits the colors, font and size that were in effect before it.

use super::{ActiveAttributes, checked_chars};
use crate::error::Result;
use crate::op::Operation;
use crate::syntax_info::SyntaxInfo;
use std::io::Write;

/// Render `info` over `raw` as an RTF document.
pub fn render_rtf(info: &SyntaxInfo, raw: Option<&str>) -> Result<Vec<u8>> {
    let chars = checked_chars(info, raw)?;
    let mut encoder = RtfEncoder::new(info);
    encoder.write_document(&chars);
    Ok(encoder.buffer)
}

/// Render into an `io::Write` sink.
pub fn write_rtf<W: Write>(info: &SyntaxInfo, raw: Option<&str>, mut out: W) -> Result<()> {
    let bytes = render_rtf(info, raw)?;
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}

struct RtfEncoder<'a> {
    info: &'a SyntaxInfo,
    buffer: Vec<u8>,
    active: ActiveAttributes,
}

impl<'a> RtfEncoder<'a> {
    fn new(info: &'a SyntaxInfo) -> Self {
        Self {
            info,
            buffer: Vec::with_capacity(1024),
            // The enclosing box paints the default background.
            active: ActiveAttributes {
                bg: Some(info.default_background()),
                ..ActiveAttributes::default()
            },
        }
    }

    fn write_document(&mut self, chars: &[char]) {
        self.write_header();
        let fg = self.info.default_foreground();
        let bg = self.info.default_background();
        let _ = write!(
            self.buffer,
            "\n\\s0\\box\\brdrhair\\brdrcf{fg}\\brsp317\\cbpat{bg}\\cb{bg}"
        );
        let info = self.info;
        for op in info.ops() {
            self.write_op(op, chars);
        }
        self.buffer.extend_from_slice(b"\\par}");
    }

    fn write_header(&mut self) {
        self.buffer.extend_from_slice(b"{\\rtf1\\ansi\\deff0{\\colortbl;");
        for (_, color) in self.info.colors().iter() {
            let _ = write!(
                self.buffer,
                "\\red{}\\green{}\\blue{};",
                color.r, color.g, color.b
            );
        }
        self.buffer.extend_from_slice(b"}\n{\\fonttbl");
        for (id, name) in self.info.fonts().iter() {
            let _ = write!(self.buffer, "{{\\f{id} ");
            escape_into(&mut self.buffer, name.chars());
            self.buffer.extend_from_slice(b";}");
        }
        self.buffer.extend_from_slice(b"}\n");
    }

    fn write_op(&mut self, op: &Operation, chars: &[char]) {
        self.active.apply(op);
        match *op {
            Operation::Text { start, end } => {
                self.buffer.push(b'\n');
                escape_into(&mut self.buffer, chars[start..end].iter().copied());
            }
            Operation::Foreground(id) => self.write_foreground(id),
            Operation::Background(id) => self.write_background(id),
            Operation::FontFamily(id) => self.write_font(id),
            Operation::FontSize(size) => self.write_font_size(size),
            Operation::FontStyle(style) => {
                self.buffer.extend_from_slice(b"\\plain\n");
                let active = self.active;
                if let Some(id) = active.fg {
                    self.write_foreground(id);
                }
                if let Some(id) = active.bg {
                    self.write_background(id);
                }
                if let Some(id) = active.font {
                    self.write_font(id);
                }
                if let Some(size) = active.size.filter(|&s| s > 0) {
                    self.write_font_size(size);
                }
                if style.is_italic() {
                    self.buffer.extend_from_slice(b"\\i");
                }
                if style.is_bold() {
                    self.buffer.extend_from_slice(b"\\b");
                }
            }
        }
    }

    fn write_foreground(&mut self, id: u32) {
        let _ = write!(self.buffer, "\\cf{id}");
    }

    fn write_background(&mut self, id: u32) {
        let _ = write!(self.buffer, "\\cbpat{id}\\cb{id}");
    }

    fn write_font(&mut self, id: u32) {
        let _ = write!(self.buffer, "\\f{id}");
    }

    fn write_font_size(&mut self, size: u16) {
        // RTF sizes are in half-points.
        let _ = write!(self.buffer, "\\fs{}", u32::from(size) * 2);
    }
}

/// Escape text for an RTF body.
fn escape_into(buffer: &mut Vec<u8>, chars: impl Iterator<Item = char>) {
    for ch in chars {
        match ch {
            '\\' | '{' | '}' => {
                buffer.push(b'\\');
                buffer.push(ch as u8);
            }
            '\t' => buffer.extend_from_slice(b"\\tab "),
            '\n' => buffer.extend_from_slice(b"\\line\n"),
            '\r' => {}
            c if c.is_ascii() => buffer.push(c as u8),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(buffer, "\\u{}?", *unit as i16);
                }
            }
        }
    }
}
