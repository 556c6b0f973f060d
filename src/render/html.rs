//! HTML renderer.
//!
//! Produces a bordered `<pre>` block carrying the default colors, with
//! inline-styled `<span>`s for runs that differ from those defaults.

use super::{ActiveAttributes, RenderOptions, checked_chars};
use crate::error::Result;
use crate::op::Operation;
use crate::syntax_info::SyntaxInfo;
use std::fmt::Write;

/// Render `info` over `raw` as an HTML fragment.
pub fn render_html(info: &SyntaxInfo, raw: Option<&str>, options: RenderOptions) -> Result<String> {
    let chars = checked_chars(info, raw)?;
    let mut writer = HtmlWriter::new(info, options);
    writer.write_block(&chars)?;
    Ok(writer.out)
}

struct HtmlWriter<'a> {
    info: &'a SyntaxInfo,
    options: RenderOptions,
    out: String,
    active: ActiveAttributes,
    // Style of the open span, if any.
    open_span: Option<String>,
    hoist_font: bool,
    hoist_size: bool,
}

impl<'a> HtmlWriter<'a> {
    fn new(info: &'a SyntaxInfo, options: RenderOptions) -> Self {
        Self {
            info,
            options,
            out: String::with_capacity(1024),
            active: ActiveAttributes::default(),
            open_span: None,
            hoist_font: info.fonts().len() == 1,
            hoist_size: info.single_font_size().is_some_and(|size| size > 0),
        }
    }

    fn write_block(&mut self, chars: &[char]) -> Result<()> {
        let bg = self.info.color(self.info.default_background())?.to_css();
        let fg = self.info.color(self.info.default_foreground())?.to_css();

        self.out
            .push_str("<div style=\"border:1px inset;padding:2%;\">");
        let _ = write!(
            self.out,
            "<pre style=\"margin:0;padding:6px;background-color:{bg};color:{fg};"
        );
        if let Some((_, name)) = self.info.fonts().iter().next().filter(|_| self.hoist_font) {
            let _ = write!(self.out, "font-family:'{}';", escape_attr(name));
        }
        if let Some(size) = self.info.single_font_size().filter(|_| self.hoist_size) {
            let _ = write!(self.out, "font-size:{size}pt;");
        }
        let _ = write!(self.out, "\" bgcolor=\"{bg}\">");

        let info = self.info;
        for op in info.ops() {
            self.active.apply(op);
            if let Operation::Text { start, end } = *op {
                if start < end {
                    self.write_run(&chars[start..end])?;
                }
            }
        }
        self.close_span();
        self.out.push_str("</pre></div>");
        Ok(())
    }

    fn write_run(&mut self, text: &[char]) -> Result<()> {
        let style = self.run_style()?;
        if self.open_span.as_deref() != Some(style.as_str()) {
            self.close_span();
            if !style.is_empty() {
                let _ = write!(self.out, "<span style=\"{style}\">");
                self.open_span = Some(style);
            }
        }
        for &ch in text {
            match ch {
                '<' => self.out.push_str("&lt;"),
                '>' => self.out.push_str("&gt;"),
                '&' => self.out.push_str("&amp;"),
                '\n' if self.options.html_line_breaks => self.out.push_str("<br>"),
                c => self.out.push(c),
            }
        }
        Ok(())
    }

    fn close_span(&mut self) {
        if self.open_span.take().is_some() {
            self.out.push_str("</span>");
        }
    }

    /// CSS for the active attributes that differ from the block defaults.
    fn run_style(&self) -> Result<String> {
        let active = self.active;
        let mut style = String::new();
        if let Some(id) = active.fg.filter(|&id| id != self.info.default_foreground()) {
            let _ = write!(style, "color:{};", self.info.color(id)?.to_css());
        }
        if let Some(id) = active.bg.filter(|&id| id != self.info.default_background()) {
            let _ = write!(style, "background-color:{};", self.info.color(id)?.to_css());
        }
        if let Some(id) = active.font.filter(|_| !self.hoist_font) {
            let _ = write!(
                style,
                "font-family:'{}';",
                escape_attr(self.info.font_name(id)?)
            );
        }
        if let Some(size) = active.size.filter(|_| !self.hoist_size) {
            let _ = write!(style, "font-size:{size}pt;");
        }
        if active.style.is_bold() {
            style.push_str("font-weight:bold;");
        }
        if active.style.is_italic() {
            style.push_str("font-style:italic;");
        }
        Ok(style)
    }
}

/// Escape a value for a double-quoted attribute inside single CSS quotes.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}
