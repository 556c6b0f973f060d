//! Style diff encoder: merged segments to a minimal operation stream.
//!
//! The encoder walks merged segments region by region. Each style change
//! flushes the text accumulated since the previous change as `Text`
//! operations, then emits one operation per changed attribute, always in the
//! order background, foreground, font family, font style, font size.
//! Whitespace-only segments never change the style; their text simply joins
//! the pending run.

use crate::color::Rgb;
use crate::document::Document;
use crate::error::Result;
use crate::indent::IndentPlan;
use crate::op::Operation;
use crate::registry::{ColorRegistry, FontNameRegistry};
use crate::segment::Segment;
use crate::style::FontStyle;
use crate::syntax_info::SyntaxInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FontSizeUsage {
    Unused,
    Single(u16),
    Mixed,
}

impl FontSizeUsage {
    fn record(&mut self, size: u16) {
        *self = match *self {
            Self::Unused => Self::Single(size),
            Self::Single(seen) if seen == size => Self::Single(seen),
            _ => Self::Mixed,
        };
    }

    const fn single(self) -> Option<u16> {
        match self {
            Self::Single(size) => Some(size),
            _ => None,
        }
    }
}

/// Accumulates operations for one export.
pub struct StyleEncoder<'d> {
    doc: &'d Document,
    ops: Vec<Operation>,
    colors: ColorRegistry,
    fonts: FontNameRegistry,
    default_fg: Rgb,
    default_bg: Rgb,

    // Values as last emitted; None until first emission.
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    font_family: Option<String>,
    font_style: Option<FontStyle>,
    font_size: Option<u16>,
    sizes: FontSizeUsage,

    pending_start: usize,
    // Document offset + shift = pasted-text offset.
    shift: isize,
    indent: Option<IndentPlan>,
    line: usize,
    strip_budget: usize,
}

impl<'d> StyleEncoder<'d> {
    #[must_use]
    pub fn new(doc: &'d Document, default_fg: Rgb, default_bg: Rgb) -> Self {
        Self {
            doc,
            ops: Vec::new(),
            colors: ColorRegistry::new("color"),
            fonts: FontNameRegistry::new("font name"),
            default_fg,
            default_bg,
            fg: None,
            bg: None,
            font_family: None,
            font_style: None,
            font_size: None,
            sizes: FontSizeUsage::Unused,
            pending_start: 0,
            shift: 0,
            indent: None,
            line: 0,
            strip_budget: 0,
        }
    }

    /// Strip leading indentation per `plan` from lines after the first.
    #[must_use]
    pub fn with_indent_plan(mut self, plan: IndentPlan) -> Self {
        self.indent = Some(plan);
        self
    }

    /// Start a region at document offset `start`, mapped to pasted offset
    /// `start + shift`.
    pub fn begin_region(&mut self, start: usize, shift: isize) {
        self.pending_start = start;
        self.shift = shift;
        self.strip_budget = 0;
    }

    /// Emit the line feed separating two pasted regions, at pasted offset
    /// `at`.
    pub fn push_line_feed(&mut self, at: usize) {
        self.ops.push(Operation::text(at, at + 1));
    }

    /// Feed the next merged segment of the current region.
    pub fn add_segment(&mut self, segment: &Segment) -> Result<()> {
        if self.doc.is_whitespace_only(segment.range.clone()) {
            return Ok(());
        }
        let at = segment.start();
        self.process_background(segment.bg, at)?;
        self.process_foreground(segment.fg, at)?;
        self.process_font_family(&segment.font_family, at)?;
        self.process_font_style(segment.font_style, at);
        self.process_font_size(segment.font_size, at);
        Ok(())
    }

    /// Flush the rest of the current region, up to document offset `end`.
    pub fn end_region(&mut self, end: usize) {
        self.add_text_if_possible(end);
    }

    /// Register the defaults, seal the registries and build the recipe.
    pub fn finish(mut self) -> Result<SyntaxInfo> {
        let default_fg = self.colors.get_id(&self.default_fg)?;
        let default_bg = self.colors.get_id(&self.default_bg)?;
        Ok(SyntaxInfo::new(
            self.ops,
            self.colors,
            self.fonts,
            default_fg,
            default_bg,
            self.sizes.single(),
        ))
    }

    fn process_background(&mut self, bg: Option<Rgb>, at: usize) -> Result<()> {
        let Some(next) = effective(self.bg, bg, self.default_bg) else {
            return Ok(());
        };
        self.add_text_if_possible(at);
        let id = self.colors.get_id(&next)?;
        self.ops.push(Operation::Background(id));
        self.bg = Some(next);
        Ok(())
    }

    fn process_foreground(&mut self, fg: Option<Rgb>, at: usize) -> Result<()> {
        let Some(next) = effective(self.fg, fg, self.default_fg) else {
            return Ok(());
        };
        self.add_text_if_possible(at);
        let id = self.colors.get_id(&next)?;
        self.ops.push(Operation::Foreground(id));
        self.fg = Some(next);
        Ok(())
    }

    fn process_font_family(&mut self, family: &str, at: usize) -> Result<()> {
        if self.font_family.as_deref() == Some(family) {
            return Ok(());
        }
        self.add_text_if_possible(at);
        let id = self.fonts.get_id(&family.to_string())?;
        self.ops.push(Operation::FontFamily(id));
        self.font_family = Some(family.to_string());
        Ok(())
    }

    fn process_font_style(&mut self, style: FontStyle, at: usize) {
        if self.font_style == Some(style) {
            return;
        }
        self.add_text_if_possible(at);
        self.ops.push(Operation::FontStyle(style));
        self.font_style = Some(style);
    }

    fn process_font_size(&mut self, size: u16, at: usize) {
        self.sizes.record(size);
        if self.font_size == Some(size) {
            return;
        }
        self.add_text_if_possible(at);
        self.ops.push(Operation::FontSize(size));
        self.font_size = Some(size);
    }

    fn pasted(&self, offset: usize) -> usize {
        offset.saturating_add_signed(self.shift)
    }

    /// Flush pending text up to document offset `end`, splitting at line
    /// feeds and dropping stripped indentation.
    fn add_text_if_possible(&mut self, end: usize) {
        if end <= self.pending_start {
            return;
        }
        let doc = self.doc;
        let start = self.pending_start;
        for (idx, ch) in doc.chars(start..end).enumerate() {
            let pos = start + idx;
            match ch {
                '\n' => {
                    let text = Operation::text(self.pasted(self.pending_start), self.pasted(pos + 1));
                    self.ops.push(text);
                    self.pending_start = pos + 1;
                    self.line += 1;
                    self.strip_budget = self
                        .indent
                        .as_ref()
                        .map_or(0, |plan| plan.strip_for(self.line));
                }
                ' ' | '\t' if self.strip_budget > 0 => {
                    self.strip_budget -= 1;
                    self.pending_start = pos + 1;
                }
                _ => self.strip_budget = 0,
            }
        }
        if self.pending_start < end {
            let text = Operation::text(self.pasted(self.pending_start), self.pasted(end));
            self.ops.push(text);
        }
        self.pending_start = end;
    }
}

/// The color to emit, if the channel changes.
///
/// While nothing has been emitted an unset color stays silent; afterwards
/// unset means the scheme default.
fn effective(current: Option<Rgb>, requested: Option<Rgb>, default: Rgb) -> Option<Rgb> {
    match current {
        None => requested,
        Some(current) => Some(requested.unwrap_or(default)).filter(|next| *next != current),
    }
}
