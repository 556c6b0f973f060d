//! The immutable export recipe.

use crate::color::Rgb;
use crate::error::Result;
use crate::op::Operation;
use crate::registry::{ColorRegistry, FontNameRegistry, Id};
use std::fmt;

/// Operation stream plus the sealed registries it refers to.
///
/// Built once by the encoder and then only read; share it with `Arc` and
/// render it as often as needed.
#[derive(Clone, Debug)]
pub struct SyntaxInfo {
    ops: Vec<Operation>,
    colors: ColorRegistry,
    fonts: FontNameRegistry,
    default_foreground: Id,
    default_background: Id,
    single_font_size: Option<u16>,
}

impl SyntaxInfo {
    /// Assemble a syntax info. The registries are sealed here.
    #[must_use]
    pub fn new(
        ops: Vec<Operation>,
        mut colors: ColorRegistry,
        mut fonts: FontNameRegistry,
        default_foreground: Id,
        default_background: Id,
        single_font_size: Option<u16>,
    ) -> Self {
        colors.seal();
        fonts.seal();
        Self {
            ops,
            colors,
            fonts,
            default_foreground,
            default_background,
            single_font_size,
        }
    }

    #[must_use]
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    #[must_use]
    pub const fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    #[must_use]
    pub const fn fonts(&self) -> &FontNameRegistry {
        &self.fonts
    }

    /// Color id of the scheme's default foreground.
    #[must_use]
    pub const fn default_foreground(&self) -> Id {
        self.default_foreground
    }

    /// Color id of the scheme's default background.
    #[must_use]
    pub const fn default_background(&self) -> Id {
        self.default_background
    }

    /// The font size, if every styled segment used the same one.
    #[must_use]
    pub const fn single_font_size(&self) -> Option<u16> {
        self.single_font_size
    }

    /// Resolve a color id.
    pub fn color(&self, id: Id) -> Result<Rgb> {
        self.colors.data_by_id(id).copied()
    }

    /// Resolve a font-name id.
    pub fn font_name(&self, id: Id) -> Result<&str> {
        self.fonts.data_by_id(id).map(String::as_str)
    }

    /// End of the furthest `Text` operation: the raw text must be at least
    /// this many chars long.
    #[must_use]
    pub fn text_extent(&self) -> usize {
        self.ops
            .iter()
            .filter_map(Operation::text_range)
            .map(|r| r.end)
            .max()
            .unwrap_or(0)
    }

    /// True if the stream contains no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self
            .ops
            .iter()
            .any(|op| op.text_range().is_some_and(|r| r.start < r.end))
    }
}

impl fmt::Display for SyntaxInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "colors:")?;
        for (id, color) in self.colors.iter() {
            writeln!(f, "  {id}: {color}")?;
        }
        writeln!(f, "fonts:")?;
        for (id, name) in self.fonts.iter() {
            writeln!(f, "  {id}: {name}")?;
        }
        writeln!(
            f,
            "default foreground: {}, default background: {}",
            self.default_foreground, self.default_background
        )?;
        writeln!(f, "operations:")?;
        for op in &self.ops {
            writeln!(f, "  {op}")?;
        }
        Ok(())
    }
}
