//! Font styles and text styles.
//!
//! - [`FontStyle`]: Bitflags for bold and italic
//! - [`TextStyle`]: Colors plus font style, as attached to a token kind or an
//!   overlay highlight
//! - [`TextStyleBuilder`]: Fluent builder for constructing styles
//!
//! # Examples
//!
//! ```
//! use richcopy::{FontStyle, Rgb, TextStyle};
//!
//! let keyword = TextStyle::fg(Rgb::new(0, 0, 128)).with_bold();
//! assert!(keyword.font_style.contains(FontStyle::BOLD));
//!
//! let error = TextStyle::builder().bg(Rgb::new(255, 220, 220)).italic().build();
//! assert_eq!(error.fg, None);
//! ```

use crate::color::Rgb;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Font style bitmask. The empty set is the plain style.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct FontStyle: u8 {
        /// Bold face.
        const BOLD   = 0x01;
        /// Italic face.
        const ITALIC = 0x02;
    }
}

impl FontStyle {
    /// Plain style (neither bold nor italic).
    pub const PLAIN: Self = Self::empty();

    /// True for the plain style.
    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.is_empty()
    }

    #[must_use]
    pub const fn is_bold(self) -> bool {
        self.contains(Self::BOLD)
    }

    #[must_use]
    pub const fn is_italic(self) -> bool {
        self.contains(Self::ITALIC)
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_bold(), self.is_italic()) {
            (false, false) => f.write_str("plain"),
            (true, false) => f.write_str("bold"),
            (false, true) => f.write_str("italic"),
            (true, true) => f.write_str("bold italic"),
        }
    }
}

/// Colors and font style attached to a piece of text.
///
/// `None` for a color means "use the scheme default".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    /// Foreground color (None = scheme default).
    pub fg: Option<Rgb>,
    /// Background color (None = scheme default).
    pub bg: Option<Rgb>,
    /// Bold / italic flags.
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Empty style with no colors and the plain font style.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        font_style: FontStyle::PLAIN,
    };

    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> TextStyleBuilder {
        TextStyleBuilder::default()
    }

    /// Create a style with only foreground color.
    #[must_use]
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..Self::NONE
        }
    }

    /// Create a style with only background color.
    #[must_use]
    pub const fn bg(color: Rgb) -> Self {
        Self {
            bg: Some(color),
            ..Self::NONE
        }
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            font_style: FontStyle::BOLD,
            ..Self::NONE
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgb) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with bold added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self {
            font_style: self.font_style.union(FontStyle::BOLD),
            ..self
        }
    }

    /// Return a new style with italic added.
    #[must_use]
    pub const fn with_italic(self) -> Self {
        Self {
            font_style: self.font_style.union(FontStyle::ITALIC),
            ..self
        }
    }

    /// True when the style carries no information beyond the given scheme
    /// defaults: colors unset or equal to the defaults, and a plain face.
    #[must_use]
    pub fn is_uninformative(&self, default_fg: Rgb, default_bg: Rgb) -> bool {
        self.fg.is_none_or(|c| c == default_fg)
            && self.bg.is_none_or(|c| c == default_bg)
            && self.font_style.is_plain()
    }
}

/// Builder for creating styles fluently.
#[derive(Clone, Debug, Default)]
pub struct TextStyleBuilder {
    style: TextStyle,
}

impl TextStyleBuilder {
    /// Set foreground color.
    #[must_use]
    pub fn fg(mut self, color: Rgb) -> Self {
        self.style.fg = Some(color);
        self
    }

    /// Set background color.
    #[must_use]
    pub fn bg(mut self, color: Rgb) -> Self {
        self.style.bg = Some(color);
        self
    }

    /// Add bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.font_style |= FontStyle::BOLD;
        self
    }

    /// Add italic.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.style.font_style |= FontStyle::ITALIC;
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> TextStyle {
        self.style
    }
}
