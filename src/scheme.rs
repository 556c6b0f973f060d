//! Color schemes: editor defaults plus per-token-kind styles.

use crate::color::Rgb;
use crate::source::TokenKind;
use crate::style::TextStyle;
use std::collections::HashMap;

/// A color scheme mapping token kinds to styles, with the editor defaults
/// that "unset" colors and fonts resolve to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    name: String,
    styles: [Option<TextStyle>; TokenKind::COUNT],
    foreground: Rgb,
    background: Rgb,
    font_family: String,
    font_size: u16,
}

impl ColorScheme {
    /// Create a scheme with black on white and a 12pt monospaced font.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: [None; TokenKind::COUNT],
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
            font_family: "Monospaced".to_string(),
            font_size: 12,
        }
    }

    /// Scheme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Style for a token kind; unstyled kinds get [`TextStyle::NONE`].
    #[must_use]
    pub fn style_for(&self, kind: TokenKind) -> TextStyle {
        self.styles[kind.as_usize()].unwrap_or(TextStyle::NONE)
    }

    /// Set a style for a token kind.
    pub fn set_style(&mut self, kind: TokenKind, style: TextStyle) -> &mut Self {
        self.styles[kind.as_usize()] = Some(style);
        self
    }

    /// Builder-style style setter.
    #[must_use]
    pub fn with_style(mut self, kind: TokenKind, style: TextStyle) -> Self {
        self.set_style(kind, style);
        self
    }

    /// Builder-style default foreground setter.
    #[must_use]
    pub fn with_foreground(mut self, color: Rgb) -> Self {
        self.foreground = color;
        self
    }

    /// Builder-style default background setter.
    #[must_use]
    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    /// Builder-style editor font setter.
    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>, size: u16) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    /// Default foreground color.
    #[must_use]
    pub const fn foreground(&self) -> Rgb {
        self.foreground
    }

    /// Default background color.
    #[must_use]
    pub const fn background(&self) -> Rgb {
        self.background
    }

    /// Editor font family.
    #[must_use]
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Editor font size in points.
    #[must_use]
    pub const fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Light scheme in the style of classic IDE defaults.
    #[must_use]
    pub fn classic() -> Self {
        let keyword = Rgb::new(0x00, 0x00, 0x80);
        let string = Rgb::new(0x00, 0x80, 0x00);
        let number = Rgb::new(0x00, 0x00, 0xff);
        let comment = Rgb::new(0x80, 0x80, 0x80);
        let doc = Rgb::new(0x62, 0x97, 0x55);
        let annotation = Rgb::new(0x80, 0x80, 0x00);

        Self::new("Classic")
            .with_foreground(Rgb::BLACK)
            .with_background(Rgb::WHITE)
            .with_style(TokenKind::Keyword, TextStyle::fg(keyword).with_bold())
            .with_style(TokenKind::KeywordControl, TextStyle::fg(keyword).with_bold())
            .with_style(TokenKind::KeywordModifier, TextStyle::fg(keyword).with_bold())
            .with_style(TokenKind::KeywordType, TextStyle::fg(keyword).with_bold())
            .with_style(TokenKind::Boolean, TextStyle::fg(keyword).with_bold())
            .with_style(TokenKind::String, TextStyle::fg(string).with_bold())
            .with_style(TokenKind::StringEscape, TextStyle::fg(keyword).with_bold())
            .with_style(TokenKind::Number, TextStyle::fg(number))
            .with_style(TokenKind::Comment, TextStyle::fg(comment).with_italic())
            .with_style(TokenKind::CommentBlock, TextStyle::fg(comment).with_italic())
            .with_style(TokenKind::CommentDoc, TextStyle::fg(doc).with_italic())
            .with_style(TokenKind::Attribute, TextStyle::fg(annotation))
            .with_style(TokenKind::Error, TextStyle::fg(Rgb::RED))
    }

    /// Dark scheme.
    #[must_use]
    pub fn darcula() -> Self {
        let foreground = Rgb::new(0xa9, 0xb7, 0xc6);
        let background = Rgb::new(0x2b, 0x2b, 0x2b);
        let keyword = Rgb::new(0xcc, 0x78, 0x32);
        let string = Rgb::new(0x6a, 0x87, 0x59);
        let number = Rgb::new(0x68, 0x97, 0xbb);
        let comment = Rgb::new(0x80, 0x80, 0x80);
        let doc = Rgb::new(0x62, 0x97, 0x55);
        let function = Rgb::new(0xff, 0xc6, 0x6d);
        let annotation = Rgb::new(0xbb, 0xb5, 0x29);

        Self::new("Darcula")
            .with_foreground(foreground)
            .with_background(background)
            .with_style(TokenKind::Keyword, TextStyle::fg(keyword).with_bold())
            .with_style(TokenKind::KeywordControl, TextStyle::fg(keyword).with_bold())
            .with_style(TokenKind::KeywordModifier, TextStyle::fg(keyword).with_bold())
            .with_style(TokenKind::KeywordType, TextStyle::fg(keyword))
            .with_style(TokenKind::Boolean, TextStyle::fg(keyword))
            .with_style(TokenKind::String, TextStyle::fg(string))
            .with_style(TokenKind::StringEscape, TextStyle::fg(keyword))
            .with_style(TokenKind::Number, TextStyle::fg(number))
            .with_style(TokenKind::Function, TextStyle::fg(function))
            .with_style(TokenKind::Comment, TextStyle::fg(comment).with_italic())
            .with_style(TokenKind::CommentBlock, TextStyle::fg(comment).with_italic())
            .with_style(TokenKind::CommentDoc, TextStyle::fg(doc).with_italic())
            .with_style(TokenKind::Attribute, TextStyle::fg(annotation))
            .with_style(TokenKind::Error, TextStyle::fg(Rgb::new(0xbc, 0x3f, 0x3c)))
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Named schemes a settings file can select from.
#[derive(Clone, Debug, Default)]
pub struct SchemeRegistry {
    schemes: HashMap<String, ColorScheme>,
}

impl SchemeRegistry {
    /// Registry holding the built-in schemes.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::default();
        registry.register(ColorScheme::classic());
        registry.register(ColorScheme::darcula());
        registry
    }

    /// Add or replace a scheme under its own name.
    pub fn register(&mut self, scheme: ColorScheme) {
        self.schemes.insert(scheme.name().to_string(), scheme);
    }

    /// Look up a scheme by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.get(name)
    }

    /// The named scheme, or `active` when no name is given or it is unknown.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: Option<&str>, active: &'a ColorScheme) -> &'a ColorScheme {
        name.and_then(|name| self.get(name)).unwrap_or(active)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}
