//! The operation stream consumed by renderers.

use crate::registry::Id;
use crate::style::FontStyle;
use std::fmt;
use std::ops::Range;

/// One element of the style-change / text stream.
///
/// Attribute operations change the active style for all following `Text`
/// operations. `Text` ranges index the pasted plain text by char offset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Emit raw text chars `start..end`.
    Text { start: usize, end: usize },
    /// Switch foreground to a color registry id.
    Foreground(Id),
    /// Switch background to a color registry id.
    Background(Id),
    /// Switch font family to a font-name registry id.
    FontFamily(Id),
    /// Switch bold / italic.
    FontStyle(FontStyle),
    /// Switch font size, in points.
    FontSize(u16),
}

impl Operation {
    /// Shorthand for a `Text` operation.
    #[must_use]
    pub const fn text(start: usize, end: usize) -> Self {
        Self::Text { start, end }
    }

    /// Range of a `Text` operation.
    #[must_use]
    pub const fn text_range(&self) -> Option<Range<usize>> {
        match *self {
            Self::Text { start, end } => Some(start..end),
            _ => None,
        }
    }

    /// Attribute channel this operation changes; `None` for text.
    #[must_use]
    pub const fn channel(&self) -> Option<Channel> {
        match self {
            Self::Text { .. } => None,
            Self::Foreground(_) => Some(Channel::Foreground),
            Self::Background(_) => Some(Channel::Background),
            Self::FontFamily(_) => Some(Channel::FontFamily),
            Self::FontStyle(_) => Some(Channel::FontStyle),
            Self::FontSize(_) => Some(Channel::FontSize),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { start, end } => write!(f, "text {start}-{end}"),
            Self::Foreground(id) => write!(f, "foreground={id}"),
            Self::Background(id) => write!(f, "background={id}"),
            Self::FontFamily(id) => write!(f, "font family={id}"),
            Self::FontStyle(style) => write!(f, "font style={style}"),
            Self::FontSize(size) => write!(f, "font size={size}"),
        }
    }
}

/// Style attribute channels, in the order the encoder checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Background,
    Foreground,
    FontFamily,
    FontStyle,
    FontSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_range() {
        assert_eq!(Operation::text(2, 5).text_range(), Some(2..5));
        assert_eq!(Operation::Foreground(1).text_range(), None);
    }

    #[test]
    fn test_channel() {
        assert_eq!(Operation::text(0, 1).channel(), None);
        assert_eq!(Operation::Background(2).channel(), Some(Channel::Background));
        assert_eq!(
            Operation::FontStyle(FontStyle::BOLD).channel(),
            Some(Channel::FontStyle)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::text(0, 11).to_string(), "text 0-11");
        assert_eq!(Operation::FontSize(12).to_string(), "font size=12");
        assert_eq!(
            Operation::FontStyle(FontStyle::BOLD).to_string(),
            "font style=bold"
        );
    }
}
