//! Error types for richcopy.

use std::io;
use thiserror::Error;

/// Result type alias for richcopy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for richcopy operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An id that was never handed out by this registry.
    #[error("no data is registered for id {id} in the {registry} registry")]
    UnknownId { registry: &'static str, id: u32 },

    /// Registration attempted after the registry was sealed.
    #[error("can't register data: the {registry} registry is already sealed")]
    RegistrySealed { registry: &'static str },

    /// The raw selected text was not available at render time.
    #[error("raw text is unavailable for rendering")]
    TextUnavailable,

    /// The raw text is shorter than the operation stream requires.
    #[error("raw text mismatch: operations need {needed} chars, text has {available}")]
    TextMismatch { needed: usize, available: usize },

    /// A `Text` operation whose end precedes its start.
    #[error("invalid text range: {start}..{end}")]
    InvalidTextRange { start: usize, end: usize },

    /// Region bounds are inconsistent with each other or the document.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Invalid color format (e.g., malformed hex string).
    #[error("invalid color format: {0}")]
    InvalidColor(String),

    /// Settings file could not be parsed.
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),
}
