//! Export settings.

use crate::error::Result;
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scheme name meaning "whatever scheme the editor currently uses".
pub const ACTIVE_SCHEME: &str = "__ACTIVE_GLOBAL_SCHEME__";

/// User-facing switches for rich-text export.
///
/// Every field has a default, so a settings file only needs to list what it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Offer an RTF payload.
    #[serde(default = "default_enabled")]
    pub provide_rtf: bool,
    /// Offer an HTML payload.
    #[serde(default = "default_enabled")]
    pub provide_html: bool,
    /// Drop leading indentation from copied lines.
    #[serde(default = "default_enabled")]
    pub strip_indents: bool,
    /// Scheme used for export colors.
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Render line feeds as `<br>` in HTML.
    #[serde(default)]
    pub html_line_breaks: bool,
    /// Log the computed recipe and rendered output.
    #[serde(default)]
    pub debug: bool,
}

const fn default_enabled() -> bool {
    true
}

fn default_scheme() -> String {
    ACTIVE_SCHEME.to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            provide_rtf: default_enabled(),
            provide_html: default_enabled(),
            strip_indents: default_enabled(),
            scheme: default_scheme(),
            html_line_breaks: false,
            debug: false,
        }
    }
}

impl ExportSettings {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The explicitly chosen scheme, or `None` for the active one.
    #[must_use]
    pub fn scheme_name(&self) -> Option<&str> {
        (!self.scheme.is_empty() && self.scheme != ACTIVE_SCHEME).then_some(self.scheme.as_str())
    }

    /// True if at least one payload flavor is enabled.
    #[must_use]
    pub const fn any_flavor(&self) -> bool {
        self.provide_rtf || self.provide_html
    }

    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            html_line_breaks: self.html_line_breaks,
        }
    }

    #[must_use]
    pub const fn with_rtf(mut self, enabled: bool) -> Self {
        self.provide_rtf = enabled;
        self
    }

    #[must_use]
    pub const fn with_html(mut self, enabled: bool) -> Self {
        self.provide_html = enabled;
        self
    }

    #[must_use]
    pub const fn with_strip_indents(mut self, enabled: bool) -> Self {
        self.strip_indents = enabled;
        self
    }

    #[must_use]
    pub fn with_scheme(mut self, name: impl Into<String>) -> Self {
        self.scheme = name.into();
        self
    }

    #[must_use]
    pub const fn with_html_line_breaks(mut self, enabled: bool) -> Self {
        self.html_line_breaks = enabled;
        self
    }

    #[must_use]
    pub const fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let settings = ExportSettings::default();
        assert!(settings.provide_rtf);
        assert!(settings.provide_html);
        assert!(settings.strip_indents);
        assert_eq!(settings.scheme_name(), None);
        assert!(!settings.html_line_breaks);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = ExportSettings::from_toml("provide_html = false\nscheme = \"Darcula\"\n").unwrap();
        assert!(!settings.provide_html);
        assert!(settings.provide_rtf);
        assert_eq!(settings.scheme_name(), Some("Darcula"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ExportSettings::from_toml("").unwrap(), ExportSettings::default());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ExportSettings::from_toml("provide_rtf = \"yes\""),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = ExportSettings::default()
            .with_rtf(false)
            .with_scheme("Classic")
            .with_debug(true);
        let text = settings.to_toml().unwrap();
        assert_eq!(ExportSettings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("richcopy.toml");
        std::fs::write(&path, "strip_indents = false\nhtml_line_breaks = true\n").unwrap();
        let settings = ExportSettings::load(&path).unwrap();
        assert!(!settings.strip_indents);
        assert!(settings.render_options().html_line_breaks);

        assert!(matches!(
            ExportSettings::load(&dir.path().join("missing.toml")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_any_flavor() {
        assert!(ExportSettings::default().with_rtf(false).any_flavor());
        assert!(!ExportSettings::default().with_rtf(false).with_html(false).any_flavor());
    }
}
