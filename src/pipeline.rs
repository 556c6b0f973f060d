//! Export pipeline: selection + style providers to renderable payloads.

use crate::cache::{CacheKey, SyntaxInfoCache};
use crate::document::Document;
use crate::encoder::StyleEncoder;
use crate::error::Result;
use crate::indent::IndentPlan;
use crate::merge::SegmentMerger;
use crate::render::{self, Flavor, RenderOptions};
use crate::scheme::{ColorScheme, SchemeRegistry};
use crate::selection::Selection;
use crate::settings::ExportSettings;
use crate::source::StyleProvider;
use crate::syntax_info::SyntaxInfo;
use std::sync::Arc;

/// Compute the syntax info for `selection`.
///
/// Providers are merged in the given order; put the lexical one first so it
/// wins ties. Indentation is only stripped from linear selections.
pub fn collect_syntax_info(
    doc: &Document,
    selection: &Selection,
    providers: &[&dyn StyleProvider],
    scheme: &ColorScheme,
    strip_indents: bool,
) -> Result<SyntaxInfo> {
    selection.validate(doc)?;
    let regions = selection.regions();
    let mut encoder = StyleEncoder::new(doc, scheme.foreground(), scheme.background());

    let mut first_start = regions[0].start;
    if strip_indents && selection.is_linear() {
        let plan = IndentPlan::compute(doc, &regions[0]);
        tracing::trace!(
            first_line_start = plan.first_line_start(),
            "computed indent plan"
        );
        first_start = plan.first_line_start();
        encoder = encoder.with_indent_plan(plan);
    }

    let mut shift: isize = 0;
    let mut prev_end = 0usize;
    for (idx, region) in regions.iter().enumerate() {
        let start = if idx == 0 { first_start } else { region.start };
        if idx > 0 {
            let fill = selection.padding_after(idx - 1);
            let eol = prev_end.saturating_add_signed(shift) + fill;
            encoder.push_line_feed(eol);
            shift += 1 + fill as isize;
        }
        shift += prev_end as isize - region.start as isize;
        prev_end = region.end;

        encoder.begin_region(start, shift);
        let window = start..region.end;
        let sources = providers
            .iter()
            .map(|provider| provider.open(doc, scheme, window.clone()))
            .collect();
        let merger = SegmentMerger::new(sources, window, scheme.foreground(), scheme.background());
        for segment in merger {
            tracing::trace!(%segment, "merged segment");
            encoder.add_segment(&segment)?;
        }
        encoder.end_region(region.end);
    }

    let info = encoder.finish()?;
    tracing::debug!(
        regions = regions.len(),
        ops = info.ops().len(),
        colors = info.colors().len(),
        fonts = info.fonts().len(),
        "collected syntax info"
    );
    Ok(info)
}

/// One flavor of an export, ready to render.
#[derive(Clone, Debug)]
pub struct Payload {
    flavor: Flavor,
    info: Arc<SyntaxInfo>,
    options: RenderOptions,
    debug: bool,
}

impl Payload {
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.flavor.mime_type()
    }

    #[must_use]
    pub fn info(&self) -> &SyntaxInfo {
        &self.info
    }

    /// Render over the raw pasted text. `None` means the host could not
    /// provide it, which fails with [`Error::TextUnavailable`](crate::Error).
    pub fn render(&self, raw: Option<&str>) -> Result<Vec<u8>> {
        let bytes = render::render(&self.info, raw, self.flavor, self.options)?;
        if self.debug {
            tracing::info!(
                flavor = %self.flavor,
                output = %String::from_utf8_lossy(&bytes),
                "rendered payload"
            );
        }
        Ok(bytes)
    }
}

/// Front end producing payloads according to [`ExportSettings`].
#[derive(Debug)]
pub struct Exporter {
    settings: ExportSettings,
    schemes: SchemeRegistry,
    cache: SyntaxInfoCache,
}

impl Exporter {
    /// Exporter with the built-in schemes.
    #[must_use]
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            settings,
            schemes: SchemeRegistry::with_builtin(),
            cache: SyntaxInfoCache::new(),
        }
    }

    /// Replace the scheme registry.
    #[must_use]
    pub fn with_schemes(mut self, schemes: SchemeRegistry) -> Self {
        self.schemes = schemes;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Change settings. Cached results stay valid since they are keyed by
    /// the settings they depend on.
    pub fn set_settings(&mut self, settings: ExportSettings) {
        self.settings = settings;
    }

    #[must_use]
    pub const fn cache(&self) -> &SyntaxInfoCache {
        &self.cache
    }

    /// Forget the cached recipe. Providers that bump their generation on
    /// change do not need this.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Payloads for every enabled flavor; empty when all flavors are
    /// disabled or the selection is empty.
    ///
    /// `active` is the editor's current scheme, used unless the settings
    /// name another registered one.
    pub fn export(
        &mut self,
        doc: &Document,
        selection: &Selection,
        providers: &[&dyn StyleProvider],
        active: &ColorScheme,
    ) -> Result<Vec<Payload>> {
        if !self.settings.any_flavor() || selection.is_empty() {
            return Ok(Vec::new());
        }

        let scheme = self.schemes.resolve(self.settings.scheme_name(), active);
        let key = CacheKey {
            document: doc.id(),
            revision: doc.revision(),
            selection: selection.clone(),
            strip_indents: self.settings.strip_indents,
            scheme: scheme.clone(),
            providers: providers.iter().map(|p| p.generation()).collect(),
        };

        let info = if let Some(info) = self.cache.get(&key) {
            tracing::debug!("reusing cached syntax info");
            info
        } else {
            let info = Arc::new(collect_syntax_info(
                doc,
                selection,
                providers,
                scheme,
                self.settings.strip_indents,
            )?);
            if self.settings.debug {
                tracing::info!(scheme = scheme.name(), "syntax info:\n{info}");
            }
            self.cache.insert(key, Arc::clone(&info));
            info
        };

        let options = self.settings.render_options();
        let flavors = [
            (self.settings.provide_rtf, Flavor::Rtf),
            (self.settings.provide_html, Flavor::Html),
        ];
        Ok(flavors
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, flavor)| Payload {
                flavor,
                info: Arc::clone(&info),
                options,
                debug: self.settings.debug,
            })
            .collect())
    }
}
