// src/styles/minify.rs

use std::path::Path;

use grass::{Options, OutputStyle};
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, StyleSheet};
use tracing::warn;

use crate::styles::CompileError;
use crate::types::Compatibility;

/// CSS minifier backed by `lightningcss`, constrained to a browser
/// [`Compatibility`] profile.
///
/// Legacy profiles (`ie8`, `ie7`) must keep old-IE hacks such as `*zoom: 1`,
/// which lightningcss cannot parse. For those profiles a stylesheet it
/// rejects is compacted by `grass` instead, which leaves every declaration in
/// place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minifier {
    compatibility: Compatibility,
}

impl Minifier {
    pub fn new(compatibility: Compatibility) -> Self {
        Self { compatibility }
    }

    pub fn compatibility(&self) -> Compatibility {
        self.compatibility
    }

    pub fn minify(&self, path: &Path, css: &str) -> Result<String, CompileError> {
        match self.optimize(path, css) {
            Ok(code) => Ok(code),
            Err(err) if self.compatibility.keeps_legacy_hacks() => {
                warn!(
                    file = %path.display(),
                    compatibility = %self.compatibility,
                    "{}; keeping declarations as written",
                    err.message
                );
                compact(path, css)
            }
            Err(err) => Err(err),
        }
    }

    fn optimize(&self, path: &Path, css: &str) -> Result<String, CompileError> {
        let parser_options = ParserOptions {
            filename: path.display().to_string(),
            ..ParserOptions::default()
        };

        let mut sheet = StyleSheet::parse(css, parser_options)
            .map_err(|err| CompileError::minify(path, err.to_string()))?;

        sheet
            .minify(MinifyOptions {
                targets: self.compatibility.targets(),
                ..MinifyOptions::default()
            })
            .map_err(|err| CompileError::minify(path, err.to_string()))?;

        let printed = sheet
            .to_css(PrinterOptions {
                minify: true,
                targets: self.compatibility.targets(),
                ..PrinterOptions::default()
            })
            .map_err(|err| CompileError::minify(path, err.to_string()))?;

        Ok(printed.code)
    }
}

/// Whitespace-only minification: reprint the stylesheet in compressed style.
fn compact(path: &Path, css: &str) -> Result<String, CompileError> {
    let options = Options::default().style(OutputStyle::Compressed);
    grass::from_string(css.to_owned(), &options)
        .map_err(|err| CompileError::minify(path, err.to_string()))
}
