//! The per-call-site coloring context.

use std::io::Write;

use coloris_core::{ColorMode, NoColor, Palette, Result};
use coloris_parser::expand;

/// A palette plus a resolved enabled flag.
///
/// Replaces ambient per-thread state: build one where the palette is
/// decided and pass it (or a clone) to every call site. The mode is
/// resolved against the environment once, at construction.
///
/// An unconfigured context ([`Coloris::default`]) has an empty palette
/// and reproduces every marker literally.
#[derive(Debug, Clone, Default)]
pub struct Coloris {
    palette: Palette,
    enabled: bool,
}

impl Coloris {
    /// Create a context, resolving `mode` against the environment
    /// (`NO_COLOR` is consulted here, never per call).
    pub fn new(palette: Palette, mode: ColorMode) -> Self {
        Self {
            palette,
            enabled: mode.resolve(),
        }
    }

    /// Create a context with an already-decided enabled flag.
    pub fn with_enabled(palette: Palette, enabled: bool) -> Self {
        Self { palette, enabled }
    }

    /// Whether markers currently expand to escape codes.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The palette markers resolve against.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Expand the markers in `input`.
    ///
    /// When coloring is disabled every name is treated as unknown, so
    /// the output equals the input byte for byte.
    pub fn colorize(&self, input: &str) -> String {
        if self.enabled {
            expand(input, &self.palette)
        } else {
            expand(input, &NoColor)
        }
    }

    /// Expand the markers in `input` and write the result to `writer`,
    /// flushing it.
    ///
    /// # Returns
    ///
    /// The number of bytes written.
    pub fn write_to<W: Write>(&self, writer: &mut W, input: &str) -> Result<usize> {
        let expanded = self.colorize(input);
        writer.write_all(expanded.as_bytes())?;
        writer.flush()?;
        Ok(expanded.len())
    }
}
