//! Coloris - inline `#NAME#` marker colorization for terminal output.
//!
//! Format strings carry color markers like `#RED#error#RST#`; a
//! [`Coloris`] context resolves each marker against its palette and
//! substitutes the escape code, or reproduces the marker literally
//! when the name is unknown or coloring is off.
//!
//! # Example
//!
//! ```
//! use coloris::{cformat, ColorMode, Coloris, Palette};
//!
//! let ctx = Coloris::with_enabled(Palette::standard(), true);
//! let n = 3;
//! let line = cformat!(ctx, "#RED#{} errors#RST#", n);
//! assert_eq!(line, "\x1b[38;5;160m3 errors\x1b[0m");
//!
//! // Off mode leaves markers untouched
//! let plain = Coloris::new(Palette::standard(), ColorMode::Off);
//! assert_eq!(plain.colorize("#RED#hi#RST#"), "#RED#hi#RST#");
//! ```

mod context;
mod macros;

pub use context::Coloris;

pub use coloris_config::PaletteConfig;
pub use coloris_core::{
    ColorEntry, ColorLookup, ColorMode, ColorisError, NoColor, Palette, Resolution, Result,
};
pub use coloris_parser::{expand, MAX_NAME_LEN};
