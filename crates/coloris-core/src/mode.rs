//! Coloring mode and its resolution against the environment.

use std::str::FromStr;

/// Whether marker substitution should emit escape codes.
///
/// `Auto` defers to the environment: the presence of the `NO_COLOR`
/// variable (any value, including empty) disables coloring. The
/// environment is consulted once, when the mode is resolved, never
/// per formatting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Never emit escape codes; markers are reproduced literally.
    Off,

    /// Always emit escape codes.
    On,

    /// Emit escape codes unless `NO_COLOR` is set.
    #[default]
    Auto,
}

impl ColorMode {
    /// Resolve this mode to an enabled flag, reading the environment.
    pub fn resolve(self) -> bool {
        self.resolve_with(std::env::var_os("NO_COLOR").is_some())
    }

    /// Resolve this mode given an explicit no-color signal.
    ///
    /// Pure version of [`resolve`](Self::resolve) for callers that
    /// have already inspected the environment, and for tests.
    pub fn resolve_with(self, no_color: bool) -> bool {
        match self {
            ColorMode::Off => false,
            ColorMode::On => true,
            ColorMode::Auto => !no_color,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(ColorMode::Off),
            "on" => Ok(ColorMode::On),
            "auto" => Ok(ColorMode::Auto),
            _ => Err(format!("unknown color mode: {s} (expected on, off, or auto)")),
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Off => write!(f, "off"),
            ColorMode::On => write!(f, "on"),
            ColorMode::Auto => write!(f, "auto"),
        }
    }
}
