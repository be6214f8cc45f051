//! Color tables and the lookup seam used by the marker scanner.

use serde::{Deserialize, Serialize};

/// One palette row: a marker name and the escape code it expands to.
///
/// Codes may carry any attributes (bold, 256-color, truecolor); the
/// scanner substitutes them verbatim. An empty code is meaningful: it
/// erases the marker from the output entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Marker name as written between `#` delimiters.
    pub name: String,

    /// Escape code substituted for the marker.
    pub code: String,
}

impl ColorEntry {
    /// Create an entry from any string-like pair.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Outcome of resolving a marker name against a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The name matched an entry with a non-empty code.
    Code(&'a str),

    /// The name matched an entry whose code is the empty string.
    Empty,

    /// No entry matched.
    Unknown,
}

/// Name resolution as seen by the scanner.
///
/// Implementations must be pure: the same name resolves the same way
/// for the lifetime of a scan.
pub trait ColorLookup {
    /// Resolve a marker name to its substitution.
    fn resolve(&self, name: &str) -> Resolution<'_>;
}

/// Lookup that knows no names. Disabled coloring routes through this
/// so that "disabled" and "every name unknown" are the same code path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColor;

impl ColorLookup for NoColor {
    fn resolve(&self, _name: &str) -> Resolution<'_> {
        Resolution::Unknown
    }
}

/// An ordered color table.
///
/// Lookup is a linear scan; the first matching entry wins. Names are
/// compared exactly and case-sensitively, no partial matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<ColorEntry>,
}

impl Palette {
    /// Create an empty palette. Every lookup resolves to `Unknown`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: `RED`, `GREEN`, `BLUE`, `BOLD`, `RST`.
    pub fn standard() -> Self {
        Self::from_entries([
            ColorEntry::new("RED", "\x1b[38;5;160m"),
            ColorEntry::new("GREEN", "\x1b[38;5;40m"),
            ColorEntry::new("BLUE", "\x1b[38;5;75m"),
            ColorEntry::new("BOLD", "\x1b[1m"),
            ColorEntry::new("RST", "\x1b[0m"),
        ])
    }

    /// Build a palette from a sequence of entries, preserving order.
    pub fn from_entries(entries: impl IntoIterator<Item = ColorEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Append an entry. Later entries never shadow earlier ones with
    /// the same name.
    pub fn push(&mut self, entry: ColorEntry) {
        self.entries.push(entry);
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.push(ColorEntry::new(name, code));
        self
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.iter()
    }
}

impl ColorLookup for Palette {
    fn resolve(&self, name: &str) -> Resolution<'_> {
        for entry in &self.entries {
            if entry.name == name {
                return if entry.code.is_empty() {
                    Resolution::Empty
                } else {
                    Resolution::Code(&entry.code)
                };
            }
        }
        Resolution::Unknown
    }
}

impl FromIterator<ColorEntry> for Palette {
    fn from_iter<I: IntoIterator<Item = ColorEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit_and_miss() {
        let palette = Palette::new().with("RED", "\x1b[31m").with("RST", "\x1b[0m");

        assert_eq!(palette.resolve("RED"), Resolution::Code("\x1b[31m"));
        assert_eq!(palette.resolve("RST"), Resolution::Code("\x1b[0m"));
        assert_eq!(palette.resolve("MAGENTA"), Resolution::Unknown);
    }

    #[test]
    fn test_lookup_is_case_sensitive_and_exact() {
        let palette = Palette::new().with("RED", "\x1b[31m");

        assert_eq!(palette.resolve("red"), Resolution::Unknown);
        assert_eq!(palette.resolve("RE"), Resolution::Unknown);
        assert_eq!(palette.resolve("REDD"), Resolution::Unknown);
        assert_eq!(palette.resolve(""), Resolution::Unknown);
    }

    #[test]
    fn test_empty_code_resolves_to_empty() {
        let palette = Palette::new().with("RST", "");
        assert_eq!(palette.resolve("RST"), Resolution::Empty);
    }

    #[test]
    fn test_first_match_wins() {
        let palette = Palette::new().with("RED", "first").with("RED", "second");
        assert_eq!(palette.resolve("RED"), Resolution::Code("first"));
    }

    #[test]
    fn test_no_color_resolves_nothing() {
        assert_eq!(NoColor.resolve("RED"), Resolution::Unknown);
        assert_eq!(NoColor.resolve(""), Resolution::Unknown);
    }

    #[test]
    fn test_standard_palette() {
        let palette = Palette::standard();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.resolve("RST"), Resolution::Code("\x1b[0m"));
        assert_eq!(palette.resolve("BOLD"), Resolution::Code("\x1b[1m"));
    }
}
