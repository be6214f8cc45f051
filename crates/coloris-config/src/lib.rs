//! Coloris Config
//!
//! This crate handles palette configuration for coloris, loading
//! ordered color tables from TOML files.
//!
//! Palette files are looked up in platform-specific locations:
//! - Linux: `~/.config/coloris/palette.toml`
//! - macOS: `~/Library/Application Support/coloris/palette.toml`
//! - Windows: `%APPDATA%\coloris\palette.toml`
//!
//! # Example
//!
//! ```no_run
//! use coloris_config::PaletteConfig;
//!
//! // Load the user's palette, falling back to the built-in table
//! let palette = PaletteConfig::load().unwrap().into_palette();
//!
//! // Or load a specific file
//! let palette = PaletteConfig::load_with_override(Some("./theme.toml".as_ref()))
//!     .unwrap()
//!     .into_palette();
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use coloris_core::{ColorEntry, ColorisError, Palette, Result};

/// Default TOML palette string.
///
/// Matches [`Palette::standard()`]: the table the original example
/// program ships with.
const DEFAULT_TOML: &str = r#"[[colors]]
name = "RED"
code = "\u001b[38;5;160m"

[[colors]]
name = "GREEN"
code = "\u001b[38;5;40m"

[[colors]]
name = "BLUE"
code = "\u001b[38;5;75m"

[[colors]]
name = "BOLD"
code = "\u001b[1m"

[[colors]]
name = "RST"
code = "\u001b[0m"
"#;

/// A palette as stored on disk.
///
/// An array of tables rather than a map, so the file order is the
/// lookup order and first-match-wins survives a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Color entries in lookup order.
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl PaletteConfig {
    /// Returns the default TOML palette string.
    ///
    /// # Example
    ///
    /// ```
    /// use coloris_config::PaletteConfig;
    /// let toml = PaletteConfig::default_toml();
    /// assert!(toml.contains("[[colors]]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific palette file path.
    pub fn palette_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "coloris")
            .map(|dirs| dirs.config_dir().join("palette.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "coloris")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the palette file exists, creating it with the default
    /// table if not.
    ///
    /// # Returns
    ///
    /// The path to the palette file.
    pub fn ensure_palette_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| ColorisError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let palette_path = config_dir.join("palette.toml");
        if !palette_path.exists() {
            std::fs::write(&palette_path, DEFAULT_TOML)?;
        }

        Ok(palette_path)
    }

    /// Load the palette from the default platform-specific path.
    ///
    /// If no palette file exists, returns the default table.
    pub fn load() -> Result<Self> {
        if let Some(palette_path) = Self::palette_path() {
            if palette_path.exists() {
                let content = std::fs::read_to_string(&palette_path)?;
                return toml::from_str(&content)
                    .map_err(|e| ColorisError::Config(format!("Parse error: {}", e)));
            }
        }

        // No palette file found
        Ok(Self::default())
    }

    /// Load a palette from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ColorisError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load a palette with an optional override file or string.
    ///
    /// If `override_palette` names an existing file it is loaded in
    /// place of the default palette; otherwise it is parsed as inline
    /// TOML. `None` behaves like [`load`](Self::load).
    pub fn load_with_override(override_palette: Option<&str>) -> Result<Self> {
        let Some(override_str) = override_palette else {
            return Self::load();
        };

        let override_path = Path::new(override_str);
        if override_path.exists() {
            Self::load_from(override_path)
        } else {
            toml::from_str(override_str)
                .map_err(|e| ColorisError::Config(format!("Override parse error: {}", e)))
        }
    }

    /// Convert into the core [`Palette`], preserving file order.
    pub fn into_palette(self) -> Palette {
        Palette::from_entries(self.colors)
    }
}
