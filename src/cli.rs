//! Command-line interface for coloris.

use clap::Parser;
use coloris_core::ColorMode;
use std::path::PathBuf;

/// Coloris - expand inline `#NAME#` color markers.
///
/// Reads text containing `#NAME#` markers, resolves each name against
/// the configured palette, and writes the expanded text to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "coloris",
    author = "Coloris Contributors",
    version,
    about = "Expand inline #NAME# color markers for terminal output",
    after_help = "Examples:\n  \
                  echo 'status: #GREEN#ok#RST#' | coloris\n  \
                  coloris -p theme.toml report.txt\n  \
                  coloris -m off log.txt"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Color mode (on, off, auto)
    #[arg(short = 'm', long = "mode", default_value = "auto")]
    pub mode: String,

    /// Use a custom palette file or inline TOML
    #[arg(short = 'p', long = "palette")]
    pub palette: Option<String>,

    /// Print the effective palette as TOML and exit
    #[arg(long = "print-palette")]
    pub print_palette: bool,

    /// Create the default palette file if missing, show its path, and exit
    #[arg(long = "init")]
    pub init: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Parse the requested color mode.
    pub fn color_mode(&self) -> Result<ColorMode, String> {
        self.mode.parse()
    }
}

/// Show paths information.
pub fn show_paths() {
    use coloris_config::PaletteConfig;

    let palette_path = PaletteConfig::palette_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  palette               {}", palette_path);
}
