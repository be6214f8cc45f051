//! Coloris Parser
//!
//! This crate provides the single-pass `#NAME#` marker scanner that
//! rewrites a plain string into its colorized form. Name resolution
//! is delegated to a [`ColorLookup`](coloris_core::ColorLookup), so
//! the scanner carries no table or mode state of its own.
//!
//! # Example
//!
//! ```
//! use coloris_core::Palette;
//! use coloris_parser::expand;
//!
//! let palette = Palette::new().with("RED", "\x1b[31m").with("RST", "\x1b[0m");
//! assert_eq!(expand("#RED#hi#RST#", &palette), "\x1b[31mhi\x1b[0m");
//! assert_eq!(expand("#NOPE#hi", &palette), "#NOPE#hi");
//! ```

pub mod scanner;

pub use scanner::{expand, MAX_NAME_LEN};
