//! Coloris Core
//!
//! This crate provides the core types, palette, and error definitions
//! for the coloris marker colorizer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Palette`], [`ColorEntry`] - Ordered color tables
//! - [`ColorLookup`], [`Resolution`], [`NoColor`] - The lookup seam
//! - [`ColorMode`] - On/off/auto coloring mode
//! - [`ColorisError`] - Error types

pub mod error;
pub mod mode;
pub mod palette;

pub use error::{ColorisError, Result};
pub use mode::ColorMode;
pub use palette::{ColorEntry, ColorLookup, NoColor, Palette, Resolution};
