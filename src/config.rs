//! Conversion settings.
//!
//! The command line exposes none of these except the alpha mode; they exist
//! so that library callers and tests can redirect the output.

use crate::color::AlphaMode;
use crate::mapper::MapOptions;
use std::path::{Path, PathBuf};

/// Where the workbook is written, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "a.xlsx";

/// Column width, in characters, that makes a cell roughly square.
pub const PIXEL_COLUMN_WIDTH: f64 = 2.85;

pub use crate::ooxml::xlsx::writer::DEFAULT_SHEET_NAME;

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path the workbook is saved to
    pub output_path: PathBuf,
    /// Width of every image column
    pub column_width: f64,
    /// How pixel alpha is folded into fill colors
    pub alpha_mode: AlphaMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            column_width: PIXEL_COLUMN_WIDTH,
            alpha_mode: AlphaMode::default(),
        }
    }
}

impl Config {
    pub fn with_output_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_column_width(mut self, width: f64) -> Self {
        self.column_width = width;
        self
    }

    pub fn with_alpha_mode(mut self, mode: AlphaMode) -> Self {
        self.alpha_mode = mode;
        self
    }

    /// The mapper options these settings imply.
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            column_width: self.column_width,
            alpha_mode: self.alpha_mode,
        }
    }
}
