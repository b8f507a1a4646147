//! Pixel to cell mapping.
//!
//! Walks a [`PixelGrid`] row by row and paints each pixel into the matching
//! cell of a [`SheetSink`]: pixel (x, y) becomes cell (x + 1, y + 1), filled
//! solid with the pixel's flattened color. Every column of the image is
//! narrowed first so the cells come out roughly square.

use crate::color::{AlphaMode, to_hex_color_with};
use crate::common::{Error, Result};
use crate::config::PIXEL_COLUMN_WIDTH;
use crate::ooxml::xlsx::cell::{MAX_COLUMNS, MAX_ROWS, column_number_to_name, coordinates_to_cell_name};
use crate::ooxml::xlsx::format::CellFill;
use crate::sink::SheetSink;
use crate::source::PixelGrid;
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// Options for [`map_image_to_sheet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    /// Width applied to every image column, in characters
    pub column_width: f64,
    /// How pixel alpha is folded into the fill color
    pub alpha_mode: AlphaMode,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            column_width: PIXEL_COLUMN_WIDTH,
            alpha_mode: AlphaMode::default(),
        }
    }
}

/// What a mapping run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapStats {
    pub width: u32,
    pub height: u32,
    /// Cells that received a style
    pub cells: u64,
    /// Distinct fill styles used
    pub distinct_styles: usize,
}

/// Receives progress notifications while an image is mapped.
///
/// Any `FnMut(row, total)` closure works as an observer that only cares
/// about rows.
pub trait ProgressObserver {
    /// Called once after the image passed validation, before any row.
    fn on_start(&mut self, _width: u32, _height: u32) {}

    /// Called before row `row` (zero-based) of `total` is painted.
    fn on_row(&mut self, row: u32, total: u32);

    /// Called once after the last row.
    fn on_finish(&mut self, _stats: &MapStats) {}
}

impl<F: FnMut(u32, u32)> ProgressObserver for F {
    fn on_row(&mut self, row: u32, total: u32) {
        self(row, total)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_row(&mut self, _row: u32, _total: u32) {}
}

/// Observer that reports on standard output, rewriting a single progress line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutProgress;

impl ProgressObserver for StdoutProgress {
    fn on_start(&mut self, width: u32, height: u32) {
        println!("pic width: {}px, height: {}px", width, height);
    }

    fn on_row(&mut self, row: u32, _total: u32) {
        let mut out = std::io::stdout().lock();
        // Progress output is best effort
        let _ = write!(out, "\rProcessing row no.{} ...", row + 1);
        let _ = out.flush();
    }

    fn on_finish(&mut self, _stats: &MapStats) {
        println!();
    }
}

/// Paint `image` into `sheet`, one styled cell per pixel.
///
/// Fails with [`Error::BlankImage`] for an image without pixels and with
/// [`Error::ImageTooLarge`] for one that does not fit a worksheet; in both
/// cases the sheet is left untouched. Sink failures abort the run.
pub fn map_image_to_sheet<I, S, P>(
    image: &I,
    sheet: &mut S,
    options: &MapOptions,
    progress: &mut P,
) -> Result<MapStats>
where
    I: PixelGrid + ?Sized,
    S: SheetSink + ?Sized,
    P: ProgressObserver + ?Sized,
{
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(Error::BlankImage);
    }
    if width > MAX_COLUMNS || height > MAX_ROWS {
        return Err(Error::ImageTooLarge { width, height });
    }

    progress.on_start(width, height);

    let last_column = column_number_to_name(width)?;
    sheet.set_column_width("A", &last_column, options.column_width)?;

    let mut styles = HashSet::new();
    for row in 0..height {
        progress.on_row(row, height);
        for column in 0..width {
            let [r, g, b, a] = image.rgba16(column, row);
            let color = to_hex_color_with(
                options.alpha_mode,
                r as u32,
                g as u32,
                b as u32,
                a as u32,
            );
            let style = sheet.new_fill_style(&CellFill::solid(color.as_str()))?;
            styles.insert(style);

            let cell = coordinates_to_cell_name(column + 1, row + 1)?;
            sheet.set_cell_style(&cell, style)?;
        }
    }

    let stats = MapStats {
        width,
        height,
        cells: width as u64 * height as u64,
        distinct_styles: styles.len(),
    };
    debug!(?stats, "mapped image to sheet");
    progress.on_finish(&stats);
    Ok(stats)
}
