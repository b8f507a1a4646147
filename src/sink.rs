//! The output seam the pixel mapper writes through.

use crate::common::Result;
use crate::ooxml::xlsx::format::CellFill;
use crate::ooxml::xlsx::writer::StyleId;

/// A worksheet that accepts column widths and per-cell fill styles.
///
/// Columns are addressed by letters and cells by A1 names, the way a
/// spreadsheet user would write them.
pub trait SheetSink {
    /// Set the display width of every column from `first` to `last` inclusive.
    fn set_column_width(&mut self, first: &str, last: &str, width: f64) -> Result<()>;

    /// Register a fill style; identical fills yield the same id.
    fn new_fill_style(&mut self, fill: &CellFill) -> Result<StyleId>;

    /// Assign a registered style to one cell.
    fn set_cell_style(&mut self, cell: &str, style: StyleId) -> Result<()>;
}
