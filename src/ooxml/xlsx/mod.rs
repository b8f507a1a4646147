//! Excel (.xlsx) spreadsheet writing.
//!
//! Builds SpreadsheetML workbooks whose cells carry fill styles but no
//! values, and packages them as Office Open XML (.xlsx) files.
//!
//! # Example
//!
//! ```rust,no_run
//! use pixelsheet::ooxml::xlsx::{CellFill, Workbook};
//! use pixelsheet::sink::SheetSink;
//!
//! let mut workbook = Workbook::new();
//! {
//!     let mut sheet = workbook.sheet_writer("Sheet1")?;
//!     let red = sheet.new_fill_style(&CellFill::solid("FF0000"))?;
//!     sheet.set_cell_style("A1", red)?;
//! }
//! workbook.save("red.xlsx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod format;
pub mod workbook;
pub mod writer;

pub use cell::{MAX_COLUMNS, MAX_ROWS};
pub use format::{CellFill, CellFillPatternType};
pub use workbook::Workbook;
pub use writer::{MutableWorksheet, SheetWriter, StyleId};
