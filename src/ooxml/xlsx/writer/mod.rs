//! Mutable worksheet and workbook writer components for XLSX.

pub mod sheet;
pub mod styles;
pub mod workbook;

// Re-export main types
pub use sheet::MutableWorksheet;
pub use styles::{StyleId, StylesBuilder};
pub use workbook::{DEFAULT_SHEET_NAME, MutableWorkbookData, SheetWriter, validate_sheet_name};
