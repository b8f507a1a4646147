//! Writer module for building Excel worksheets.
use crate::common::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::xlsx::cell::{MAX_COLUMNS, MAX_ROWS, column_number_to_name};
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use super::styles::StyleId;

/// A mutable worksheet for writing.
///
/// Holds the column widths and the style assigned to each cell. Cells carry
/// no values; a cell exists in the output only because it has a style.
#[derive(Debug)]
pub struct MutableWorksheet {
    /// Worksheet name
    name: String,
    /// Sheet ID
    sheet_id: u32,
    /// Column widths (1-based col -> width in characters)
    column_widths: BTreeMap<u32, f64>,
    /// Cell styles keyed by 1-based (row, col), so iteration is row-major
    cell_styles: BTreeMap<(u32, u32), StyleId>,
}

impl MutableWorksheet {
    /// Create a new empty worksheet.
    pub fn new(name: String, sheet_id: u32) -> Self {
        Self {
            name,
            sheet_id,
            column_widths: BTreeMap::new(),
            cell_styles: BTreeMap::new(),
        }
    }

    /// Get the worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the worksheet name.
    ///
    /// Name validation lives in the workbook, which knows the other sheet names.
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Get the sheet ID.
    pub fn sheet_id(&self) -> u32 {
        self.sheet_id
    }

    /// Set column width in characters for every column in `first..=last`.
    ///
    /// # Arguments
    /// * `first` - 1-based first column (1 = column A)
    /// * `last` - 1-based last column, inclusive
    pub fn set_column_width_range(&mut self, first: u32, last: u32, width: f64) {
        let (first, last) = if first <= last { (first, last) } else { (last, first) };
        for col in first.max(1)..=last.min(MAX_COLUMNS) {
            self.column_widths.insert(col, width);
        }
    }

    /// Set column width in characters (Excel default is 8.43).
    pub fn set_column_width(&mut self, col: u32, width: f64) {
        self.set_column_width_range(col, col, width);
    }

    /// Get the custom width of a column, if one was set.
    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    /// Assign a style to a cell.
    ///
    /// # Arguments
    /// * `row` - 1-based row number
    /// * `col` - 1-based column number
    pub fn set_cell_style(&mut self, row: u32, col: u32, style: StyleId) {
        self.cell_styles.insert((row, col), style);
    }

    /// Get the style assigned to a cell.
    pub fn cell_style(&self, row: u32, col: u32) -> Option<StyleId> {
        self.cell_styles.get(&(row, col)).copied()
    }

    /// Number of cells that carry a style.
    pub fn styled_cell_count(&self) -> usize {
        self.cell_styles.len()
    }

    /// Bounding box of styled cells as 1-based (min_row, min_col, max_row, max_col).
    pub fn used_range(&self) -> Option<(u32, u32, u32, u32)> {
        let (&(min_row, _), _) = self.cell_styles.first_key_value()?;
        let (&(max_row, _), _) = self.cell_styles.last_key_value()?;
        let min_col = self.cell_styles.keys().map(|&(_, c)| c).min()?;
        let max_col = self.cell_styles.keys().map(|&(_, c)| c).max()?;
        Some((min_row, min_col, max_row, max_col))
    }

    /// Serialize the worksheet to XML.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512 + self.cell_styles.len() * 24);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<worksheet xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;

        match self.used_range() {
            Some((min_row, min_col, max_row, max_col)) => {
                write!(
                    xml,
                    r#"<dimension ref="{}{}:{}{}"/>"#,
                    column_number_to_name(min_col)?,
                    min_row,
                    column_number_to_name(max_col)?,
                    max_row
                )?;
            },
            None => xml.push_str(r#"<dimension ref="A1"/>"#),
        }

        xml.push_str(r#"<sheetViews><sheetView tabSelected="1" workbookViewId="0"/></sheetViews>"#);
        xml.push_str(r#"<sheetFormatPr defaultRowHeight="15"/>"#);

        self.write_cols(&mut xml)?;

        xml.push_str("<sheetData>");
        self.write_sheet_data(&mut xml)?;
        xml.push_str("</sheetData>");

        // Required by Excel
        xml.push_str(r#"<pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>"#);
        xml.push_str("</worksheet>");

        Ok(xml)
    }

    /// Write column information, merging consecutive columns of equal width
    /// into one `<col>` element.
    fn write_cols(&self, xml: &mut String) -> Result<()> {
        if self.column_widths.is_empty() {
            return Ok(());
        }

        let mut spans: Vec<(u32, u32, f64)> = Vec::new();
        for (&col, &width) in &self.column_widths {
            match spans.last_mut() {
                Some((_, max, w)) if *max + 1 == col && *w == width => *max = col,
                _ => spans.push((col, col, width)),
            }
        }

        xml.push_str("<cols>");
        for (min, max, width) in spans {
            write!(
                xml,
                r#"<col min="{}" max="{}" width="{}" customWidth="1"/>"#,
                min, max, width
            )?;
        }
        xml.push_str("</cols>");
        Ok(())
    }

    /// Write sheet data (rows and cells).
    fn write_sheet_data(&self, xml: &mut String) -> Result<()> {
        let mut row_buf = itoa::Buffer::new();
        let mut style_buf = itoa::Buffer::new();
        let mut current_row: Option<u32> = None;

        for (&(row, col), style) in &self.cell_styles {
            if row == 0 || row > MAX_ROWS {
                continue;
            }

            if current_row != Some(row) {
                if current_row.is_some() {
                    xml.push_str("</row>");
                }
                xml.push_str(r#"<row r=""#);
                xml.push_str(row_buf.format(row));
                xml.push_str(r#"">"#);
                current_row = Some(row);
            }

            xml.push_str(r#"<c r=""#);
            xml.push_str(&column_number_to_name(col)?);
            xml.push_str(row_buf.format(row));
            xml.push('"');
            if *style != StyleId::DEFAULT {
                xml.push_str(r#" s=""#);
                xml.push_str(style_buf.format(style.index()));
                xml.push('"');
            }
            xml.push_str("/>");
        }

        if current_row.is_some() {
            xml.push_str("</row>");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worksheet_is_empty() {
        let ws = MutableWorksheet::new("Sheet1".to_string(), 1);
        assert_eq!(ws.name(), "Sheet1");
        assert_eq!(ws.sheet_id(), 1);
        assert_eq!(ws.styled_cell_count(), 0);
        assert!(ws.used_range().is_none());
    }

    #[test]
    fn test_column_width_range_merges_into_one_col() {
        let mut ws = MutableWorksheet::new("Sheet1".to_string(), 1);
        ws.set_column_width_range(1, 3, 2.85);

        let xml = ws.to_xml().unwrap();
        assert!(xml.contains(r#"<cols><col min="1" max="3" width="2.85" customWidth="1"/></cols>"#));
        assert_eq!(ws.column_width(2), Some(2.85));
        assert_eq!(ws.column_width(4), None);
    }

    #[test]
    fn test_later_width_overrides_part_of_range() {
        let mut ws = MutableWorksheet::new("Sheet1".to_string(), 1);
        ws.set_column_width_range(1, 4, 2.85);
        ws.set_column_width(3, 10.0);

        let xml = ws.to_xml().unwrap();
        assert!(xml.contains(r#"<col min="1" max="2" width="2.85" customWidth="1"/>"#));
        assert!(xml.contains(r#"<col min="3" max="3" width="10" customWidth="1"/>"#));
        assert!(xml.contains(r#"<col min="4" max="4" width="2.85" customWidth="1"/>"#));
    }

    #[test]
    fn test_sheet_data_row_major() {
        let mut ws = MutableWorksheet::new("Sheet1".to_string(), 1);
        // Insert out of order; output must still be sorted
        ws.set_cell_style(2, 1, StyleId(3));
        ws.set_cell_style(1, 2, StyleId(2));
        ws.set_cell_style(1, 1, StyleId(1));

        let xml = ws.to_xml().unwrap();
        assert!(xml.contains(
            r#"<sheetData><row r="1"><c r="A1" s="1"/><c r="B1" s="2"/></row><row r="2"><c r="A2" s="3"/></row></sheetData>"#
        ));
        assert!(xml.contains(r#"<dimension ref="A1:B2"/>"#));
    }

    #[test]
    fn test_default_style_omits_attribute() {
        let mut ws = MutableWorksheet::new("Sheet1".to_string(), 1);
        ws.set_cell_style(1, 1, StyleId::DEFAULT);
        let xml = ws.to_xml().unwrap();
        assert!(xml.contains(r#"<c r="A1"/>"#));
    }
}
