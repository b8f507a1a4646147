//! Workbook data structure for XLSX.
use crate::common::xml::escape_xml;
use crate::common::{Error, Result};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::xlsx::cell::{cell_name_to_coordinates, column_name_to_number};
use crate::ooxml::xlsx::format::CellFill;
use crate::sink::SheetSink;
use std::fmt::Write as FmtWrite;

use super::sheet::MutableWorksheet;
use super::styles::{StyleId, StylesBuilder};

/// Name of the worksheet every new workbook starts with.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Longest sheet name Excel accepts, in characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters Excel forbids in sheet names.
const INVALID_SHEET_NAME_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// Mutable workbook for writing.
///
/// This is managed internally by the Workbook struct.
#[derive(Debug)]
pub struct MutableWorkbookData {
    /// Worksheets
    pub worksheets: Vec<MutableWorksheet>,
    /// Styles shared by every worksheet
    pub styles: StylesBuilder,
}

impl MutableWorkbookData {
    /// Create a new workbook with one default worksheet.
    pub fn new() -> Self {
        let mut data = Self {
            worksheets: Vec::new(),
            styles: StylesBuilder::new(),
        };
        data.worksheets
            .push(MutableWorksheet::new(DEFAULT_SHEET_NAME.to_string(), 1));
        data
    }

    /// Get the number of worksheets.
    pub fn worksheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Find a worksheet index by name (case-insensitive, as Excel does).
    pub fn worksheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets
            .iter()
            .position(|ws| ws.name().eq_ignore_ascii_case(name))
    }

    /// Rename a worksheet, enforcing Excel's sheet naming rules.
    pub fn rename_worksheet(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let index = self
            .worksheet_index(old_name)
            .ok_or_else(|| Error::SheetNotFound(old_name.to_string()))?;

        if self.worksheets[index].name() == new_name {
            return Ok(());
        }

        validate_sheet_name(new_name)?;

        let taken = self
            .worksheets
            .iter()
            .enumerate()
            .any(|(i, ws)| i != index && ws.name().eq_ignore_ascii_case(new_name));
        if taken {
            return Err(Error::Rename(format!(
                "a sheet named '{}' already exists",
                new_name
            )));
        }

        self.worksheets[index].set_name(new_name.to_string());
        Ok(())
    }

    /// Borrow a worksheet together with the shared style table for editing.
    pub fn sheet_writer(&mut self, name: &str) -> Result<SheetWriter<'_>> {
        let index = self
            .worksheet_index(name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;
        Ok(SheetWriter {
            sheet: &mut self.worksheets[index],
            styles: &mut self.styles,
        })
    }

    /// Generate workbook.xml content.
    ///
    /// # Arguments
    /// * `worksheet_rel_ids` - Relationship IDs for worksheets, in sheet order
    pub fn generate_workbook_xml(&self, worksheet_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<workbook xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        xml.push_str(r#"<bookViews><workbookView activeTab="0"/></bookViews>"#);

        xml.push_str("<sheets>");
        for (ws, rel_id) in self.worksheets.iter().zip(worksheet_rel_ids) {
            write!(
                xml,
                r#"<sheet name="{}" sheetId="{}" r:id="{}"/>"#,
                escape_xml(ws.name()),
                ws.sheet_id(),
                rel_id
            )?;
        }
        xml.push_str("</sheets>");
        xml.push_str("</workbook>");

        Ok(xml)
    }
}

impl Default for MutableWorkbookData {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a sheet name against Excel's rules.
pub fn validate_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Rename("sheet name cannot be blank".to_string()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::Rename(format!(
            "sheet name '{}' is longer than {} characters",
            name, MAX_SHEET_NAME_LEN
        )));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(Error::Rename(format!(
            "sheet name '{}' cannot start or end with an apostrophe",
            name
        )));
    }
    if let Some(c) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
        return Err(Error::Rename(format!(
            "sheet name '{}' contains invalid character '{}'",
            name, c
        )));
    }
    Ok(())
}

/// Editing handle for one worksheet plus the workbook's style table.
///
/// This is what the pixel mapper writes through.
#[derive(Debug)]
pub struct SheetWriter<'a> {
    sheet: &'a mut MutableWorksheet,
    styles: &'a mut StylesBuilder,
}

impl SheetWriter<'_> {
    /// The worksheet being edited.
    pub fn sheet(&self) -> &MutableWorksheet {
        self.sheet
    }
}

impl SheetSink for SheetWriter<'_> {
    fn set_column_width(&mut self, first: &str, last: &str, width: f64) -> Result<()> {
        let first = column_name_to_number(first)?;
        let last = column_name_to_number(last)?;
        self.sheet.set_column_width_range(first, last, width);
        Ok(())
    }

    fn new_fill_style(&mut self, fill: &CellFill) -> Result<StyleId> {
        Ok(self.styles.add_fill_style(fill))
    }

    fn set_cell_style(&mut self, cell: &str, style: StyleId) -> Result<()> {
        if style.index() >= self.styles.style_count() {
            return Err(Error::InvalidCellReference(format!(
                "style {} is not registered",
                style.index()
            )));
        }
        let (col, row) = cell_name_to_coordinates(cell)?;
        self.sheet.set_cell_style(row, col, style);
        Ok(())
    }
}
