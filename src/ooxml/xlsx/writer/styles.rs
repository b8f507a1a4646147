//! Styles.xml generator for XLSX files.
//!
//! This module collects the fills used by a workbook, assigns each distinct
//! fill a cell format (XF record) index, and generates the styles.xml part.

use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::xlsx::format::CellFill;
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

/// Opaque handle to a registered cell style.
///
/// The wrapped value is the index of the cell's XF record in `cellXfs`,
/// which is what a cell's `s` attribute refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub(crate) usize);

impl StyleId {
    /// The default style every cell has when nothing is assigned.
    pub const DEFAULT: StyleId = StyleId(0);

    /// Index of this style in the `cellXfs` table.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Builder for generating styles.xml content.
///
/// Fills are deduplicated: registering an identical fill twice yields the
/// same [`StyleId`].
#[derive(Debug)]
pub struct StylesBuilder {
    /// Unique fills (index -> fill)
    fills: Vec<CellFill>,
    /// Fill lookup (fill -> index)
    fill_map: HashMap<CellFill, usize>,
    /// Cell formats (XF records), each referencing a fill index
    cell_formats: Vec<usize>,
    /// Cell format lookup (fill index -> style)
    cell_format_map: HashMap<usize, StyleId>,
}

impl StylesBuilder {
    /// Create a new StylesBuilder with the default styles Excel requires.
    pub fn new() -> Self {
        let mut builder = Self {
            fills: Vec::new(),
            fill_map: HashMap::new(),
            cell_formats: Vec::new(),
            cell_format_map: HashMap::new(),
        };

        // Fills 0 and 1 are reserved: none and gray125
        builder.add_fill(&CellFill::none());
        builder.add_fill(&CellFill::gray125());

        // Default cell format (style index 0) uses fill 0
        builder.cell_formats.push(0);
        builder.cell_format_map.insert(0, StyleId::DEFAULT);

        builder
    }

    /// Register a fill style and return its style id.
    ///
    /// If the fill has already been registered, returns the existing id.
    pub fn add_fill_style(&mut self, fill: &CellFill) -> StyleId {
        let fill_id = self.add_fill(fill);

        if let Some(&style) = self.cell_format_map.get(&fill_id) {
            return style;
        }

        let style = StyleId(self.cell_formats.len());
        self.cell_formats.push(fill_id);
        self.cell_format_map.insert(fill_id, style);
        style
    }

    /// Add a fill and return its index.
    fn add_fill(&mut self, fill: &CellFill) -> usize {
        if let Some(&index) = self.fill_map.get(fill) {
            return index;
        }

        let index = self.fills.len();
        self.fills.push(fill.clone());
        self.fill_map.insert(fill.clone(), index);
        index
    }

    /// Number of cell formats, including the default one.
    pub fn style_count(&self) -> usize {
        self.cell_formats.len()
    }

    /// Look up the fill behind a style id.
    pub fn fill_for(&self, style: StyleId) -> Option<&CellFill> {
        let fill_id = *self.cell_formats.get(style.0)?;
        self.fills.get(fill_id)
    }

    /// Generate the complete styles.xml content.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.fills.len() * 96);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<styleSheet xmlns="{}">"#, namespace::SML_MAIN)?;

        // A single default font (Excel refuses a styleSheet without one)
        xml.push_str(r#"<fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>"#);

        write!(xml, r#"<fills count="{}">"#, self.fills.len())?;
        for fill in &self.fills {
            Self::write_fill(&mut xml, fill)?;
        }
        xml.push_str("</fills>");

        xml.push_str(r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#);

        // Write cell style XFs (required, even if empty)
        xml.push_str(r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#);

        write!(xml, r#"<cellXfs count="{}">"#, self.cell_formats.len())?;
        for &fill_id in &self.cell_formats {
            write!(
                xml,
                r#"<xf numFmtId="0" fontId="0" fillId="{}" borderId="0" xfId="0""#,
                fill_id
            )?;
            if fill_id != 0 {
                xml.push_str(r#" applyFill="1""#);
            }
            xml.push_str("/>");
        }
        xml.push_str("</cellXfs>");

        xml.push_str(r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#);
        xml.push_str("</styleSheet>");

        Ok(xml)
    }

    /// Write a fill element to XML.
    fn write_fill(xml: &mut String, fill: &CellFill) -> Result<()> {
        write!(
            xml,
            r#"<fill><patternFill patternType="{}""#,
            fill.pattern_type.as_str()
        )?;

        if fill.fg_color.is_none() && fill.bg_color.is_none() {
            xml.push_str("/></fill>");
            return Ok(());
        }
        xml.push('>');

        if let Some(ref fg_color) = fill.fg_color {
            write!(xml, r#"<fgColor rgb="{}"/>"#, escape_xml(fg_color))?;
        }
        if let Some(ref bg_color) = fill.bg_color {
            write!(xml, r#"<bgColor rgb="{}"/>"#, escape_xml(bg_color))?;
        }

        xml.push_str("</patternFill></fill>");
        Ok(())
    }
}

impl Default for StylesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_default_styles() {
        let builder = StylesBuilder::new();
        assert_eq!(builder.fills.len(), 2); // Two required default fills
        assert_eq!(builder.style_count(), 1); // Default cell format
    }

    #[test]
    fn test_add_fill_style_deduplicates() {
        let mut builder = StylesBuilder::new();

        let red = builder.add_fill_style(&CellFill::solid("FF0000"));
        assert_eq!(red.index(), 1); // First custom format after default

        let blue = builder.add_fill_style(&CellFill::solid("0000FF"));
        assert_eq!(blue.index(), 2);

        assert_eq!(builder.add_fill_style(&CellFill::solid("FF0000")), red);
        assert_eq!(builder.style_count(), 3);
        assert_eq!(
            builder.fill_for(blue).and_then(|f| f.fg_color.as_deref()),
            Some("FF0000FF")
        );
    }

    #[test]
    fn test_no_fill_maps_to_default_style() {
        let mut builder = StylesBuilder::new();
        assert_eq!(builder.add_fill_style(&CellFill::none()), StyleId::DEFAULT);
        assert_eq!(builder.style_count(), 1);
    }

    #[test]
    fn test_generate_xml() {
        let mut builder = StylesBuilder::new();
        builder.add_fill_style(&CellFill::solid("FF0000"));

        let xml = builder.to_xml().unwrap();
        assert!(xml.contains(r#"<fills count="3">"#));
        assert!(xml.contains(r#"<patternFill patternType="none"/>"#));
        assert!(xml.contains(r#"<patternFill patternType="gray125"/>"#));
        assert!(xml.contains(r#"<patternFill patternType="solid"><fgColor rgb="FFFF0000"/></patternFill>"#));
        assert!(xml.contains(r#"<cellXfs count="2">"#));
        assert!(xml.contains(r#"fillId="2" borderId="0" xfId="0" applyFill="1"/>"#));
    }
}
