//! Excel Workbook implementation.
//!
//! A [`Workbook`] owns the mutable sheet and style data and knows how to lay
//! them out as an OPC package: workbook, styles and one part per worksheet,
//! plus the core properties.

use crate::common::{Error, Result};
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, PackageWriter};
use crate::ooxml::xlsx::writer::{MutableWorkbookData, MutableWorksheet, SheetWriter};
use std::path::Path;
use tracing::debug;

/// An Excel workbook being built in memory.
#[derive(Debug)]
pub struct Workbook {
    /// Sheets and shared styles
    data: MutableWorkbookData,
    /// Document properties (metadata)
    properties: DocumentProperties,
}

impl Workbook {
    /// Create a new workbook with one default worksheet named `Sheet1`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use pixelsheet::ooxml::xlsx::Workbook;
    ///
    /// let mut workbook = Workbook::new();
    /// workbook.rename_sheet("Sheet1", "pixels")?;
    /// workbook.save("new_workbook.xlsx")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new() -> Self {
        Self {
            data: MutableWorkbookData::new(),
            properties: DocumentProperties::new(),
        }
    }

    /// Replace the document properties written to `docProps/core.xml`.
    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    /// Get the document properties.
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Names of all worksheets, in tab order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.data.worksheets.iter().map(|ws| ws.name()).collect()
    }

    /// Rename a worksheet.
    pub fn rename_sheet(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        self.data.rename_worksheet(old_name, new_name)
    }

    /// Look up a worksheet by name.
    pub fn worksheet(&self, name: &str) -> Option<&MutableWorksheet> {
        let index = self.data.worksheet_index(name)?;
        self.data.worksheets.get(index)
    }

    /// Get an editing handle for the named worksheet.
    pub fn sheet_writer(&mut self, name: &str) -> Result<SheetWriter<'_>> {
        self.data.sheet_writer(name)
    }

    /// Number of registered cell styles, including the default one.
    pub fn style_count(&self) -> usize {
        self.data.styles.style_count()
    }

    /// Assemble the OPC package for this workbook.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let mut workbook_part = BlobPart::new(
            pack_uri("/xl/workbook.xml")?,
            ct::SML_SHEET_MAIN,
            Vec::new(),
        );
        package.relate_to("xl/workbook.xml", rt::OFFICE_DOCUMENT);

        let mut worksheet_rel_ids = Vec::with_capacity(self.data.worksheet_count());
        for ws in &self.data.worksheets {
            let target = format!("worksheets/sheet{}.xml", ws.sheet_id());
            let ws_part = BlobPart::new(
                pack_uri(format!("/xl/{}", target))?,
                ct::SML_WORKSHEET,
                ws.to_xml()?.into_bytes(),
            );
            package.add_part(ws_part);
            worksheet_rel_ids.push(workbook_part.relate_to(&target, rt::WORKSHEET));
        }

        let styles_part = BlobPart::new(
            pack_uri("/xl/styles.xml")?,
            ct::SML_STYLES,
            self.data.styles.to_xml()?.into_bytes(),
        );
        package.add_part(styles_part);
        workbook_part.relate_to("styles.xml", rt::STYLES);

        let workbook_xml = self.data.generate_workbook_xml(&worksheet_rel_ids)?;
        workbook_part.set_blob(workbook_xml.into_bytes());
        package.add_part(workbook_part);

        let core_part = BlobPart::new(
            pack_uri("/docProps/core.xml")?,
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_xml().into_bytes(),
        );
        package.add_part(core_part);
        package.relate_to("docProps/core.xml", rt::CORE_PROPERTIES);

        Ok(package)
    }

    /// Serialize the workbook to the bytes of an .xlsx file.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Save the workbook to an .xlsx file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let package = self.to_package()?;
        debug!(
            path = %path.display(),
            parts = package.part_count(),
            styles = self.style_count(),
            "saving workbook"
        );
        PackageWriter::write(path, &package)?;
        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

fn pack_uri<S: Into<String>>(uri: S) -> Result<PackURI> {
    PackURI::new(uri).map_err(Error::XmlError)
}
