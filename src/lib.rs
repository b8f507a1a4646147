//! Pixelsheet - turn a picture into a spreadsheet
//!
//! Every pixel of a JPEG or PNG image becomes one cell of an Excel
//! worksheet, filled solid with the pixel's color. Columns are narrowed so
//! the cells come out roughly square, which makes the sheet look like the
//! picture when zoomed out.
//!
//! # Features
//!
//! - **Image loading**: JPEG and PNG, chosen by file extension
//! - **Color flattening**: premultiplied 16-bit RGBA to `RRGGBB`, with an
//!   optional composite over white
//! - **XLSX writing**: a small SpreadsheetML writer with deduplicated fill
//!   styles, packaged as an OPC (ZIP) archive
//!
//! # Example - Converting a file
//!
//! ```no_run
//! use pixelsheet::{Config, convert};
//! use pixelsheet::mapper::NoProgress;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default().with_output_path("sunset.xlsx");
//! let summary = convert("sunset.png", &config, &mut NoProgress)?;
//! println!("{} cells on sheet {}", summary.stats.cells, summary.sheet_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Mapping into a workbook
//!
//! ```no_run
//! use pixelsheet::mapper::{MapOptions, map_image_to_sheet};
//! use pixelsheet::ooxml::xlsx::Workbook;
//! use pixelsheet::source::read_image;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let image = read_image("icon.png")?;
//! let mut workbook = Workbook::new();
//! {
//!     let mut sheet = workbook.sheet_writer("Sheet1")?;
//!     map_image_to_sheet(&image, &mut sheet, &MapOptions::default(), &mut |row: u32, total: u32| {
//!         eprintln!("row {} of {}", row + 1, total);
//!     })?;
//! }
//! workbook.save("icon.xlsx")?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod common;
pub mod config;
pub mod mapper;
pub mod ooxml;
pub mod sink;
pub mod source;

pub use color::{AlphaMode, HexColor, to_hex_color};
pub use common::{Error, Result};
pub use config::Config;
pub use mapper::{MapOptions, MapStats, ProgressObserver, map_image_to_sheet};
pub use sink::SheetSink;
pub use source::{DecodedImage, PixelGrid, read_image};

use crate::ooxml::common::DocumentProperties;
use crate::ooxml::xlsx::Workbook;
use crate::ooxml::xlsx::writer::DEFAULT_SHEET_NAME;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of a successful [`convert`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Name given to the worksheet
    pub sheet_name: String,
    /// Where the workbook was written
    pub output_path: PathBuf,
    pub stats: MapStats,
}

/// Convert the image at `input` into a workbook saved at `config.output_path`.
///
/// The worksheet is named after the image's file name without extension.
/// Nothing is written unless every pixel was mapped.
pub fn convert<P, O>(input: P, config: &Config, progress: &mut O) -> Result<ConversionSummary>
where
    P: AsRef<Path>,
    O: ProgressObserver + ?Sized,
{
    let input = input.as_ref();
    let image = read_image(input)?;

    let sheet_name = source::sheet_name_for(input);
    let mut workbook = Workbook::new();
    workbook.rename_sheet(DEFAULT_SHEET_NAME, &sheet_name)?;
    workbook.set_properties(
        DocumentProperties::new()
            .title(&sheet_name)
            .creator(env!("CARGO_PKG_NAME"))
            .stamped(chrono::Utc::now()),
    );

    let stats = {
        let mut sheet = workbook.sheet_writer(&sheet_name)?;
        map_image_to_sheet(&image, &mut sheet, &config.map_options(), progress)?
    };

    workbook.save(&config.output_path)?;
    info!(
        input = %input.display(),
        output = %config.output_path.display(),
        sheet = %sheet_name,
        cells = stats.cells,
        styles = stats.distinct_styles,
        "converted image"
    );

    Ok(ConversionSummary {
        sheet_name,
        output_path: config.output_path.clone(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::NoProgress;
    use image::{Rgba, RgbaImage};
    use std::io::{Cursor, Read};

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_convert_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flag.png");
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        img.save(&input).unwrap();

        let output = dir.path().join("a.xlsx");
        let config = Config::default().with_output_path(&output);
        let mut rows = Vec::new();
        let summary = convert(&input, &config, &mut |row: u32, total: u32| rows.push((row, total)))
            .unwrap();

        assert_eq!(summary.sheet_name, "flag");
        assert_eq!(summary.stats.cells, 2);
        assert_eq!(summary.stats.distinct_styles, 2);
        assert_eq!(rows, vec![(0, 1)]);

        let bytes = std::fs::read(&output).unwrap();
        let workbook = read_entry(&bytes, "xl/workbook.xml");
        assert_eq!(workbook.matches("<sheet ").count(), 1);
        assert!(workbook.contains(r#"name="flag""#));

        let sheet = read_entry(&bytes, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains(r#"<col min="1" max="2" width="2.85" customWidth="1"/>"#));
        assert!(sheet.contains(r#"<c r="A1" s="1"/><c r="B1" s="2"/>"#));

        let styles = read_entry(&bytes, "xl/styles.xml");
        let red = styles.find(r#"<fgColor rgb="FFFF0000"/>"#).unwrap();
        let blue = styles.find(r#"<fgColor rgb="FF0000FF"/>"#).unwrap();
        assert!(red < blue);

        let core = read_entry(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:creator>pixelsheet</dc:creator>"));
    }

    #[test]
    fn test_convert_rejects_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("anim.gif");
        std::fs::write(&input, b"GIF89a").unwrap();
        let output = dir.path().join("a.xlsx");

        let err = convert(&input, &Config::default().with_output_path(&output), &mut NoProgress)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension(ext) if ext == "gif"));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_rejects_unusable_sheet_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("[draft].png");
        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]))
            .save(&input)
            .unwrap();
        let output = dir.path().join("a.xlsx");

        let err = convert(&input, &Config::default().with_output_path(&output), &mut NoProgress)
            .unwrap_err();
        assert!(matches!(err, Error::Rename(_)));
        assert!(!output.exists());
    }
}
