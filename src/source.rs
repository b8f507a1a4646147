//! Image loading: decoder selection by extension and decoding into a pixel grid.

use crate::common::{Error, Result};
use image::{ImageBuffer, ImageFormat, Rgba};
use std::path::Path;
use tracing::debug;

/// Image formats the converter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Pick the decoder for a path from its extension.
    ///
    /// Only the exact spellings `jpg JPG jpeg JPEG png PNG` are accepted.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        match extension(path.as_ref()) {
            None => Err(Error::UnknownExtension),
            Some(b"jpg" | b"JPG" | b"jpeg" | b"JPEG") => Ok(Self::Jpeg),
            Some(b"png" | b"PNG") => Ok(Self::Png),
            Some(other) => Err(Error::UnsupportedExtension(
                String::from_utf8_lossy(other).into_owned(),
            )),
        }
    }

    fn format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }
}

/// Everything after the last `.` of the file name, or `None` if there is no dot.
///
/// Works on the raw name so that file names which are not valid UTF-8 still
/// resolve.
fn extension(path: &Path) -> Option<&[u8]> {
    let name = path.file_name()?.as_encoded_bytes();
    name.iter().rposition(|&b| b == b'.').map(|i| &name[i + 1..])
}

/// The file name without its extension, used as the worksheet name.
pub fn sheet_name_for<P: AsRef<Path>>(path: P) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(i) => name[..i].to_string(),
        None => name.into_owned(),
    }
}

/// A grid of pixels addressed by zero-based (column, row).
pub trait PixelGrid {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// The 16-bit `[r, g, b, a]` sample at (x, y), with alpha premultiplied
    /// into the color channels.
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4];
}

/// A decoded image held as premultiplied 16-bit RGBA.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: ImageBuffer<Rgba<u16>, Vec<u16>>,
}

impl DecodedImage {
    /// Build from a decoded image, widening to 16 bits and premultiplying alpha.
    pub fn from_dynamic(image: &image::DynamicImage) -> Self {
        let mut pixels = image.to_rgba16();
        for Rgba([r, g, b, a]) in pixels.pixels_mut() {
            let alpha = *a as u32;
            *r = premultiply(*r, alpha);
            *g = premultiply(*g, alpha);
            *b = premultiply(*b, alpha);
        }
        Self { pixels }
    }
}

fn premultiply(c: u16, a: u32) -> u16 {
    (c as u32 * a / 0xFFFF) as u16
}

impl PixelGrid for DecodedImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        self.pixels.get_pixel(x, y).0
    }
}

/// Read and decode the image at `path`.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage> {
    let path = path.as_ref();
    let kind = ImageKind::from_path(path)?;

    let bytes = std::fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded =
        image::load_from_memory_with_format(&bytes, kind.format()).map_err(|source| {
            Error::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;

    debug!(
        path = %path.display(),
        ?kind,
        width = decoded.width(),
        height = decoded.height(),
        "decoded image"
    );
    Ok(DecodedImage::from_dynamic(&decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage, RgbaImage};

    #[test]
    fn test_extension_selection() {
        assert_eq!(ImageKind::from_path("a.jpg").unwrap(), ImageKind::Jpeg);
        assert_eq!(ImageKind::from_path("dir/a.JPEG").unwrap(), ImageKind::Jpeg);
        assert_eq!(ImageKind::from_path("a.b.png").unwrap(), ImageKind::Png);
        assert_eq!(ImageKind::from_path("A.PNG").unwrap(), ImageKind::Png);
    }

    #[test]
    fn test_extension_rejections() {
        assert!(matches!(ImageKind::from_path("noext"), Err(Error::UnknownExtension)));
        assert!(matches!(
            ImageKind::from_path("a.gif"),
            Err(Error::UnsupportedExtension(ext)) if ext == "gif"
        ));
        // Mixed case is not one of the accepted spellings
        assert!(matches!(
            ImageKind::from_path("a.Png"),
            Err(Error::UnsupportedExtension(_))
        ));
        assert!(matches!(
            ImageKind::from_path("trailing."),
            Err(Error::UnsupportedExtension(ext)) if ext.is_empty()
        ));
    }

    #[test]
    fn test_sheet_name_for() {
        assert_eq!(sheet_name_for("photos/sunset.jpg"), "sunset");
        assert_eq!(sheet_name_for("a.b.png"), "a.b");
        assert_eq!(sheet_name_for("plain"), "plain");
    }

    #[test]
    fn test_opaque_rgb_is_widened() {
        let mut rgb = RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        rgb.put_pixel(1, 0, image::Rgb([0x12, 0x34, 0x56]));
        let img = DecodedImage::from_dynamic(&DynamicImage::ImageRgb8(rgb));

        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(img.rgba16(0, 0), [0xFFFF, 0, 0, 0xFFFF]);
        assert_eq!(img.rgba16(1, 0), [0x1212, 0x3434, 0x5656, 0xFFFF]);
    }

    #[test]
    fn test_alpha_is_premultiplied() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, image::Rgba([255, 255, 255, 0]));
        rgba.put_pixel(1, 0, image::Rgba([255, 0, 0, 0x80]));
        let img = DecodedImage::from_dynamic(&DynamicImage::ImageRgba8(rgba));

        assert_eq!(img.rgba16(0, 0), [0, 0, 0, 0]);
        assert_eq!(img.rgba16(1, 0), [0x8080, 0, 0, 0x8080]);
    }

    #[test]
    fn test_read_image_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.png");
        assert!(matches!(read_image(&missing), Err(Error::FileRead { .. })));

        let garbage = dir.path().join("garbage.jpg");
        std::fs::write(&garbage, b"not a jpeg").unwrap();
        assert!(matches!(read_image(&garbage), Err(Error::Decode { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_name_is_decoded() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"caf\xe9.png"));
        RgbaImage::from_pixel(1, 1, image::Rgba([0, 255, 0, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        assert_eq!(ImageKind::from_path(&path).unwrap(), ImageKind::Png);
        let img = read_image(&path).unwrap();
        assert_eq!(img.rgba16(0, 0), [0, 0xFFFF, 0, 0xFFFF]);
        assert_eq!(sheet_name_for(&path), "caf\u{FFFD}");
    }

    #[test]
    fn test_read_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        RgbaImage::from_pixel(3, 2, image::Rgba([0, 0, 255, 255]))
            .save(&path)
            .unwrap();

        let img = read_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.rgba16(2, 1), [0, 0, 0xFFFF, 0xFFFF]);
    }
}
