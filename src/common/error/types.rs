//! Unified error types for pixelsheet.
//!
//! Every failure a conversion can hit, from picking a decoder to writing the
//! finished package, is represented here so that the binary has exactly one
//! place to turn an error into a message and an exit code.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pixelsheet operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path has no extension to pick a decoder from
    #[error("unknown file type")]
    UnknownExtension,

    /// The input extension is not one of the accepted JPEG/PNG spellings
    #[error("unsupported file type: .{0}")]
    UnsupportedExtension(String),

    /// The input file could not be read
    #[error("open file: {} error: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The decoder rejected the file contents
    #[error("decode pic {} error: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The worksheet could not be renamed
    #[error("rename sheet error: {0}")]
    Rename(String),

    /// The decoded image has no pixels
    #[error("blank file")]
    BlankImage,

    /// The image does not fit in a worksheet grid
    #[error("image of {width}x{height} pixels exceeds the worksheet limit of 16384 columns by 1048576 rows")]
    ImageTooLarge { width: u32, height: u32 },

    /// A cell or column reference is malformed or out of range
    #[error("invalid cell reference: {0}")]
    InvalidCellReference(String),

    /// No worksheet carries the requested name
    #[error("sheet {0} does not exist")]
    SheetNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),
}

/// Result type for pixelsheet operations.
pub type Result<T> = std::result::Result<T, Error>;
