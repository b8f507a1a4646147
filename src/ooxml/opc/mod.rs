//! Open Packaging Conventions (OPC) writer.
//!
//! An OPC package is a ZIP archive of named parts, a `[Content_Types].xml`
//! part mapping them to content types, and `.rels` parts describing the
//! relationships between them. This module covers what is needed to write
//! one: part naming, relationships, the in-memory package and the ZIP writer.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::BlobPart;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
