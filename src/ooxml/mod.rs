//! Office Open XML (OOXML) writing.
//!
//! The module is organized in layers:
//!
//! 1. **OPC Layer** (`opc`): package parts, relationships and the ZIP writer
//! 2. **Shared parts** (`common`): document core properties
//! 3. **SpreadsheetML** (`xlsx`): workbooks, worksheets and styles
pub mod common;
pub mod opc;
pub mod xlsx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};
