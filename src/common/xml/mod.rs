//! XML helpers shared by the package writers.

pub mod escape;

pub use escape::escape_xml;
