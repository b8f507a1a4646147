//! Unified error types for pixelsheet.
//!
//! This module provides a single error type covering image decoding,
//! worksheet editing and package writing.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
