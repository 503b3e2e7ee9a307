//! Foundation types for docbridge.
//!
//! This module provides the small building blocks used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Byte offsets of markup segments within a line
//! - [`text_utils`] - Identifier classification, word splitting, case conversion
//!
//! This module has NO dependencies on other docbridge modules.

pub mod text_utils;

pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
