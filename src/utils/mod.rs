//! Utility modules
//!
//! Error, warning and result types used across the crate.

pub mod error;

// Re-export commonly used items
pub use error::{
    BuildError, ConversionError, ConversionOutput, ConversionResult, ConversionWarning,
    WarningKind,
};
