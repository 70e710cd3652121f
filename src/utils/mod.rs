//! Utility modules
//!
//! This module contains error types and file plumbing:
//! - Error and result types for emission operations
//! - Scoped file acquisition and directory creation

pub mod error;
pub mod files;

// Re-export commonly used items
pub use error::{EmitError, EmitResult};
pub use files::{create_dirs, with_file, FileMode};
