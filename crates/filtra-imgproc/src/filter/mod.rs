//! Filter operations
//!
//! This module provides neighborhood filter operations for image processing.

/// Filter kernel presets
pub mod kernels;

/// Filter kernel type
mod kernel;
pub use kernel::Kernel;

/// Filter operations
mod ops;
pub use ops::*;
