//! Error types for catchment-core
//!
//! Provides a unified error type for the image container and its pixel
//! accessors. Each variant captures enough context for diagnostics without
//! exposing internal implementation details.

use thiserror::Error;

/// Catchment core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid pixel depth
    #[error("invalid pixel depth: {0} bpp")]
    InvalidDepth(u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Memory allocation failed
    #[error("memory allocation failed: {bytes} bytes requested")]
    AllocationFailed { bytes: usize },
}

/// Result type alias for catchment-core operations
pub type Result<T> = std::result::Result<T, Error>;
