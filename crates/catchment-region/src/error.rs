//! Error types for catchment-region

use catchment_core::Error as CoreError;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[source] CoreError),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Source and marker images differ in size
    #[error("size mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Working state for the flood could not be allocated
    #[error("out of memory: could not allocate {bytes} bytes of working state")]
    OutOfMemory { bytes: usize },

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

/// Allocation failures in the image container are reported as
/// [`RegionError::OutOfMemory`], like those of the flood's own state.
impl From<CoreError> for RegionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AllocationFailed { bytes } => RegionError::OutOfMemory { bytes },
            other => RegionError::Core(other),
        }
    }
}
