//! Error types for ARGB tensor conversion operations.

use argb_tensor_transform::NormalizeValidationError;
use thiserror::Error;

/// Errors that can occur during ARGB tensor conversion operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgbTensorError {
    /// The source slice does not hold exactly `width * height` pixels.
    #[error("Source length mismatch: expected {expected} pixels (width * height), got {actual}.")]
    LengthMismatch {
        /// The pixel count implied by the dimensions.
        expected: usize,
        /// The actual source slice length.
        actual: usize,
    },

    /// The output buffer is too small for the operation.
    #[error("Output buffer too small: need {needed} floats, but only {actual} floats available.")]
    OutputBufferTooSmall {
        /// The required size in floats
        needed: usize,
        /// The actual size in floats
        actual: usize,
    },

    /// The pixel grid is too large to address.
    #[error("Pixel count overflow: {width} x {height} pixels exceed addressable memory.")]
    PixelCountOverflow {
        /// The requested frame width.
        width: u32,
        /// The requested frame height.
        height: u32,
    },
}

// Internal conversion functions to avoid exposing core types in public From traits.
// The types below are unstable, but ours have to be stable.
impl ArgbTensorError {
    /// Convert from core validation error (internal use only)
    pub(crate) fn from_validation_error(err: NormalizeValidationError) -> Self {
        match err {
            NormalizeValidationError::LengthMismatch { expected, actual } => {
                ArgbTensorError::LengthMismatch { expected, actual }
            }
            NormalizeValidationError::OutputBufferTooSmall { needed, actual } => {
                ArgbTensorError::OutputBufferTooSmall { needed, actual }
            }
            NormalizeValidationError::PixelCountOverflow { width, height } => {
                ArgbTensorError::PixelCountOverflow { width, height }
            }
        }
    }
}
