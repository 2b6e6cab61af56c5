//! C API error handling for ARGB tensor conversion.

use crate::error::ArgbTensorError;

/// C-compatible error codes for ARGB tensor conversion.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Source length does not match `width * height` pixels
    LengthMismatch = 1,
    /// Output buffer too small for the operation
    OutputBufferTooSmall = 2,
    /// `width * height * 3` exceeds addressable memory
    PixelCountOverflow = 3,
    /// Null pointer provided for the source pixel buffer
    NullSourcePointer = 4,
    /// Null pointer provided for the destination tensor buffer
    NullDestinationPointer = 5,
}

/// C-compatible Result type for ARGB tensor conversion.
#[repr(C)]
pub struct AttResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: AttErrorCode,
}

impl AttResult {
    /// Create a success result
    pub const fn success() -> Self {
        Self {
            error_code: AttErrorCode::Success,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: AttErrorCode) -> Self {
        Self { error_code }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, AttErrorCode::Success)
    }
}

impl<T> From<Result<T, ArgbTensorError>> for AttResult {
    fn from(result: Result<T, ArgbTensorError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => e.into(),
        }
    }
}

impl From<ArgbTensorError> for AttResult {
    fn from(error: ArgbTensorError) -> Self {
        let error_code = match error {
            ArgbTensorError::LengthMismatch { .. } => AttErrorCode::LengthMismatch,
            ArgbTensorError::OutputBufferTooSmall { .. } => AttErrorCode::OutputBufferTooSmall,
            ArgbTensorError::PixelCountOverflow { .. } => AttErrorCode::PixelCountOverflow,
        };
        Self::from_error_code(error_code)
    }
}
