//! ARGB normalization with explicit layout (safe slice-based wrapper).
//!
//! This module provides functions to convert packed ARGB pixel slices into
//! normalized RGB float slices, validating every length and dimension before
//! touching the buffers.

use crate::normalize::settings::TensorLayout;
use crate::normalize::{interleaved, planar};
use likely_stable::unlikely;
use thiserror::Error;

/// Validation errors for ARGB tensor conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeValidationError {
    /// Source slice does not hold exactly `width * height` pixels.
    #[error("Source length mismatch: expected {expected} pixels (width * height), got {actual}")]
    LengthMismatch {
        /// The pixel count implied by the dimensions.
        expected: usize,
        /// The actual source slice length.
        actual: usize,
    },

    /// Destination slice is too small to hold the converted tensor.
    #[error("Output buffer too small: needed {needed}, got {actual}")]
    OutputBufferTooSmall {
        /// The required buffer length in floats.
        needed: usize,
        /// The actual buffer length provided.
        actual: usize,
    },

    /// `width * height * 3` does not fit in `usize`.
    #[error("Pixel count overflow: {width} x {height} pixels exceed addressable memory")]
    PixelCountOverflow {
        /// The requested frame width.
        width: u32,
        /// The requested frame height.
        height: u32,
    },
}

/// Validates the buffer/dimension contract shared by every safe entry point.
///
/// Returns the pixel count on success.
#[inline]
fn validate(
    source: &[u32],
    destination: &[f32],
    width: u32,
    height: u32,
) -> Result<usize, NormalizeValidationError> {
    let overflow = NormalizeValidationError::PixelCountOverflow { width, height };
    let num_pixels = (width as usize)
        .checked_mul(height as usize)
        .ok_or(overflow.clone())?;
    let needed = num_pixels.checked_mul(3).ok_or(overflow)?;

    if unlikely(source.len() != num_pixels) {
        return Err(NormalizeValidationError::LengthMismatch {
            expected: num_pixels,
            actual: source.len(),
        });
    }

    if unlikely(destination.len() < needed) {
        return Err(NormalizeValidationError::OutputBufferTooSmall {
            needed,
            actual: destination.len(),
        });
    }

    Ok(num_pixels)
}

/// Convert a frame of packed ARGB pixels into normalized RGB floats in the
/// given [`TensorLayout`].
///
/// `width == 0` or `height == 0` is a valid empty frame: zero writes, `Ok`.
/// Destination floats beyond `width * height * 3` are left untouched.
///
/// # Parameters
///
/// - `source`: The packed ARGB pixels, row-major, exactly `width * height` long
/// - `destination`: The output buffer, at least `width * height * 3` floats
/// - `width`: Frame width in pixels
/// - `height`: Frame height in pixels
/// - `layout`: The output arrangement to produce
///
/// # Errors
///
/// - [`NormalizeValidationError::LengthMismatch`] if `source.len() != width * height`
/// - [`NormalizeValidationError::OutputBufferTooSmall`] if `destination.len() < width * height * 3`
/// - [`NormalizeValidationError::PixelCountOverflow`] if `width * height * 3` overflows `usize`
///
/// # Examples
///
/// ```
/// use argb_tensor_transform::{TensorLayout, normalize_argb_with_layout_safe};
///
/// # fn main() -> Result<(), argb_tensor_transform::NormalizeValidationError> {
/// let pixels = [0xFFFF_FFFFu32, 0xFF00_0000, 0xFFFF_0000, 0xFF00_FF00]; // 2x2 frame
/// let mut tensor = [0.0f32; 12];
///
/// normalize_argb_with_layout_safe(&pixels, &mut tensor, 2, 2, TensorLayout::Interleaved)?;
/// assert_eq!(tensor[0..3], [1.0, 1.0, 1.0]); // white
/// assert_eq!(tensor[6..9], [1.0, 0.0, 0.0]); // red
/// # Ok(())
/// # }
/// ```
pub fn normalize_argb_with_layout(
    source: &[u32],
    destination: &mut [f32],
    width: u32,
    height: u32,
    layout: TensorLayout,
) -> Result<(), NormalizeValidationError> {
    let num_pixels = validate(source, destination, width, height)?;

    // Safety: lengths and dimensions validated above
    unsafe {
        match layout {
            TensorLayout::Interleaved => {
                interleaved::normalize(source.as_ptr(), destination.as_mut_ptr(), num_pixels)
            }
            TensorLayout::Planar => {
                planar::normalize(source.as_ptr(), destination.as_mut_ptr(), num_pixels)
            }
        }
    }

    Ok(())
}

/// Convert a frame of packed ARGB pixels into interleaved (HWC) normalized
/// RGB floats.
///
/// Equivalent to [`normalize_argb_with_layout`] with
/// [`TensorLayout::Interleaved`]; see there for the full contract.
///
/// # Errors
///
/// Same as [`normalize_argb_with_layout`].
pub fn normalize_argb_interleaved(
    source: &[u32],
    destination: &mut [f32],
    width: u32,
    height: u32,
) -> Result<(), NormalizeValidationError> {
    normalize_argb_with_layout(source, destination, width, height, TensorLayout::Interleaved)
}

/// Convert a frame of packed ARGB pixels into planar (CHW) normalized RGB
/// floats.
///
/// Equivalent to [`normalize_argb_with_layout`] with [`TensorLayout::Planar`];
/// see there for the full contract.
///
/// # Errors
///
/// Same as [`normalize_argb_with_layout`].
pub fn normalize_argb_planar(
    source: &[u32],
    destination: &mut [f32],
    width: u32,
    height: u32,
) -> Result<(), NormalizeValidationError> {
    normalize_argb_with_layout(source, destination, width, height, TensorLayout::Planar)
}
