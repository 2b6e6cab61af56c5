//! Safe, validated normalization entry points.

pub mod builder;

pub use builder::ArgbNormalizeBuilder;

use crate::error::ArgbTensorError;
use crate::layout::TensorLayout;
use argb_tensor_transform::normalize_argb_with_layout_safe;

/// Convert a frame of packed ARGB pixels into normalized RGB floats in the
/// given [`TensorLayout`].
///
/// Each pixel's red, green and blue bytes are rescaled to `[0.0, 1.0]`; the
/// alpha byte is discarded. `width == 0` or `height == 0` is a valid empty
/// frame: zero writes, `Ok`. Destination floats beyond `width * height * 3`
/// are left untouched.
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
/// Returns [`ArgbTensorError`] if the buffer lengths do not match the
/// dimensions.
///
/// # Examples
///
/// ```
/// use argb_tensor_transform_api::{TensorLayout, normalize_argb};
///
/// # fn main() -> Result<(), argb_tensor_transform_api::ArgbTensorError> {
/// let pixels = [0xFFFF_FFFFu32, 0xFF00_0000, 0xFFFF_0000, 0xFF00_FF00]; // 2x2 frame
/// let mut tensor = [0.0f32; 12];
///
/// normalize_argb(&pixels, &mut tensor, 2, 2, TensorLayout::Interleaved)?;
/// assert_eq!(tensor[0..3], [1.0, 1.0, 1.0]); // white
/// # Ok(())
/// # }
/// ```
pub fn normalize_argb(
    source: &[u32],
    destination: &mut [f32],
    width: u32,
    height: u32,
    layout: TensorLayout,
) -> Result<(), ArgbTensorError> {
    normalize_argb_with_layout_safe(
        source,
        destination,
        width,
        height,
        layout.to_internal_variant(),
    )
    .map_err(ArgbTensorError::from_validation_error)
}

/// Convert a frame of packed ARGB pixels into interleaved (HWC) normalized
/// RGB floats.
///
/// Equivalent to [`normalize_argb`] with [`TensorLayout::Interleaved`]; see
/// there for the full contract.
///
/// # Errors
///
/// Same as [`normalize_argb`].
pub fn normalize_argb_interleaved(
    source: &[u32],
    destination: &mut [f32],
    width: u32,
    height: u32,
) -> Result<(), ArgbTensorError> {
    normalize_argb(source, destination, width, height, TensorLayout::Interleaved)
}

/// Convert a frame of packed ARGB pixels into planar (CHW) normalized RGB
/// floats.
///
/// Equivalent to [`normalize_argb`] with [`TensorLayout::Planar`]; see there
/// for the full contract.
///
/// # Errors
///
/// Same as [`normalize_argb`].
pub fn normalize_argb_planar(
    source: &[u32],
    destination: &mut [f32],
    width: u32,
    height: u32,
) -> Result<(), ArgbTensorError> {
    normalize_argb(source, destination, width, height, TensorLayout::Planar)
}
