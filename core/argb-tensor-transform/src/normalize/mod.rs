//! ARGB8888 to normalized-RGB tensor conversion.
//!
//! The functions at this level are the raw pointer-based entry points. They
//! perform no validation beyond debug assertions; see [`safe`] for slice-based
//! wrappers with input validation and proper error handling.

pub(crate) mod interleaved;
pub(crate) mod planar;

pub mod safe;
pub mod settings;

pub use safe::*;
pub use settings::*;

/// Normalization scale applied to every 8-bit channel value.
///
/// Every kernel multiplies by this constant rather than dividing by 255.0, so
/// portable and SIMD implementations produce bit-identical floats. The rounded
/// reciprocal still maps 255 to exactly 1.0 in `f32`.
pub const NORM_SCALE: f32 = 1.0 / 255.0;

/// Convert `num_pixels` packed ARGB pixels into normalized interleaved RGB
/// floats using the best known implementation for the current CPU.
///
/// Writes `[r, g, b]` triples in pixel order; alpha bytes are never read.
///
/// # Safety
///
/// - `src` must be valid for reads of `num_pixels` `u32` values
/// - `dst` must be valid for writes of `num_pixels * 3` `f32` values
/// - `src` and `dst` must not overlap
#[inline]
pub unsafe fn normalize_argb_interleaved(src: *const u32, dst: *mut f32, num_pixels: usize) {
    unsafe { interleaved::normalize(src, dst, num_pixels) }
}

/// Convert `num_pixels` packed ARGB pixels into three normalized channel
/// planes (reds, then greens, then blues) using the best known implementation
/// for the current CPU.
///
/// # Safety
///
/// - `src` must be valid for reads of `num_pixels` `u32` values
/// - `dst` must be valid for writes of `num_pixels * 3` `f32` values
/// - `src` and `dst` must not overlap
#[inline]
pub unsafe fn normalize_argb_planar(src: *const u32, dst: *mut f32, num_pixels: usize) {
    unsafe { planar::normalize(src, dst, num_pixels) }
}

/// Convert `num_pixels` packed ARGB pixels into three normalized channel
/// planes behind separate pointers, for destinations whose planes are not
/// contiguous.
///
/// # Safety
///
/// - `src` must be valid for reads of `num_pixels` `u32` values
/// - `r_out`, `g_out` and `b_out` must each be valid for writes of
///   `num_pixels` `f32` values
/// - None of the output regions may overlap `src` or each other
#[inline]
pub unsafe fn normalize_argb_planar_with_separate_pointers(
    src: *const u32,
    r_out: *mut f32,
    g_out: *mut f32,
    b_out: *mut f32,
    num_pixels: usize,
) {
    unsafe { planar::normalize_with_separate_pointers(src, r_out, g_out, b_out, num_pixels) }
}

/// Convert `num_pixels` packed ARGB pixels into normalized RGB floats in the
/// given [`TensorLayout`].
///
/// # Safety
///
/// - `src` must be valid for reads of `num_pixels` `u32` values
/// - `dst` must be valid for writes of `num_pixels * 3` `f32` values
/// - `src` and `dst` must not overlap
#[inline]
pub unsafe fn normalize_argb_with_layout(
    src: *const u32,
    dst: *mut f32,
    num_pixels: usize,
    layout: TensorLayout,
) {
    match layout {
        TensorLayout::Interleaved => unsafe { interleaved::normalize(src, dst, num_pixels) },
        TensorLayout::Planar => unsafe { planar::normalize(src, dst, num_pixels) },
    }
}
