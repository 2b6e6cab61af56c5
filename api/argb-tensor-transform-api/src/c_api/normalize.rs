//! ARGB normalization over the FFI boundary.
//!
//! Intended for synchronous per-frame invocation from managed-runtime image
//! pipelines: a pixel array, a destination float buffer and the frame
//! dimensions in, an error code out. Every precondition violation is
//! reported; no failure path is silent.

use crate::c_api::error::{AttErrorCode, AttResult};
use crate::c_api::AttTensorLayout;
use crate::normalize::normalize_argb;
use core::slice;

/// Convert a frame of packed ARGB pixels into normalized RGB floats.
///
/// # Parameters
/// - `source`: Pointer to `source_len` packed ARGB pixels (row-major)
/// - `source_len`: Number of pixels behind `source` (must equal `width * height`)
/// - `destination`: Pointer to the output float buffer
/// - `destination_len`: Number of floats behind `destination` (must be at
///   least `width * height * 3`)
/// - `width`: Frame width in pixels
/// - `height`: Frame height in pixels
/// - `layout`: The output arrangement to produce
///
/// # Returns
/// An [`AttResult`] indicating success or containing an error code. On any
/// error, the destination buffer is untouched.
///
/// # Safety
/// - `source` must be valid for reads of `source_len` `u32` values, or null
/// - `destination` must be valid for writes of `destination_len` `f32`
///   values, or null
/// - The buffers must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn att_normalize_argb(
    source: *const u32,
    source_len: usize,
    destination: *mut f32,
    destination_len: usize,
    width: u32,
    height: u32,
    layout: AttTensorLayout,
) -> AttResult {
    // Validate pointers
    if source.is_null() {
        return AttResult::from_error_code(AttErrorCode::NullSourcePointer);
    }
    if destination.is_null() {
        return AttResult::from_error_code(AttErrorCode::NullDestinationPointer);
    }

    // Create slices from raw pointers
    let source_slice = unsafe { slice::from_raw_parts(source, source_len) };
    let destination_slice = unsafe { slice::from_raw_parts_mut(destination, destination_len) };

    // Perform the conversion
    normalize_argb(
        source_slice,
        destination_slice,
        width,
        height,
        layout.into(),
    )
    .into()
}
