//! Common test imports and utilities for normalization tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::color_8888::Argb8888;
pub use crate::normalize::NORM_SCALE;
pub use crate::normalize::settings::TensorLayout;
#[allow(unused_imports)] // Might be unused in some CPU architectures, and that's ok.
pub use crate::cpu_detect::*;

// Standard library imports commonly used in tests
pub use std::vec;
pub use std::vec::Vec;

// Re-export super for convenience in test modules
pub use super::*;

/// Signature shared by every interleaved kernel.
pub(crate) type InterleavedKernelFn = unsafe fn(*const u32, *mut f32, usize);

/// Signature shared by every contiguous-plane planar kernel.
pub(crate) type PlanarKernelFn = unsafe fn(*const u32, *mut f32, usize);

// Helper to generate test data of specified size (in pixels)
pub(crate) fn generate_argb_test_data(num_pixels: usize) -> Vec<u32> {
    let mut data = Vec::with_capacity(num_pixels);

    // Distinct per-channel byte patterns so a swapped or misplaced channel
    // shows up as a value mismatch, never as a coincidental match.
    for pixel_idx in 0..num_pixels {
        let alpha = (pixel_idx.wrapping_mul(7) & 0xFF) as u32;
        let red = (pixel_idx & 0xFF) as u32;
        let green = (pixel_idx.wrapping_add(64) & 0xFF) as u32;
        let blue = (pixel_idx.wrapping_mul(3).wrapping_add(128) & 0xFF) as u32;
        data.push((alpha << 24) | (red << 16) | (green << 8) | blue);
    }

    data
}

/// Computes the reference interleaved output with plain scalar math.
pub(crate) fn reference_interleaved(pixels: &[u32]) -> Vec<f32> {
    let mut expected = Vec::with_capacity(pixels.len() * 3);
    for &raw in pixels {
        let pixel = Argb8888::from_raw(raw);
        expected.push(pixel.normalized_red());
        expected.push(pixel.normalized_green());
        expected.push(pixel.normalized_blue());
    }
    expected
}

/// Computes the reference planar output with plain scalar math.
pub(crate) fn reference_planar(pixels: &[u32]) -> Vec<f32> {
    let mut expected = Vec::with_capacity(pixels.len() * 3);
    expected.extend(pixels.iter().map(|&p| Argb8888::from_raw(p).normalized_red()));
    expected.extend(pixels.iter().map(|&p| Argb8888::from_raw(p).normalized_green()));
    expected.extend(pixels.iter().map(|&p| Argb8888::from_raw(p).normalized_blue()));
    expected
}

/// Helper to assert implementation results match the scalar reference,
/// bit for bit.
pub(crate) fn assert_implementation_matches_reference(
    output_expected: &[f32],
    output_test: &[f32],
    impl_name: &str,
    num_pixels: usize,
) {
    let expected_bits: Vec<u32> = output_expected.iter().map(|f| f.to_bits()).collect();
    let test_bits: Vec<u32> = output_test.iter().map(|f| f.to_bits()).collect();
    assert_eq!(
        expected_bits, test_bits,
        "{impl_name} implementation produced different results than reference for {num_pixels} pixels."
    );
}

/// Runs an interleaved kernel against the scalar reference for every pixel
/// count up to `max_pixels`, covering all remainder lengths around the
/// vector width.
pub(crate) fn run_interleaved_kernel_test(
    kernel: InterleavedKernelFn,
    max_pixels: usize,
    impl_name: &str,
) {
    for num_pixels in 0..=max_pixels {
        let pixels = generate_argb_test_data(num_pixels);
        let expected = reference_interleaved(&pixels);

        let mut output = vec![f32::NAN; num_pixels * 3];
        unsafe {
            kernel(pixels.as_ptr(), output.as_mut_ptr(), num_pixels);
        }

        assert_implementation_matches_reference(&expected, &output, impl_name, num_pixels);
    }
}

/// Runs a contiguous-plane planar kernel against the scalar reference for
/// every pixel count up to `max_pixels`.
pub(crate) fn run_planar_kernel_test(kernel: PlanarKernelFn, max_pixels: usize, impl_name: &str) {
    for num_pixels in 0..=max_pixels {
        let pixels = generate_argb_test_data(num_pixels);
        let expected = reference_planar(&pixels);

        let mut output = vec![f32::NAN; num_pixels * 3];
        unsafe {
            kernel(pixels.as_ptr(), output.as_mut_ptr(), num_pixels);
        }

        assert_implementation_matches_reference(&expected, &output, impl_name, num_pixels);
    }
}

#[test]
fn validate_argb_test_data_generator() {
    let output = generate_argb_test_data(3);
    let expected = vec![
        0x0000_4080, // pixel 0: a=0x00 r=0x00 g=0x40 b=0x80
        0x0701_4183, // pixel 1: a=0x07 r=0x01 g=0x41 b=0x83
        0x0E02_4286, // pixel 2: a=0x0E r=0x02 g=0x42 b=0x86
    ];
    assert_eq!(output, expected);
}
