use super::portable32;
use crate::normalize::NORM_SCALE;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// # Safety
///
/// - src must be valid for reads of num_pixels u32 values
/// - dst must be valid for writes of num_pixels * 3 f32 values
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn vcvtdq2ps_planar_8(src: *const u32, dst: *mut f32, num_pixels: usize) {
    unsafe {
        let r_out = dst;
        let g_out = dst.add(num_pixels);
        let b_out = dst.add(num_pixels * 2);
        vcvtdq2ps_planar_8_with_separate_pointers(src, r_out, g_out, b_out, num_pixels);
    }
}

/// Normalizes eight pixels per step in 256-bit registers. Plane stores never
/// cross lanes, so no permute is needed on top of the SSE2 scheme.
///
/// # Safety
///
/// - src must be valid for reads of num_pixels u32 values
/// - r_out, g_out and b_out must each be valid for writes of num_pixels f32 values
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn vcvtdq2ps_planar_8_with_separate_pointers(
    src: *const u32,
    mut r_out: *mut f32,
    mut g_out: *mut f32,
    mut b_out: *mut f32,
    num_pixels: usize,
) {
    unsafe {
        let channel_mask = _mm256_set1_epi32(0xFF);
        let scale = _mm256_set1_ps(NORM_SCALE);

        let aligned_count = num_pixels - (num_pixels % 8);
        let aligned_end = src.add(aligned_count);

        let mut src_ptr = src;
        while src_ptr < aligned_end {
            let pixels = _mm256_loadu_si256(src_ptr as *const __m256i);
            src_ptr = src_ptr.add(8);

            let r = _mm256_mul_ps(
                _mm256_cvtepi32_ps(_mm256_and_si256(_mm256_srli_epi32(pixels, 16), channel_mask)),
                scale,
            );
            let g = _mm256_mul_ps(
                _mm256_cvtepi32_ps(_mm256_and_si256(_mm256_srli_epi32(pixels, 8), channel_mask)),
                scale,
            );
            let b = _mm256_mul_ps(
                _mm256_cvtepi32_ps(_mm256_and_si256(pixels, channel_mask)),
                scale,
            );

            _mm256_storeu_ps(r_out, r);
            _mm256_storeu_ps(g_out, g);
            _mm256_storeu_ps(b_out, b);

            r_out = r_out.add(8);
            g_out = g_out.add(8);
            b_out = b_out.add(8);
        }

        // Process any remaining pixels after the aligned blocks
        portable32::u32_with_separate_pointers(
            src_ptr,
            r_out,
            g_out,
            b_out,
            num_pixels - aligned_count,
        );
    }
}
