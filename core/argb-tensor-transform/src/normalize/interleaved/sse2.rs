use super::portable32;
use crate::normalize::NORM_SCALE;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Normalizes four pixels per step: channel extraction with integer shifts,
/// `cvtdq2ps` to floats, then `shufps` shuffles to emit the interleaved
/// `[r, g, b]` triples.
///
/// # Safety
///
/// - src must be valid for reads of num_pixels u32 values
/// - dst must be valid for writes of num_pixels * 3 f32 values
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn shufps_interleave_4(src: *const u32, dst: *mut f32, num_pixels: usize) {
    unsafe {
        let channel_mask = _mm_set1_epi32(0xFF);
        let scale = _mm_set1_ps(NORM_SCALE);

        let aligned_count = num_pixels - (num_pixels % 4);
        let aligned_end = src.add(aligned_count);

        let mut src_ptr = src;
        let mut dst_ptr = dst;
        while src_ptr < aligned_end {
            let pixels = _mm_loadu_si128(src_ptr as *const __m128i);
            src_ptr = src_ptr.add(4);

            // Extract channels into separate registers and rescale: [c0 c1 c2 c3]
            let r = _mm_mul_ps(
                _mm_cvtepi32_ps(_mm_and_si128(_mm_srli_epi32(pixels, 16), channel_mask)),
                scale,
            );
            let g = _mm_mul_ps(
                _mm_cvtepi32_ps(_mm_and_si128(_mm_srli_epi32(pixels, 8), channel_mask)),
                scale,
            );
            let b = _mm_mul_ps(
                _mm_cvtepi32_ps(_mm_and_si128(pixels, channel_mask)),
                scale,
            );

            // Interleave the three channel registers into [r0 g0 b0 r1] [g1 b1 r2 g2] [b2 r3 g3 b3]
            let rg01 = _mm_unpacklo_ps(r, g); // [r0 g0 r1 g1]
            let br01 = _mm_shuffle_ps(b, r, 0x50); // [b0 b0 r1 r1] (0b01010000)
            let out0 = _mm_shuffle_ps(rg01, br01, 0x84); // [r0 g0 b0 r1] (0b10000100)

            let gb1 = _mm_shuffle_ps(g, b, 0x55); // [g1 g1 b1 b1] (0b01010101)
            let rg2 = _mm_shuffle_ps(r, g, 0xAA); // [r2 r2 g2 g2] (0b10101010)
            let out1 = _mm_shuffle_ps(gb1, rg2, 0x88); // [g1 b1 r2 g2] (0b10001000)

            let br23 = _mm_shuffle_ps(b, r, 0xFA); // [b2 b2 r3 r3] (0b11111010)
            let gb23 = _mm_unpackhi_ps(g, b); // [g2 b2 g3 b3]
            let out2 = _mm_shuffle_ps(br23, gb23, 0xE8); // [b2 r3 g3 b3] (0b11101000)

            _mm_storeu_ps(dst_ptr, out0);
            _mm_storeu_ps(dst_ptr.add(4), out1);
            _mm_storeu_ps(dst_ptr.add(8), out2);
            dst_ptr = dst_ptr.add(12);
        }

        // Process any remaining pixels after the aligned blocks
        portable32::u32(src_ptr, dst_ptr, num_pixels - aligned_count);
    }
}
