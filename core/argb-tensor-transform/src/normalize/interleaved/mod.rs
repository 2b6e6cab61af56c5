mod portable32;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn normalize_x86(src: *const u32, dst: *mut f32, num_pixels: usize) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        if crate::cpu_detect::has_sse2() {
            unsafe { sse2::shufps_interleave_4(src, dst, num_pixels) };
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "sse2") {
            unsafe { sse2::shufps_interleave_4(src, dst, num_pixels) };
            return;
        }
    }

    // Fallback to portable implementation
    unsafe { portable32::u32(src, dst, num_pixels) }
}

/// Convert packed ARGB pixels into interleaved normalized RGB floats using the
/// best known implementation for the current CPU.
///
/// # Safety
///
/// - src must be valid for reads of num_pixels u32 values
/// - dst must be valid for writes of num_pixels * 3 f32 values
#[inline]
pub(crate) unsafe fn normalize(src: *const u32, dst: *mut f32, num_pixels: usize) {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        unsafe { normalize_x86(src, dst, num_pixels) }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        unsafe { portable32::u32(src, dst, num_pixels) }
    }
}
