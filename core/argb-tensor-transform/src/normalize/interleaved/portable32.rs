use crate::color_8888::Argb8888;
use core::ptr::{read_unaligned, write_unaligned};

/// # Safety
///
/// - src must be valid for reads of num_pixels u32 values
/// - dst must be valid for writes of num_pixels * 3 f32 values
pub(crate) unsafe fn u32(mut src: *const u32, mut dst: *mut f32, num_pixels: usize) {
    unsafe {
        let src_end = src.add(num_pixels);
        while src < src_end {
            let pixel = Argb8888::from_raw(read_unaligned(src));
            src = src.add(1);

            write_unaligned(dst, pixel.normalized_red());
            write_unaligned(dst.add(1), pixel.normalized_green());
            write_unaligned(dst.add(2), pixel.normalized_blue());
            dst = dst.add(3);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(u32, "u32 no-unroll")]
    fn portable32_interleaved_matches_reference(
        #[case] kernel: InterleavedKernelFn,
        #[case] impl_name: &str,
    ) {
        run_interleaved_kernel_test(kernel, 64, impl_name);
    }
}
