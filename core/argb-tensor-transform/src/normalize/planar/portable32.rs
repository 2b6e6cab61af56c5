use crate::color_8888::Argb8888;
use core::ptr::{read_unaligned, write_unaligned};

/// # Safety
///
/// - src must be valid for reads of num_pixels u32 values
/// - dst must be valid for writes of num_pixels * 3 f32 values
pub(crate) unsafe fn u32(src: *const u32, dst: *mut f32, num_pixels: usize) {
    unsafe {
        // Split output into one section per channel
        let r_out = dst;
        let g_out = dst.add(num_pixels);
        let b_out = dst.add(num_pixels * 2);

        u32_with_separate_pointers(src, r_out, g_out, b_out, num_pixels);
    }
}

/// # Safety
///
/// - src must be valid for reads of num_pixels u32 values
/// - r_out, g_out and b_out must each be valid for writes of num_pixels f32 values
#[inline]
pub(crate) unsafe fn u32_with_separate_pointers(
    mut src: *const u32,
    mut r_out: *mut f32,
    mut g_out: *mut f32,
    mut b_out: *mut f32,
    num_pixels: usize,
) {
    unsafe {
        let src_end = src.add(num_pixels);
        while src < src_end {
            let pixel = Argb8888::from_raw(read_unaligned(src));
            src = src.add(1);

            write_unaligned(r_out, pixel.normalized_red());
            write_unaligned(g_out, pixel.normalized_green());
            write_unaligned(b_out, pixel.normalized_blue());

            r_out = r_out.add(1);
            g_out = g_out.add(1);
            b_out = b_out.add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(u32, "u32 no-unroll")]
    fn portable32_planar_matches_reference(
        #[case] kernel: PlanarKernelFn,
        #[case] impl_name: &str,
    ) {
        run_planar_kernel_test(kernel, 64, impl_name);
    }
}
