use argb_tensor_transform::allocate::allocate_align_64;
use argb_tensor_transform::{TensorLayout, normalize_argb_with_layout};
use criterion::{Criterion, criterion_group, criterion_main};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ARGB Normalize (ARGB8888 -> f32 RGB)");

    // Set up the test data - a 1080p frame of packed ARGB pixels
    let width = 1920u32;
    let height = 1080u32;
    let num_pixels = (width * height) as usize;

    let mut input = allocate_align_64(num_pixels * size_of::<u32>()).unwrap();
    let mut output = allocate_align_64(num_pixels * 3 * size_of::<f32>()).unwrap();

    // Initialize input with test data (varied channel bytes per pixel)
    unsafe {
        let input_ptr = input.as_mut_ptr() as *mut u32;
        for pixel_idx in 0..num_pixels {
            *input_ptr.add(pixel_idx) = (pixel_idx as u32).wrapping_mul(0x0101_0101);
        }
    }

    let input_ptr = input.as_ptr() as *const u32;
    let output_ptr = output.as_mut_ptr() as *mut f32;
    group.throughput(criterion::Throughput::Bytes(
        (num_pixels * size_of::<u32>()) as u64,
    ));

    group.bench_function("normalize_interleaved", |b| {
        b.iter(|| unsafe {
            normalize_argb_with_layout(
                input_ptr,
                output_ptr,
                num_pixels,
                TensorLayout::Interleaved,
            );
        })
    });

    group.bench_function("normalize_planar", |b| {
        b.iter(|| unsafe {
            normalize_argb_with_layout(input_ptr, output_ptr, num_pixels, TensorLayout::Planar);
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
