//! Benchmarks for Easel operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Import crates for benchmarking
use easel_color::{ColorSpace, RGBA_F16, RGBA_F32};
use easel_composite::{bit_blt, parallel, CompositeOp};
use easel_core::{layout, Rgb8};
use easel_display::{convert_to_display, exposure_factor, DisplayFormat, DISPLAY_GAMMA};

/// Fill a buffer with a deterministic color ramp.
fn ramp_buffer(cs: &dyn ColorSpace, pixels: usize) -> Vec<u8> {
    let mut buf = vec![0u8; pixels * cs.pixel_size()];
    for (i, px) in buf.chunks_exact_mut(cs.pixel_size()).enumerate() {
        let v = (i % 256) as u8;
        cs.from_rgb8_with_alpha(Rgb8::new(v, 255 - v, 128), 255, px);
    }
    buf
}

/// Benchmark full-frame compositing in the single-precision space.
fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");

    for &(rows, cols) in &[(256usize, 256usize), (1024, 1024)] {
        let pixels = rows * cols;
        let stride = cols * layout::pixel_size::<f32>();
        let src = ramp_buffer(&RGBA_F32, pixels);
        let mut dst = ramp_buffer(&RGBA_F32, pixels);

        group.throughput(Throughput::Elements(pixels as u64));

        group.bench_with_input(BenchmarkId::new("over_opaque", pixels), &src, |b, src| {
            b.iter(|| {
                bit_blt::<f32>(
                    &mut dst,
                    stride,
                    black_box(src),
                    stride,
                    None,
                    0,
                    rows,
                    cols,
                    255,
                    CompositeOp::Over,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("over_faded", pixels), &src, |b, src| {
            b.iter(|| {
                bit_blt::<f32>(
                    &mut dst,
                    stride,
                    black_box(src),
                    stride,
                    None,
                    0,
                    rows,
                    cols,
                    128,
                    CompositeOp::Over,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("multiply", pixels), &src, |b, src| {
            b.iter(|| {
                bit_blt::<f32>(
                    &mut dst,
                    stride,
                    black_box(src),
                    stride,
                    None,
                    0,
                    rows,
                    cols,
                    255,
                    CompositeOp::Multiply,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("screen", pixels), &src, |b, src| {
            b.iter(|| {
                bit_blt::<f32>(
                    &mut dst,
                    stride,
                    black_box(src),
                    stride,
                    None,
                    0,
                    rows,
                    cols,
                    255,
                    CompositeOp::Screen,
                )
            })
        });
    }

    group.finish();
}

/// Benchmark masked strokes and the eraser.
fn bench_masked(c: &mut Criterion) {
    let mut group = c.benchmark_group("masked");

    let (rows, cols) = (512usize, 512usize);
    let pixels = rows * cols;
    let stride = cols * layout::pixel_size::<f32>();
    let src = ramp_buffer(&RGBA_F32, pixels);
    let mut dst = ramp_buffer(&RGBA_F32, pixels);
    let mask: Vec<u8> = (0..pixels).map(|i| (i * 7 % 256) as u8).collect();

    group.throughput(Throughput::Elements(pixels as u64));

    group.bench_function("over_masked", |b| {
        b.iter(|| {
            bit_blt::<f32>(
                &mut dst,
                stride,
                black_box(&src),
                stride,
                Some(&mask),
                cols,
                rows,
                cols,
                255,
                CompositeOp::Over,
            )
        })
    });

    group.bench_function("erase_masked", |b| {
        b.iter(|| {
            bit_blt::<f32>(
                &mut dst,
                stride,
                black_box(&src),
                stride,
                Some(&mask),
                cols,
                rows,
                cols,
                255,
                CompositeOp::Erase,
            )
        })
    });

    group.finish();
}

/// Benchmark the per-pixel colorspace operations.
fn bench_pixel_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel_ops");

    let pixels = 10000usize;
    let size = RGBA_F32.pixel_size();
    let first = ramp_buffer(&RGBA_F32, pixels);
    let other = ramp_buffer(&RGBA_F32, pixels);
    let mut out = vec![0u8; pixels * size];

    group.throughput(Throughput::Elements(pixels as u64));

    group.bench_function("difference", |b| {
        b.iter(|| {
            first
                .chunks_exact(size)
                .zip(other.chunks_exact(size))
                .map(|(x, y)| RGBA_F32.difference(black_box(x), y))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("intensity8", |b| {
        b.iter(|| {
            first
                .chunks_exact(size)
                .map(|px| RGBA_F32.intensity8(black_box(px)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("mix_pair", |b| {
        b.iter(|| {
            for ((x, y), d) in first
                .chunks_exact(size)
                .zip(other.chunks_exact(size))
                .zip(out.chunks_exact_mut(size))
            {
                RGBA_F32.mix_colors(&[black_box(x), y], &[127, 128], d);
            }
        })
    });

    group.bench_function("invert", |b| {
        b.iter(|| {
            for px in out.chunks_exact_mut(size) {
                RGBA_F32.invert_color(black_box(px));
            }
        })
    });

    group.finish();
}

/// Benchmark exposure and gamma mapping to display bytes.
fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    let values: Vec<f32> = (0..10000).map(|i| i as f32 / 10000.0).collect();
    let factor = exposure_factor(0.0);

    group.throughput(Throughput::Elements(10000));

    group.bench_function("convert_scalar", |b| {
        b.iter(|| {
            values
                .iter()
                .map(|&v| convert_to_display(black_box(v), factor, DISPLAY_GAMMA))
                .collect::<Vec<_>>()
        })
    });

    let (width, height) = (1024u32, 1024u32);
    let pixels = (width * height) as usize;
    let canvas_f32 = ramp_buffer(&RGBA_F32, pixels);
    let canvas_f16 = ramp_buffer(&RGBA_F16, pixels);

    group.throughput(Throughput::Elements(pixels as u64));

    group.bench_function("render_f32", |b| {
        b.iter(|| {
            RGBA_F32.to_display_image(black_box(&canvas_f32), width, height, 0.0, DisplayFormat::Bgra8)
        })
    });

    group.bench_function("render_f16", |b| {
        b.iter(|| {
            RGBA_F16.to_display_image(black_box(&canvas_f16), width, height, 0.0, DisplayFormat::Bgra8)
        })
    });

    group.finish();
}

/// Benchmark row-band parallelism against the sequential engine.
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");

    let (rows, cols) = (1080usize, 1920usize);
    let pixels = rows * cols;
    let stride = cols * layout::pixel_size::<f32>();
    let src = ramp_buffer(&RGBA_F32, pixels);
    let mut dst = ramp_buffer(&RGBA_F32, pixels);

    group.throughput(Throughput::Elements(pixels as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            bit_blt::<f32>(
                &mut dst,
                stride,
                black_box(&src),
                stride,
                None,
                0,
                rows,
                cols,
                200,
                CompositeOp::Screen,
            )
        })
    });

    group.bench_function("bands", |b| {
        b.iter(|| {
            parallel::bit_blt_par::<f32>(
                &mut dst,
                stride,
                black_box(&src),
                stride,
                None,
                0,
                rows,
                cols,
                200,
                CompositeOp::Screen,
                parallel::DEFAULT_BAND_ROWS,
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_composite,
    bench_masked,
    bench_pixel_ops,
    bench_display,
    bench_parallel,
);

criterion_main!(benches);
