//! Criterion benchmarks for ppmkit critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Decoder: P3 text to pixel grid
//! - Scale: nearest-neighbor resizing
//! - Blend: element-wise grid blending
//! - Morph: full frame sequence generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ppmkit::animation::morph_frames;
use ppmkit::decoder::{decode, encode};
use ppmkit::grid::{PixelGrid, Rgb};
use ppmkit::transforms::{blend, gray_scaled, scaled};

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate a square grid with a deterministic color pattern
fn make_grid(size: usize) -> PixelGrid {
    PixelGrid::from_fn(size, size, |r, c| {
        Rgb::new((r * 7 % 256) as u8, (c * 13 % 256) as u8, ((r + c) % 256) as u8)
    })
}

// =============================================================================
// Decoder Benchmarks
// =============================================================================

fn bench_decoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoder");

    for size in [16, 64, 256].iter() {
        let source = encode(&make_grid(*size));
        group.throughput(Throughput::Elements((*size * *size) as u64));
        group.bench_with_input(BenchmarkId::new("decode", size), &source, |b, source| {
            b.iter(|| decode(black_box(source)))
        });
    }

    group.finish();
}

// =============================================================================
// Transform Benchmarks
// =============================================================================

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");
    let grid = make_grid(128);

    for target in [32, 128, 512].iter() {
        group.throughput(Throughput::Elements((*target * *target) as u64));
        group.bench_with_input(BenchmarkId::new("nearest", target), target, |b, &target| {
            b.iter(|| scaled(black_box(&grid), target, target))
        });
    }

    group.finish();
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    let first = make_grid(256);
    let second = gray_scaled(&first);

    group.bench_function("gray_scaled_256", |b| b.iter(|| gray_scaled(black_box(&first))));
    group.bench_function("blend_256", |b| {
        b.iter(|| blend(black_box(&first), black_box(&second), 0.3))
    });

    group.finish();
}

// =============================================================================
// Morph Benchmarks
// =============================================================================

fn bench_morph(c: &mut Criterion) {
    let mut group = c.benchmark_group("morph");
    let source = make_grid(64);
    let target = make_grid(48);

    for steps in [4, 16].iter() {
        group.bench_with_input(BenchmarkId::new("frames", steps), steps, |b, &steps| {
            b.iter(|| {
                morph_frames(black_box(&source), black_box(&target), steps)
                    .map(|frames| frames.count())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decoder, bench_scale, bench_color, bench_morph);
criterion_main!(benches);
