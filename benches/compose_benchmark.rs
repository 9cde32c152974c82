//! Composite build benchmark: Measure canvas construction across item counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marquee::{Compositor, PixelBuffer, Rgb};

/// Create a content tile with varied pixels for benchmarking.
fn create_tile(width: u32, height: u32, seed: u8) -> PixelBuffer {
    let mut tile = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            tile.set(
                x,
                y,
                Rgb::new(
                    ((x + u32::from(seed)) % 256) as u8,
                    ((y * 7) % 256) as u8,
                    seed,
                ),
            );
        }
    }
    tile
}

fn compose_item_counts(c: &mut Criterion) {
    let compositor = Compositor::new(128, 64, 16, 8, Rgb::OFF);

    let mut group = c.benchmark_group("compose_items");
    for count in [1usize, 4, 16, 64] {
        let tiles: Vec<PixelBuffer> = (0..count)
            .map(|i| create_tile(80, 64, (i % 256) as u8))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &tiles, |b, tiles| {
            b.iter(|| compositor.compose(black_box(tiles)));
        });
    }
    group.finish();
}

fn compose_empty(c: &mut Criterion) {
    let compositor = Compositor::new(128, 64, 16, 8, Rgb::OFF);

    c.bench_function("compose_empty", |b| {
        b.iter(|| compositor.compose(black_box(&[])));
    });
}

criterion_group!(benches, compose_item_counts, compose_empty);
criterion_main!(benches);
