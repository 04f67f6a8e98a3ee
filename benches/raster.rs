use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swingline::colors::rgb;
use swingline::raster;
use swingline::Framebuffer;

const BUFFER_WIDTH: u32 = 900;
const BUFFER_HEIGHT: u32 = 700;

fn benchmark_shaded_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_circle_shaded");
    let mut fb = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);

    for radius in [14, 28, 56, 112] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
            b.iter(|| {
                raster::fill_circle_shaded(
                    &mut fb,
                    black_box(450),
                    black_box(350),
                    black_box(radius),
                    rgb(220, 80, 50),
                    rgb(255, 120, 60),
                );
            });
        });
    }
    group.finish();
}

fn benchmark_glow_ring(c: &mut Criterion) {
    let mut fb = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    c.bench_function("glow_ring_34", |b| {
        b.iter(|| {
            raster::glow_ring(
                &mut fb,
                black_box(450),
                black_box(350),
                black_box(34),
                rgb(255, 120, 60),
            );
        });
    });
}

fn benchmark_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    let mut fb = Framebuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);

    group.bench_function("bresenham_diagonal", |b| {
        b.iter(|| {
            raster::line(
                &mut fb,
                black_box(0),
                black_box(0),
                black_box(899),
                black_box(699),
                rgb(100, 100, 110),
                255,
            );
        });
    });

    group.bench_function("thick_line_3px", |b| {
        b.iter(|| {
            raster::thick_line(
                &mut fb,
                black_box(390),
                black_box(80),
                black_box(257),
                black_box(255),
                3,
                rgb(100, 100, 110),
                200,
            );
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_shaded_fill,
    benchmark_glow_ring,
    benchmark_lines
);
criterion_main!(benches);
