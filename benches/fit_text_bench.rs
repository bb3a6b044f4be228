// Benchmark for text fitting and countdown breakdown
// Measures the unit-step font search across container widths

use chrono::{Duration, Local};
use countdown_widget::models::countdown::calculate_time_left;
use countdown_widget::services::fit_text::compute_font_size;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_compute_font_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_font_size");

    // "12 days, 3 h, 45 m, 10 s" at ~0.55em per glyph
    let measure = |size: f32| size * 0.55 * 24.0;

    for container_width in [100.0f32, 400.0, 1600.0].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(container_width),
            container_width,
            |b, &container_width| {
                b.iter(|| {
                    compute_font_size(
                        &measure,
                        black_box(container_width),
                        black_box(80.0),
                        black_box(None),
                        0.95,
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_time_left(c: &mut Criterion) {
    let now = Local::now();
    let target = now + Duration::days(42) + Duration::seconds(1234);

    c.bench_function("calculate_time_left", |b| {
        b.iter(|| calculate_time_left(black_box(target), black_box(now)));
    });
}

criterion_group!(benches, bench_compute_font_size, bench_time_left);
criterion_main!(benches);
