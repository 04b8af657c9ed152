use chart3d_overlay::{
    CategoryItemLabelGenerator, CategoryValues3D, ColorSource, MarkerLine, MarkerLineStyle,
    ScreenPoint, StandardItemLabelGenerator, StandardSeriesColorSource, marker_line_primitives,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

struct ConstantDataset(f64);

impl CategoryValues3D for ConstantDataset {
    fn value(&self, _series_key: &str, _row_key: &str, _column_key: &str) -> Option<f64> {
        Some(self.0)
    }
}

fn bench_item_label_generation(c: &mut Criterion) {
    let generator = StandardItemLabelGenerator::default();
    let dataset = ConstantDataset(0.284);

    c.bench_function("item_label_generation", |b| {
        b.iter(|| {
            generator.generate_item_label(
                black_box(&dataset),
                black_box("Chrome"),
                black_box("Chrome"),
                black_box("Jan-12"),
            )
        })
    });
}

fn bench_series_color_cycle_1k(c: &mut Criterion) {
    let source = StandardSeriesColorSource::default();

    c.bench_function("series_color_cycle_1k", |b| {
        b.iter(|| {
            for series in 0..1_000 {
                let _ = black_box(source.color(black_box(series), 0, 0));
            }
        })
    });
}

fn bench_marker_pass_100(c: &mut Criterion) {
    let lines: Vec<MarkerLine> = (0..100)
        .map(|i| {
            let mut line = MarkerLine::with_vertices(i as f64 / 100.0, i % 7 == 0, i, i + 1);
            line.set_start_point(ScreenPoint::new(0.0, i as f64));
            line.set_end_point(ScreenPoint::new(640.0, i as f64));
            line
        })
        .collect();

    c.bench_function("marker_pass_100", |b| {
        b.iter(|| {
            marker_line_primitives(black_box(&lines), MarkerLineStyle::default())
                .expect("marker pass")
        })
    });
}

criterion_group!(
    benches,
    bench_item_label_generation,
    bench_series_color_cycle_1k,
    bench_marker_pass_100
);
criterion_main!(benches);
