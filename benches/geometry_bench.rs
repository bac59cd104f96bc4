use criterion::{Criterion, criterion_group, criterion_main};
use ensplot::core::{
    Dimension, LinearDimension, SampledSeries, build_error_envelope, project_envelope_polygon,
    project_polyline,
};
use std::hint::black_box;

fn pixel_dimensions() -> (LinearDimension, LinearDimension) {
    let mut x = LinearDimension::new(0.0, 10_000.0).expect("x dimension");
    x.set_range(0.0, 1_914.0).expect("x range");
    let mut y = LinearDimension::new(0.0, 500.0).expect("y dimension");
    y.set_range(962.0, 0.0).expect("y range");
    (x, y)
}

fn bench_polyline_projection_10k(c: &mut Criterion) {
    let (x_dimension, y_dimension) = pixel_dimensions();
    let x_values: Vec<f64> = (0..10_000).map(|i| f64::from(i)).collect();
    let y_values: Vec<f64> = x_values
        .iter()
        .map(|x| 250.0 + 200.0 * (x * 0.01).sin())
        .collect();

    c.bench_function("polyline_projection_10k", |b| {
        b.iter(|| {
            let _ = project_polyline(
                black_box(&x_values),
                black_box(&y_values),
                &x_dimension,
                &y_dimension,
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_error_envelope_10k(c: &mut Criterion) {
    let (x_dimension, y_dimension) = pixel_dimensions();
    let count = 10_000;
    let samples = SampledSeries::new(
        (0..count).map(f64::from).collect(),
        (0..count).map(|i| 250.0 + 100.0 * (f64::from(i) * 0.02).cos()).collect(),
        (0..count).map(|i| 5.0 + f64::from(i % 10)).collect(),
    );

    c.bench_function("error_envelope_10k", |b| {
        b.iter(|| {
            let envelope =
                build_error_envelope(black_box(&samples)).expect("envelope should build");
            let _ = project_envelope_polygon(&envelope, &x_dimension, &y_dimension);
        })
    });
}

criterion_group!(benches, bench_polyline_projection_10k, bench_error_envelope_10k);
criterion_main!(benches);
