use criterion::{BatchSize, Criterion, criterion_group};
use rand::Rng;
use rectclip::{Bounds, ClipOptions, LineString, Polygon, clip_line_string, clip_polygon};

type Sample = [[f64; 2]; 1000];

fn rect() -> Bounds<f64> {
    Bounds::new(0.25, 0.25, 0.75, 0.75)
}

fn random_line() -> LineString<f64> {
    let mut rng = rand::rng();
    LineString::from(rng.random::<Sample>().to_vec())
}

fn random_polygon() -> Polygon<f64> {
    let mut rng = rand::rng();
    Polygon::from(vec![rng.random::<Sample>().to_vec()])
}

pub fn large_geometries(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large geometries");

    group.bench_function("line string", |b| {
        b.iter_batched(
            random_line,
            |line| clip_line_string(&line, &rect(), &ClipOptions::default()),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("joined line string", |b| {
        let options = ClipOptions {
            return_as_array: false,
            ..Default::default()
        };

        b.iter_batched(
            random_line,
            |line| clip_line_string(&line, &rect(), &options),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("polygon", |b| {
        b.iter_batched(
            random_polygon,
            |polygon| clip_polygon(&polygon, &rect(), &ClipOptions::default()),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, large_geometries);
