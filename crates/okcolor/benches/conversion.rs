use criterion::{black_box, criterion_group, criterion_main, Criterion};
use okcolor::{
    convert, deserialize, find_cusp, gamut_map_oklch, ColorSpace, Float, Gamut, MappingStrategy,
};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let orange = [1.0, 0.5, 0.0];
    group.bench_function("srgb-to-oklch", |b| {
        b.iter(|| convert(&ColorSpace::SRGB, &ColorSpace::OKLCH, black_box(&orange)))
    });
    group.bench_function("display-p3-to-rec2020", |b| {
        b.iter(|| convert(&ColorSpace::DISPLAY_P3, &ColorSpace::REC2020, black_box(&orange)))
    });
    group.bench_function("lab-to-okhsl", |b| {
        b.iter(|| convert(&ColorSpace::LAB, &ColorSpace::OKHSL, black_box(&[60.0, 40.0, 30.0])))
    });
    group.finish();

    let mut group = c.benchmark_group("gamut");
    let hue: Float = 30.0;
    let (b, a) = hue.to_radians().sin_cos();
    group.bench_function("find-cusp", |bencher| {
        bencher.iter(|| find_cusp(black_box(a), black_box(b), &Gamut::SRGB))
    });

    let too_red = [0.7, 0.4, 30.0];
    for (name, strategy) in [
        ("cusp-lightness", MappingStrategy::CuspLightness),
        ("lightness", MappingStrategy::Lightness),
        (
            "adaptive-gray",
            MappingStrategy::AdaptiveGray {
                alpha: MappingStrategy::DEFAULT_ALPHA,
            },
        ),
    ] {
        group.bench_function(name, |bencher| {
            bencher.iter(|| {
                gamut_map_oklch(
                    black_box(&too_red),
                    &Gamut::SRGB,
                    &ColorSpace::SRGB,
                    strategy,
                )
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("string");
    group.bench_function("parse-hex", |b| b.iter(|| deserialize(black_box("#ff8000"))));
    group.bench_function("parse-oklch", |b| {
        b.iter(|| deserialize(black_box("oklch(0.7 0.15 30 / 50%)")))
    });
    group.bench_function("parse-color", |b| {
        b.iter(|| deserialize(black_box("color(display-p3 1 0.5 0)")))
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
