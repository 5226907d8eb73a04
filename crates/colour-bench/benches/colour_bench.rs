//! Benchmarks for colour-rs operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use colour_core::SpectralDistribution;
use colour_difference::{delta_e_din99, delta_e_din99_batch, Din99Options};
use colour_lut::{cube, Lut, Lut3D};
use colour_quality::{tm3018_specification, ColourRenderingSpecification, TcsColorimetry};

/// 99 samples spread over the hue circle, as in the CIE 2017 sample set.
fn cie2017_input() -> ColourRenderingSpecification {
    let sample = |i: usize, chroma: f64| {
        let hue = (i as f64 * 360.0 / 99.0 + 1.0) % 360.0;
        let h = hue.to_radians();
        TcsColorimetry {
            name: format!("CES{:02}", i + 1),
            xyz: [20.0; 3],
            jmh: [50.0, chroma, hue],
            jpapbp: [50.0, chroma * h.cos(), chroma * h.sin()],
        }
    };
    let test = (0..99).map(|i| sample(i, 21.0)).collect();
    let reference = (0..99).map(|i| sample(i, 20.0)).collect();
    let sd = SpectralDistribution::new("Flat", vec![380.0, 780.0], vec![1.0, 1.0]).unwrap();

    ColourRenderingSpecification {
        name: "Bench".into(),
        sd_reference: sd,
        r_f: 90.0,
        r_s: vec![90.0; 99],
        cct: 5000.0,
        d_uv: 0.0,
        colorimetry_data: (test, reference),
        delta_e_s: (0..99).map(|i| (i % 7) as f64 * 0.5).collect(),
    }
}

/// Benchmark the TM-30-18 hue-bin pipeline.
fn bench_tm3018(c: &mut Criterion) {
    let input = cie2017_input();
    let sd = input.sd_reference.clone();

    c.bench_function("tm3018_specification", |b| {
        b.iter(|| tm3018_specification(black_box(sd.clone()), black_box(input.clone())).unwrap())
    });
}

/// Benchmark DIN99 differences, single and batched.
fn bench_din99(c: &mut Criterion) {
    let mut group = c.benchmark_group("din99");

    for size in [1000, 10000, 100000].iter() {
        let lab_1: Vec<[f64; 3]> = (0..*size)
            .map(|i| {
                let t = i as f64 / *size as f64;
                [100.0 * t, 60.0 * (t * 9.0).sin(), 60.0 * (t * 4.0).cos()]
            })
            .collect();
        let lab_2: Vec<[f64; 3]> = lab_1.iter().map(|&[l, a, b]| [l, a + 1.0, b - 1.0]).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("serial", size), &(&lab_1, &lab_2), |b, (x, y)| {
            b.iter(|| {
                x.iter()
                    .zip(y.iter())
                    .map(|(&p, &q)| delta_e_din99(black_box(p), black_box(q), Din99Options::default()))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("batch", size), &(&lab_1, &lab_2), |b, (x, y)| {
            b.iter(|| delta_e_din99_batch(black_box(x), black_box(y), Din99Options::default()))
        });
    }

    group.finish();
}

/// Benchmark .cube serialisation and parsing of a 33^3 cube.
fn bench_cube(c: &mut Criterion) {
    let lut: Lut = Lut3D::linear(33, [[0.0; 3], [1.0; 3]]).unwrap().into();
    let mut text = Vec::new();
    cube::format_cube(&mut text, &lut, cube::DEFAULT_DECIMALS).unwrap();

    c.bench_function("cube_format_33", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(text.len());
            cube::format_cube(&mut out, black_box(&lut), cube::DEFAULT_DECIMALS).unwrap();
            out
        })
    });

    c.bench_function("cube_parse_33", |b| {
        b.iter(|| cube::parse_cube(black_box(text.as_slice()), "bench").unwrap())
    });
}

criterion_group!(benches, bench_tm3018, bench_din99, bench_cube);
criterion_main!(benches);
