use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use density_calc::console::Console;
use density_calc::convert::{from_kg_per_m3, to_cubic_meters, to_kg_per_m3, to_kilograms};
use density_calc::{
    compute, format_default, parse_input, CalculatorForm, DensityUnit, MassUnit, OutputUnits,
    SiInputs, Target, VolumeUnit,
};

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_conversions");

    group.bench_function("mass_and_volume_to_si", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let value = 1.0 + i as f64 * 0.5;
                black_box(to_kilograms(black_box(value), MassUnit::Gram));
                black_box(to_cubic_meters(black_box(value), VolumeUnit::Milliliter));
            }
        });
    });

    group.bench_function("density_from_si", |b| {
        let rho = to_kg_per_m3(2700.0, DensityUnit::KilogramPerCubicMeter);
        b.iter(|| {
            for _ in 0..1000 {
                black_box(from_kg_per_m3(black_box(rho), DensityUnit::GramPerCubicCentimeter));
            }
        });
    });

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    let inputs = SiInputs {
        mass: to_kilograms(10.0, MassUnit::Kilogram),
        volume: to_cubic_meters(2.0, VolumeUnit::CubicMeter),
        density: to_kg_per_m3(5.0, DensityUnit::KilogramPerCubicMeter),
    };
    let units = OutputUnits::default();

    for target in Target::ALL {
        group.bench_with_input(BenchmarkId::new("compute", target.id()), target, |b, target| {
            b.iter(|| compute(black_box(*target), black_box(inputs), &units));
        });
    }

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    for (name, value) in [("fixed", 0.005), ("rounded", 123456.7), ("exponent", 1.5e-4)] {
        group.bench_with_input(BenchmarkId::new("format_default", name), &value, |b, value| {
            b.iter(|| format_default(black_box(*value)));
        });
    }

    group.bench_function("parse_input", |b| {
        b.iter(|| {
            black_box(parse_input(black_box(" 2.7 ")));
            black_box(parse_input(black_box("abc")));
        });
    });

    group.finish();
}

fn bench_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("form");

    let mut form = CalculatorForm::default();
    form.set_mass_value("10");
    form.set_volume_value("2");
    form.set_density_unit(DensityUnit::GramPerCubicCentimeter);
    group.bench_function("result", |b| {
        b.iter(|| black_box(form.result()));
    });

    group.bench_function("one_shot_session", |b| {
        b.iter(|| {
            let mut console = Console::default();
            console
                .run_commands(black_box(["mass 250 g", "volume 0.25 L", "density g/mL"]))
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_conversions,
    bench_solve,
    bench_formatting,
    bench_form
);
criterion_main!(benches);
