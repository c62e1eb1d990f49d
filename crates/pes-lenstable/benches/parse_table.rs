use std::{fmt::Write, hint::black_box, str::FromStr};

use criterion::{criterion_group, criterion_main, Criterion};
use pes_lenstable::EnergyRangeTable;

const LENS_MODES: [&str; 4] = ["Transmission", "Angular45", "Angular56", "Angular60"];
const PASS_ENERGIES: [f64; 9] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0];

fn synthetic_table() -> String {
    let mut text = String::new();
    for element_set in ["High", "Low"] {
        for lens_mode in LENS_MODES {
            for pass_energy in PASS_ENERGIES {
                let low = pass_energy * 0.2;
                let high = pass_energy * 10.8;
                writeln!(text, "{element_set} {lens_mode} {pass_energy} {low} {high}")
                    .expect("writing to a String cannot fail");
            }
        }
    }
    text
}

fn bench_parse_table(c: &mut Criterion) {
    let text = synthetic_table();
    c.bench_function("parse_lens_table", |b| {
        b.iter(|| {
            let table = EnergyRangeTable::from_str(black_box(&text)).expect("parse failed");
            black_box(table);
        })
    });
}

fn bench_energy_range_lookup(c: &mut Criterion) {
    let table = EnergyRangeTable::from_str(&synthetic_table()).expect("parse failed");
    c.bench_function("energy_range_lookup", |b| {
        b.iter(|| {
            let range = table
                .energy_range(black_box("Angular56"), black_box("High"), black_box(50.0))
                .expect("lookup failed");
            black_box(range);
        })
    });
}

criterion_group!(benches, bench_parse_table, bench_energy_range_lookup);
criterion_main!(benches);
