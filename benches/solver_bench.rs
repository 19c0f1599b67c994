//! Solver Benchmarks — Per-Call Cost of a Full Dutching Solve
//!
//! Benchmarks `calculate_arb` end to end (normalize, classify, solve,
//! round, reconcile) for small and wide books.
//!
//! Run with: cargo bench --bench solver_bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dutching_arb::domain::odds::book_percentage;
use dutching_arb::{HouseInput, calculate_arb};

fn two_way() -> Vec<HouseInput> {
    vec![
        HouseInput::back(dec!(2.0)).fixed(dec!(100)),
        HouseInput::back(dec!(2.1)),
    ]
}

fn three_way_mixed() -> Vec<HouseInput> {
    vec![
        HouseInput::back(dec!(2.6)).fixed(dec!(100)).with_increase(dec!(10)),
        HouseInput::back(dec!(3.4)).lay().with_commission(dec!(2)),
        HouseInput::back(dec!(5.5)).freebet(),
    ]
}

/// Twenty-runner field with a mix of roles.
fn wide_field() -> Vec<HouseInput> {
    (0..20i64)
        .map(|i| {
            let house = HouseInput::back(Decimal::new(1500 + i * 150, 2));
            match i {
                0 => house.fixed(dec!(50)),
                _ if i % 5 == 0 => house.zeroing(),
                _ if i % 7 == 0 => house.lay().with_commission(dec!(5)),
                _ => house,
            }
        })
        .collect()
}

/// Benchmark a plain two-house surebet.
fn bench_two_way(c: &mut Criterion) {
    let houses = two_way();
    c.bench_function("calculate_arb_two_way", |b| {
        b.iter(|| calculate_arb(black_box(&houses), black_box(dec!(0.01))));
    });
}

/// Benchmark back / lay / freebet in one book.
fn bench_three_way_mixed(c: &mut Criterion) {
    let houses = three_way_mixed();
    c.bench_function("calculate_arb_three_way_mixed", |b| {
        b.iter(|| calculate_arb(black_box(&houses), black_box(dec!(0.5))));
    });
}

/// Benchmark a wide field with zeroing houses.
fn bench_wide_field(c: &mut Criterion) {
    let houses = wide_field();
    c.bench_function("calculate_arb_twenty_runners", |b| {
        b.iter(|| calculate_arb(black_box(&houses), black_box(dec!(0.01))));
    });
}

/// Benchmark the book percentage scan.
fn bench_book_percentage(c: &mut Criterion) {
    let houses = wide_field();
    c.bench_function("book_percentage_twenty_runners", |b| {
        b.iter(|| book_percentage(black_box(&houses)));
    });
}

criterion_group!(
    benches,
    bench_two_way,
    bench_three_way_mixed,
    bench_wide_field,
    bench_book_percentage,
);
criterion_main!(benches);
