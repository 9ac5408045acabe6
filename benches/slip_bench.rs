use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use loto_slip::{MAX_NUMBER, MAX_NUMBERS, MIN_NUMBER, MIN_NUMBERS, Slip};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// A valid slip: distinct in-range numbers.
fn gen_valid_slip(count: usize, rng: &mut StdRng) -> Slip {
    let mut numbers = Vec::with_capacity(count);
    while numbers.len() < count {
        let n = rng.gen_range(MIN_NUMBER..=MAX_NUMBER);
        if !numbers.contains(&n) {
            numbers.push(n);
        }
    }
    Slip {
        person_id: "bench".to_owned(),
        numbers,
    }
}

/// Same as valid, but with the last number duplicating the first.
fn gen_duplicate_slip(count: usize, rng: &mut StdRng) -> Slip {
    let mut slip = gen_valid_slip(count, rng);
    slip.numbers[count - 1] = slip.numbers[0];
    Slip {
        person_id: "bench".to_owned(),
        numbers: slip.numbers,
    }
}

fn bench_slip_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("slip_check");

    for &count in &[MIN_NUMBERS, MAX_NUMBERS] {
        let mut rng = StdRng::seed_from_u64(count as u64);
        let valid = gen_valid_slip(count, &mut rng);

        let mut rng2 = StdRng::seed_from_u64((count as u64) ^ 0xDEAD_BEEF);
        let with_dup = gen_duplicate_slip(count, &mut rng2);

        group.bench_with_input(BenchmarkId::new("valid", count), &valid, |b, slip| {
            b.iter(|| {
                let result = black_box(slip).check();
                black_box(result.is_ok());
            })
        });

        group.bench_with_input(BenchmarkId::new("with_dup", count), &with_dup, |b, slip| {
            b.iter(|| {
                let result = black_box(slip).check();
                black_box(result.is_err());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_slip_check);
criterion_main!(benches);
