use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion,
};

use richseq::{compare, quicksort, Seq, Shared, SortedSeq};
use sort_test_tools::patterns;
use sort_test_tools::tests::inputs;

const SIZES: [usize; 8] = [2, 7, 20, 50, 200, 1_000, 10_000, 100_000];

fn batch_size(len: usize) -> BatchSize {
    if len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    }
}

/// Quicksort against `sort_unstable`, one group per input shape and element type.
fn bench_sorts<T: Ord>(c: &mut Criterion, type_name: &str, convert: fn(Vec<i32>) -> Vec<T>) {
    for (pattern_name, input) in inputs() {
        let mut group = c.benchmark_group(format!("sort-{type_name}-{pattern_name}"));

        for len in SIZES {
            // First element pivots go quadratic on ordered input.
            let ordered = matches!(pattern_name, "ascending" | "descending" | "all_equal");
            if ordered && len > 10_000 {
                continue;
            }

            group.bench_with_input(BenchmarkId::new("richseq_quicksort", len), &len, |b, &len| {
                b.iter_batched(
                    || convert(input(len)),
                    |mut v| quicksort::sort(black_box(v.as_mut_slice())),
                    batch_size(len),
                )
            });

            group.bench_with_input(BenchmarkId::new("std_unstable", len), &len, |b, &len| {
                b.iter_batched(
                    || convert(input(len)),
                    |mut v| black_box(v.as_mut_slice()).sort_unstable(),
                    batch_size(len),
                )
            });
        }

        group.finish();
    }
}

/// Building an ordered sequence one value at a time versus appending and sorting once.
fn bench_ordered_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_build-i32-random");

    for len in SIZES.into_iter().filter(|len| *len <= 10_000) {
        group.bench_with_input(BenchmarkId::new("sorted_seq_add", len), &len, |b, &len| {
            b.iter_batched(
                || patterns::random(len),
                |values| {
                    let seq = SortedSeq::<i32>::with_capacity(len, compare::natural());
                    for val in values {
                        seq.add([val]);
                    }
                    seq
                },
                batch_size(len),
            )
        });

        group.bench_with_input(BenchmarkId::new("seq_push_sort", len), &len, |b, &len| {
            b.iter_batched(
                || patterns::random(len),
                |values| {
                    let seq = Seq::<i32>::with_capacity(len);
                    for val in values {
                        seq.push_right([val]);
                    }
                    seq.sort();
                    seq
                },
                batch_size(len),
            )
        });
    }

    group.finish();
}

/// Cost of the lock in `Shared` mode on a read-heavy loop.
fn bench_access_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_all-i32");

    for len in [20, 1_000, 10_000] {
        let exclusive = Seq::<i32>::from_vec(patterns::random(len));
        let shared = Seq::<i32, Shared>::from_vec(patterns::random(len));

        group.bench_function(BenchmarkId::new("exclusive", len), |b| {
            b.iter(|| {
                (0..len as isize)
                    .filter_map(|i| exclusive.get(black_box(i)))
                    .fold(0i32, i32::wrapping_add)
            })
        });

        group.bench_function(BenchmarkId::new("shared", len), |b| {
            b.iter(|| {
                (0..len as isize)
                    .filter_map(|i| shared.get(black_box(i)))
                    .fold(0i32, i32::wrapping_add)
            })
        });
    }

    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    patterns::use_random_seed_each_time();
    assert_ne!(
        patterns::random(8),
        patterns::random(8),
        "pattern inputs must change between calls"
    );

    bench_sorts(c, "i32", |v| v);
    bench_sorts(c, "string", |v| {
        v.into_iter()
            .map(|val| format!("{:010}", val.unsigned_abs()))
            .collect()
    });
    bench_ordered_build(c);
    bench_access_modes(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
