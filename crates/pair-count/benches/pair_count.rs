//! Benchmarking to compare the adapters counting complete values


use baseline::*;
use divan::Bencher;
use pair_count::prelude::*;
use rand::{distr::Uniform, prelude::*, rngs::SmallRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[1 << 12, 1 << 16, 1 << 20];

/// Values are drawn from `0..=MAX_VALUE`, so most of them are repeated for larger sizes.
const MAX_VALUE: u32 = 4096;

fn prepare_data(size: usize) -> Vec<u32> {
    Uniform::new_inclusive(0, MAX_VALUE)
        .unwrap()
        .sample_iter(&mut SmallRng::seed_from_u64(42))
        .take(size)
        .collect()
}

#[divan::bench_group(sample_count = 100, sample_size = 10)]
mod compare_methods {
    use super::*;

    #[divan::bench(args = SIZES)]
    fn baseline(bencher: Bencher, size: usize) {
        bencher
            .with_inputs(|| prepare_data(size))
            .bench_local_refs(|data| two_pass(data));
    }

    #[divan::bench(args = SIZES)]
    fn value_iter(bencher: Bencher, size: usize) {
        bencher
            .with_inputs(|| prepare_data(size))
            .bench_local_refs(|data| data.iter().copied().into_value_iter().count_complete());
    }

    #[divan::bench(args = SIZES)]
    fn value_iter_nohash(bencher: Bencher, size: usize) {
        bencher
            .with_inputs(|| prepare_data(size))
            .bench_local_refs(|data| {
                let tally: Tally<u32, u32, nohash_hasher::BuildNoHashHasher<u32>> =
                    data.iter().copied().into_value_iter().tally();
                tally.complete()
            });
    }

    #[divan::bench(args = SIZES)]
    fn bounded_iter(bencher: Bencher, size: usize) {
        bencher
            .with_inputs(|| prepare_data(size))
            .bench_local_refs(|data| {
                data.iter()
                    .copied()
                    .into_bounded_iter(MAX_VALUE as usize)
                    .count_complete()
            });
    }

    #[cfg(feature = "parallel")]
    #[divan::bench(args = SIZES)]
    fn par_value_iter(bencher: Bencher, size: usize) {
        bencher
            .with_inputs(|| prepare_data(size))
            .bench_local_refs(|data| {
                let tally: Tally<u32, u32, nohash_hasher::BuildNoHashHasher<u32>> =
                    data.par_iter().copied().into_value_par_iter().tally();
                tally.complete()
            });
    }
}
