//! Input generators for the sort suite and the benchmarks.
//!
//! Generators draw from one seed per process, so a failing run can be replayed by exporting
//! the printed seed as `PATTERN_SEED`.

use std::env;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Environment variable pinning the seed of every generator.
pub const SEED_ENV_VAR: &str = "PATTERN_SEED";

#[derive(Clone, Copy)]
enum Seed {
    Pinned(u64),
    PerProcess(u64),
}

static SEED: OnceLock<Seed> = OnceLock::new();
static FRESH_SEED_PER_CALL: AtomicBool = AtomicBool::new(false);

fn process_seed() -> Seed {
    *SEED.get_or_init(|| match env::var(SEED_ENV_VAR) {
        Ok(val) => match val.trim().parse() {
            Ok(seed) => Seed::Pinned(seed),
            Err(_) => panic!("{SEED_ENV_VAR} must be an unsigned integer, got {val:?}"),
        },
        Err(_) => Seed::PerProcess(thread_rng().gen()),
    })
}

/// The seed the next generator call starts from.
pub fn random_init_seed() -> u64 {
    match process_seed() {
        Seed::Pinned(seed) => seed,
        Seed::PerProcess(_) if FRESH_SEED_PER_CALL.load(Ordering::Relaxed) => thread_rng().gen(),
        Seed::PerProcess(seed) => seed,
    }
}

/// Gives every following generator call its own seed. Benchmarks use this so repeated
/// iterations don't see identical inputs.
///
/// Panics if the seed is pinned through [`SEED_ENV_VAR`].
pub fn use_random_seed_each_time() {
    if let Seed::Pinned(_) = process_seed() {
        panic!("use_random_seed_each_time conflicts with {SEED_ENV_VAR}");
    }

    FRESH_SEED_PER_CALL.store(true, Ordering::Relaxed);
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Random values drawn from `range`.
pub fn random_uniform(len: usize, range: impl Into<Uniform<i32>>) -> Vec<i32> {
    let dist = range.into();
    let mut rng = rng();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random values where the first `sorted_percent` percent are already in order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let prefix = ((len as f64) * sorted_percent / 100.0).round() as usize;
    v[..prefix.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into `runs` equally long runs, each sorted in a random direction.
pub fn saw_mixed(len: usize, runs: usize) -> Vec<i32> {
    let run_len = (len / runs.max(1)).max(1);
    let mut v = random(len);
    let mut rng = rng();

    for run in v.chunks_mut(run_len) {
        sort_run(run, rng.gen());
    }

    v
}

/// Like [`saw_mixed`], with run lengths drawn from `run_lens`.
pub fn saw_mixed_range(len: usize, run_lens: Range<usize>) -> Vec<i32> {
    let dist = Uniform::from(run_lens.start.max(1)..run_lens.end.max(2));
    let mut v = random(len);
    let mut rng = rng();

    let mut start = 0;
    while start < len {
        let end = (start + dist.sample(&mut rng)).min(len);
        sort_run(&mut v[start..end], rng.gen());
        start = end;
    }

    v
}

/// An ascending run followed by a descending one.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (up, down) = v.split_at_mut(len / 2);
    sort_run(up, true);
    sort_run(down, false);
    v
}

fn sort_run(run: &mut [i32], ascending: bool) {
    if ascending {
        run.sort_unstable();
    } else {
        run.sort_unstable_by(|a, b| b.cmp(a));
    }
}
