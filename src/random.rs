//! Default random source for the sampling operations.
//!
//! Every sampling operation has a `*_with` form taking any [`rand::Rng`]. The plain forms use
//! [`rng`], which is entropy seeded unless the `RICHSEQ_SEED` environment variable pins it.

use std::env;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Environment variable read once to pin the default random source.
pub const SEED_ENV_VAR: &str = "RICHSEQ_SEED";

static FIXED_SEED: Lazy<Option<u64>> = Lazy::new(|| {
    let seed = env::var(SEED_ENV_VAR)
        .ok()
        .and_then(|val| val.trim().parse::<u64>().ok());

    if let Some(seed) = seed {
        log::debug!("{SEED_ENV_VAR} set, default random source pinned to seed {seed}");
    }

    seed
});

// Each call to `rng` with a fixed seed gets its own stream, so two successive `shuffle` calls
// don't produce the same permutation.
static STREAM: AtomicU64 = AtomicU64::new(0);

/// The seed pinned via `RICHSEQ_SEED`, if any.
pub fn fixed_seed() -> Option<u64> {
    *FIXED_SEED
}

/// Returns a generator for one sampling operation.
pub fn rng() -> StdRng {
    match fixed_seed() {
        Some(seed) => seeded(seed, STREAM.fetch_add(1, Ordering::Relaxed)),
        None => StdRng::seed_from_u64(thread_rng().gen()),
    }
}

/// The generator for stream `stream` of a pinned `seed`.
pub(crate) fn seeded(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(stream))
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;

    use super::*;

    #[test]
    fn generators_are_usable() {
        let mut a = rng();
        let mut b = rng();

        let x: u32 = a.gen_range(0..10);
        let y: u32 = b.gen_range(0..10);
        assert!(x < 10 && y < 10);
    }

    #[test]
    fn fixed_seed_is_stable() {
        assert_eq!(fixed_seed(), fixed_seed());
    }

    fn permutation(rng: &mut StdRng) -> Vec<u32> {
        let mut v: Vec<u32> = (0..32).collect();
        v.shuffle(rng);
        v
    }

    #[test]
    fn pinned_streams_are_reproducible() {
        let first = permutation(&mut seeded(42, 0));
        assert_eq!(first, permutation(&mut seeded(42, 0)));

        // The next call under the same pin gets a different permutation.
        assert_ne!(first, permutation(&mut seeded(42, 1)));
        assert_ne!(first, permutation(&mut seeded(43, 0)));
    }

    #[test]
    fn pinned_source_drives_seq_shuffle() {
        let a = crate::Seq::<u32>::from_vec((0..32).collect());
        let b = crate::Seq::<u32>::from_vec((0..32).collect());

        a.shuffle_with(&mut seeded(7, 3));
        b.shuffle_with(&mut seeded(7, 3));
        assert_eq!(a, b);

        b.shuffle_with(&mut seeded(7, 4));
        assert_ne!(a, b);
    }
}
