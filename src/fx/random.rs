use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Bounded random scalars for the generators. Both ends of every range are inclusive.
pub trait RandomSource: fmt::Debug {
    fn uniform(&mut self, min: f32, max: f32) -> f32;

    fn uniform_int(&mut self, min: i32, max: i32) -> i32;

    /// Half-open `[0, 1)`.
    fn unit(&mut self) -> f32;
}

impl dyn RandomSource + '_ {
    #[must_use]
    pub fn pick<'c, T>(&mut self, choices: &'c [T]) -> Option<&'c T> {
        let last = choices.len().checked_sub(1)?;
        let last = i32::try_from(last).unwrap_or(i32::MAX);
        let idx = usize::try_from(self.uniform_int(0, last)).unwrap_or_default();
        choices.get(idx)
    }

    /// Half-open `[0, extent)`; zero when the extent is empty.
    #[must_use]
    pub fn below(&mut self, extent: f32) -> f32 {
        if extent <= 0.0 {
            return 0.0;
        }
        let value = self.unit() * extent;
        if value >= extent { 0.0 } else { value }
    }

    #[must_use]
    pub fn count(&mut self, min: u32, max: u32) -> u32 {
        let lo = i32::try_from(min).unwrap_or(i32::MAX);
        let hi = i32::try_from(max).unwrap_or(i32::MAX);
        u32::try_from(self.uniform_int(lo, hi)).unwrap_or(min)
    }
}

/// `rand`-backed source. Production surfaces seed it from the OS; tests pass a fixed seed.
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::entropy()
    }
}

impl RandomSource for StdRandom {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        let (lo, hi) = ordered(min, max);
        if lo >= hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = ordered(min, max);
        if lo >= hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

// Inverted ranges are a caller bug: fatal in debug, collapsed onto `min` in release.
fn ordered<T: PartialOrd + Copy + fmt::Debug>(min: T, max: T) -> (T, T) {
    debug_assert!(min <= max, "inverted random range {min:?}..={max:?}");
    if min <= max { (min, max) } else { (min, min) }
}
