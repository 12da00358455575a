use crate::error::JournalError;

const MULTIPLIER: u64 = 16807;
const MODULUS: u64 = 2147483647;

/// # Seeded Random
///
/// Park-Miller minimal standard generator. Produces an unbounded sequence of
/// floats in `[0, 1)` that is fully determined by the seed.
///
/// Only meant to make demo data reproducible. Not suitable for anything
/// security sensitive.
///
/// ## Degenerate seeds
/// - `0` and multiples of `2147483647` collapse to a fixed point. Use
///   `try_new` to reject them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    seed: u64,
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { seed, state: seed }
    }

    pub fn try_new(seed: u64) -> Result<Self, JournalError> {
        if seed % MODULUS == 0 {
            return Err(JournalError::DegenerateSeed(seed));
        }

        Ok(Self::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_f64(&mut self) -> f64 {
        // state < 2^31 after the first step, so the product fits in u64.
        self.state = (self.state % MODULUS) * MULTIPLIER % MODULUS;
        (self.state as f64 - 1.0) / (MODULUS - 1) as f64
    }

    /// Uniform index in `0..len`.
    pub fn pick(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64).floor() as usize
    }

    /// `floor(next * span)`, for integer draws kept as floats.
    pub fn floor_scaled(&mut self, span: f64) -> f64 {
        (self.next_f64() * span).floor()
    }

    /// Rewinds to the start of the sequence.
    pub fn restart(&mut self) {
        self.state = self.seed;
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence_for_seed_one() {
        let mut rng = SeededRandom::new(1);

        // 16807^1, 16807^2 and 16807^3 mod (2^31 - 1).
        assert_eq!(rng.next_f64(), 16806.0 / 2147483646.0);
        assert_eq!(rng.next_f64(), 282475248.0 / 2147483646.0);
        assert_eq!(rng.next_f64(), 1622650072.0 / 2147483646.0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a: Vec<f64> = SeededRandom::new(42).take(500).collect();
        let b: Vec<f64> = SeededRandom::new(42).take(500).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_values_in_unit_interval() {
        assert!(SeededRandom::new(42)
            .take(10_000)
            .all(|v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_restart_rewinds() {
        let mut rng = SeededRandom::new(7);
        let first: Vec<f64> = rng.by_ref().take(10).collect();
        rng.restart();
        let second: Vec<f64> = rng.by_ref().take(10).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_seeds_rejected() {
        assert!(matches!(
            SeededRandom::try_new(0),
            Err(JournalError::DegenerateSeed(0))
        ));
        assert!(SeededRandom::try_new(MODULUS * 3).is_err());
        assert!(SeededRandom::try_new(42).is_ok());
    }

    #[test]
    fn test_zero_seed_is_fixed_point() {
        let mut rng = SeededRandom::new(0);
        let first = rng.next_f64();

        assert!(rng.take(5).all(|v| v == first));
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut rng = SeededRandom::new(42);

        for _ in 0..1000 {
            assert!(rng.pick(8) < 8);
        }
    }
}
