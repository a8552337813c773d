//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for the computer opponent, so a game can be
//! replayed from its seed. Uses xorshift64*.

use crate::moves::Move;

/// Source of computer moves
pub trait MoveSource {
    /// Draw the computer's next move
    fn draw(&mut self) -> Move;
}

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and stream index
    pub fn new(seed: &[u8; 32], stream: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }

        state ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);
        Self::from_state(state)
    }

    /// Create a new RNG from a single integer seed
    ///
    /// The seed goes through splitmix64 first, so neighbouring seeds
    /// start far apart.
    pub fn from_u64(seed: u64) -> Self {
        Self::from_state(splitmix64(seed))
    }

    fn from_state(mut state: u64) -> Self {
        // xorshift never leaves the all-zero state
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Uniform value in [0, 1) with 53 bits of precision
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// splitmix64 finalizer over the golden-ratio increment
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

impl MoveSource for SeededRng {
    fn draw(&mut self) -> Move {
        let index = (self.next_unit() * Move::ALL.len() as f64).floor() as usize;
        Move::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_determinism() {
        let seed = [42u8; 32];
        let mut r1 = SeededRng::new(&seed, 0);
        let mut r2 = SeededRng::new(&seed, 0);

        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SeededRng::from_u64(1);
        let mut rng2 = SeededRng::from_u64(2);

        let vals1: Vec<_> = (0..10).map(|_| rng1.next_u64()).collect();
        let vals2: Vec<_> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(vals1, vals2);
    }

    fn draws(seed: u64, n: usize) -> Vec<Move> {
        let mut rng = SeededRng::from_u64(seed);
        (0..n).map(|_| rng.draw()).collect()
    }

    #[test]
    fn test_seeds_give_distinct_games() {
        let games: HashSet<Vec<Move>> = (0..1000).map(|seed| draws(seed, 40)).collect();
        assert_eq!(games.len(), 1000, "only {} distinct games over 1000 seeds", games.len());
    }

    #[test]
    fn test_seeds_far_apart_give_distinct_games() {
        let seeds = [0u64, 4, 9, 12_345_678, u64::MAX, u64::MAX / 2, 1 << 63];
        let games: HashSet<Vec<Move>> = seeds.iter().map(|&seed| draws(seed, 40)).collect();
        assert_eq!(games.len(), seeds.len());
    }

    #[test]
    fn test_draw_is_uniform_across_seeds() {
        let mut counts = [0u32; 3];
        for seed in 0..3000 {
            counts[SeededRng::from_u64(seed).draw() as usize] += 1;
        }
        for (i, count) in counts.iter().enumerate() {
            assert!(*count > 800 && *count < 1200, "first draw was move {} for {} of 3000 seeds", i, count);
        }
    }

    #[test]
    fn test_different_stream() {
        let seed = [42u8; 32];
        let mut rng1 = SeededRng::new(&seed, 0);
        let mut rng2 = SeededRng::new(&seed, 1);

        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_zero_seed_still_moves() {
        let mut rng = SeededRng::new(&[0u8; 32], 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = SeededRng::from_u64(7);
        for _ in 0..1000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u), "next_unit returned {}", u);
        }
    }

    #[test]
    fn test_draw_is_roughly_uniform() {
        let mut rng = SeededRng::from_u64(42);
        let mut counts = [0u32; 3];
        let samples = 3000;
        for _ in 0..samples {
            counts[rng.draw() as usize] += 1;
        }
        for (i, count) in counts.iter().enumerate() {
            assert!(*count > 800 && *count < 1200, "move {} drawn {} times of {}", i, count, samples);
        }
    }
}
