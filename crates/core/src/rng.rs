//! RNG module - uniform piece selection
//!
//! Every spawn picks one of the 7 templates independently and uniformly.
//! The generator is seeded once and then advanced; it is never reseeded
//! between spawns, so successive picks cannot repeat just because they fall
//! in the same clock tick.

use crate::types::PieceKind;

/// Simple 64-bit LCG (Knuth MMIX constants)
///
/// Deterministic for a given seed, which keeps games reproducible in tests.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next random u32 (high half of the state, the low bits of an
    /// LCG are weak)
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Generate a value in `[0, max)` by multiply-shift
    pub fn next_below(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform template picker
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
    seed: u64,
}

impl PieceRandomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Pick the next template
    pub fn draw(&mut self) -> PieceKind {
        let i = self.rng.next_below(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
