// SPDX-License-Identifier: MIT
//
// Entropy — the randomness seam for chaos marks.
//
// Zalgo text is random by nature, but random output is untestable. Every
// consumer of randomness takes `&mut impl Entropy` instead of reaching for
// a global generator, so production code seeds from the system while tests
// hand in a fixed seed and assert exact output.
//
// Xorshift32 is the workhorse: three shifts and three XORs per draw,
// period 2^32 - 1, plenty for picking combining marks. Per-variant streams
// are derived with a SplitMix64 finalizer so that neighbouring variant
// indices do not produce correlated first draws.

/// A source of pseudo-random `u32` values.
pub trait Entropy {
    /// Next raw value.
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish value in `0..bound`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 { 0 } else { self.next_u32() % bound }
    }
}

// ─── Xorshift32 ──────────────────────────────────────────────────────────────

/// Minimal deterministic PRNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seeded generator. A zero seed is coerced to 1 (zero is a fixed point).
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Seed from the operating system via `rand`'s thread-local generator.
    #[must_use]
    pub fn from_system() -> Self {
        Self::new(rand::random::<u32>())
    }

    /// An independent stream for one variant of one request.
    #[must_use]
    pub fn for_variant(seed: u32, index: usize) -> Self {
        let mut z = (u64::from(seed) << 32) ^ (index as u64);
        z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        #[allow(clippy::cast_possible_truncation)]
        let folded = (z ^ (z >> 32)) as u32;
        Self::new(folded)
    }

    /// The current internal state, for diagnostics.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }
}

impl Entropy for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Xorshift32::new(42);
        let mut b = Xorshift32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut rng = Xorshift32::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn below_respects_bound() {
        let mut rng = Xorshift32::new(7);
        for bound in 1..50 {
            assert!(rng.below(bound) < bound);
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn variant_streams_differ() {
        let mut first = Xorshift32::for_variant(1234, 0);
        let mut second = Xorshift32::for_variant(1234, 1);
        let a: Vec<u32> = (0..4).map(|_| first.next_u32()).collect();
        let b: Vec<u32> = (0..4).map(|_| second.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn variant_streams_are_reproducible() {
        assert_eq!(Xorshift32::for_variant(99, 5), Xorshift32::for_variant(99, 5));
    }

    #[test]
    fn usable_as_trait_object() {
        let mut rng = Xorshift32::new(3);
        let entropy: &mut dyn Entropy = &mut rng;
        assert!(entropy.below(10) < 10);
    }
}
