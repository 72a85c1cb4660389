//! Color sampling for board fill and refill.
//!
//! The engine draws every new dot through a `ColorSampler`. Two samplers
//! ship with the crate:
//!
//! - **`GameRng`**: seeded ChaCha8, uniform over the palette. Same seed
//!   produces the same board and the same refills.
//! - **`ScriptedSampler`**: replays a fixed color sequence. Used to pin
//!   down refills in tests.
//!
//! ## Sessions
//!
//! ```
//! use dotlink::core::GameRng;
//!
//! let mut master = GameRng::new(42);
//!
//! // One independent stream per session
//! let mut a = master.fork();
//! let mut b = master.fork();
//! assert_ne!(a.seed(), b.seed());
//!
//! // Forks are deterministic
//! let mut master2 = GameRng::new(42);
//! assert_eq!(master2.fork().seed(), GameRng::new(42).fork().seed());
//! # let _ = (a.gen_range_usize(0..4), b.gen_range_usize(0..4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::color::{Color, Palette};

/// Source of new dot colors.
///
/// Called once per cell at construction and once per vacated cell at every
/// refill. Implementations must return a color from `palette`.
pub trait ColorSampler {
    /// Draw one color from the palette.
    fn sample(&mut self, palette: &Palette) -> Color;
}

impl<S: ColorSampler + ?Sized> ColorSampler for &mut S {
    fn sample(&mut self, palette: &Palette) -> Color {
        (**self).sample(palette)
    }
}

impl<S: ColorSampler + ?Sized> ColorSampler for Box<S> {
    fn sample(&mut self, palette: &Palette) -> Color {
        (**self).sample(palette)
    }
}

/// Deterministic RNG with forking for independent sessions.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl ColorSampler for GameRng {
    fn sample(&mut self, palette: &Palette) -> Color {
        Color(self.gen_range_usize(0..palette.len()) as u8)
    }
}

/// Replays a fixed sequence of colors, cycling when exhausted.
///
/// Colors outside the palette are wrapped into range, so a script written
/// for a larger palette stays valid.
#[derive(Clone, Debug)]
pub struct ScriptedSampler {
    script: Vec<Color>,
    position: usize,
}

impl ScriptedSampler {
    /// Create a sampler that replays `script`.
    ///
    /// An empty script always yields the palette's first color.
    #[must_use]
    pub fn new(script: Vec<Color>) -> Self {
        Self {
            script,
            position: 0,
        }
    }

    /// A sampler that always yields the same color.
    #[must_use]
    pub fn constant(color: Color) -> Self {
        Self::new(vec![color])
    }

    /// Number of colors drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl ColorSampler for ScriptedSampler {
    fn sample(&mut self, palette: &Palette) -> Color {
        let color = if self.script.is_empty() {
            Color(0)
        } else {
            self.script[self.position % self.script.len()]
        };
        self.position += 1;
        Color((color.index() % palette.len()) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let palette = Palette::standard(4);
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.sample(&palette), rng2.sample(&palette));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
    }

    #[test]
    fn test_sample_stays_in_palette() {
        let palette = Palette::standard(3);
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            assert!(palette.contains(rng.sample(&palette)));
        }
    }

    #[test]
    fn test_sample_covers_palette() {
        let palette = Palette::standard(4);
        let mut rng = GameRng::new(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.sample(&palette).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_cycles() {
        let palette = Palette::standard(4);
        let mut s = ScriptedSampler::new(vec![Color(1), Color(3)]);
        let drawn: Vec<_> = (0..5).map(|_| s.sample(&palette)).collect();
        assert_eq!(drawn, vec![Color(1), Color(3), Color(1), Color(3), Color(1)]);
        assert_eq!(s.draws(), 5);
    }

    #[test]
    fn test_scripted_wraps_into_palette() {
        let palette = Palette::standard(2);
        let mut s = ScriptedSampler::constant(Color(5));
        assert_eq!(s.sample(&palette), Color(1));

        let mut empty = ScriptedSampler::new(Vec::new());
        assert_eq!(empty.sample(&palette), Color(0));
    }

    #[test]
    fn test_sampler_through_mut_ref() {
        fn draw(mut s: impl ColorSampler, p: &Palette) -> Color {
            s.sample(p)
        }
        let palette = Palette::standard(4);
        let mut s = ScriptedSampler::constant(Color(2));
        assert_eq!(draw(&mut s, &palette), Color(2));
        assert_eq!(s.draws(), 1);
    }
}
