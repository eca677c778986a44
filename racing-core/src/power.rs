//! Power sources - one randomized draw per car per turn
//!
//! The engine only depends on the [`PowerSource`] trait, so games can be driven
//! either by a real RNG ([`RandomPower`]) or by a fixed script ([`ScriptedPower`]).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Highest value a power draw can take (draws are in `0..=MAX_POWER`)
pub const MAX_POWER: u8 = 9;

/// Produces one power value per movement request
pub trait PowerSource {
    /// Draw the next power value
    fn draw(&mut self) -> u8;
}

impl<P: PowerSource + ?Sized> PowerSource for &mut P {
    fn draw(&mut self) -> u8 {
        (**self).draw()
    }
}

/// Uniform power draws backed by an RNG
#[derive(Clone, Debug)]
pub struct RandomPower<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RandomPower<R> {
    /// Wrap an existing RNG
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPower<ChaCha8Rng> {
    /// Reproducible draws from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Draws seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> PowerSource for RandomPower<R> {
    fn draw(&mut self) -> u8 {
        self.rng.gen_range(0..=MAX_POWER)
    }
}

/// Deterministic power source replaying a fixed sequence
///
/// The sequence cycles once exhausted, so a single value acts as a constant.
#[derive(Clone, Debug)]
pub struct ScriptedPower {
    values: Vec<u8>,
    cursor: usize,
}

impl ScriptedPower {
    /// Replay `values` in order, wrapping around at the end
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "scripted power needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Always draw `value`
    pub fn constant(value: u8) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl PowerSource for ScriptedPower {
    fn draw(&mut self) -> u8 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
