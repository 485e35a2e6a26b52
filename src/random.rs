//! Sources for the turtle's turn angles.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the magnitude (degrees) of each turn the turtle makes.
pub trait AngleSource {
    fn next_delta(&mut self) -> f32;
}

/// Range of turn magnitudes: `min + floor(u * span)` for `u` in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub min: f32,
    pub span: f32,
}

impl Default for AngleRange {
    fn default() -> Self {
        Self {
            min: 30.0,
            span: 20.0,
        }
    }
}

impl AngleRange {
    /// Maps a unit sample to a whole-degree turn.
    pub fn sample(&self, unit: f64) -> f32 {
        self.min + (unit * self.span as f64).floor() as f32
    }

    /// Inclusive upper bound of [`sample`](Self::sample) for integral spans.
    pub fn max(&self) -> f32 {
        self.min + (self.span - 1.0).max(0.0)
    }
}

/// Pseudo-random turns driven by a splitmix64 stream.
#[derive(Clone, Debug)]
pub struct RandomAngles {
    state: u64,
    range: AngleRange,
}

impl RandomAngles {
    /// Seeds from the system clock, so every run grows a different plant.
    pub fn from_entropy(range: AngleRange) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed);
        Self::with_seed(seed, range)
    }

    pub fn with_seed(seed: u64, range: AngleRange) -> Self {
        Self { state: seed, range }
    }

    /// Uniform sample in `[0, 1)` from the top 53 bits.
    fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        (splitmix64(self.state) >> 11) as f64 / (1u64 << 53) as f64
    }
}

impl AngleSource for RandomAngles {
    fn next_delta(&mut self) -> f32 {
        let unit = self.next_unit();
        self.range.sample(unit)
    }
}

/// Always turns by the same amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAngle(pub f32);

impl AngleSource for FixedAngle {
    fn next_delta(&mut self) -> f32 {
        self.0
    }
}

/// Splitmix64 output mix.
fn splitmix64(state: u64) -> u64 {
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
