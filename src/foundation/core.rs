use std::fmt;

use crate::foundation::error::{OsbError, OsbResult};

/// Storyboard timestamp in milliseconds.
///
/// The format stores times as 32-bit integers; negative values are valid (before the song
/// starts).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct TimeMs(pub i32);

impl TimeMs {
    /// Time zero.
    pub const ZERO: Self = Self(0);

    /// `self + count * span`, failing when the result leaves the 32-bit range.
    pub fn checked_repeat(self, count: u32, span: TimeMs) -> OsbResult<Self> {
        let total = i64::from(span.0)
            .checked_mul(i64::from(count))
            .and_then(|v| v.checked_add(i64::from(self.0)))
            .and_then(|v| i32::try_from(v).ok());
        total.map(Self).ok_or_else(|| {
            OsbError::invalid_value(format!(
                "{} + {count} x {} does not fit a storyboard time",
                self.0, span.0
            ))
        })
    }
}

impl From<i32> for TimeMs {
    fn from(ms: i32) -> Self {
        Self(ms)
    }
}

impl fmt::Display for TimeMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Small deterministic generator for procedural effects.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed a new generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in `[lo, hi)`.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }

    /// Uniform integer in `[lo, hi]`, both ends inclusive.
    pub fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (i64::from(hi) - i64::from(lo) + 1) as u64;
        let offset = (self.next_u64() % span) as i64;
        (i64::from(lo) + offset) as i32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
