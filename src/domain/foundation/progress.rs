//! ProgressFraction value object (0.0 to 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion fraction between 0.0 and 1.0 inclusive.
///
/// Constructed from a display position and a total; always clamped into
/// range so callers can feed it straight to a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressFraction(f64);

impl ProgressFraction {
    /// Zero progress.
    pub const ZERO: Self = Self(0.0);

    /// Full progress.
    pub const COMPLETE: Self = Self(1.0);

    /// Creates a new fraction, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Computes progress from a 0-based display position and a total count.
    ///
    /// Position `i` of `n` reports `(i + 1) / n`; a zero total reports zero.
    pub fn of_position(display_index: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        Self::new((display_index + 1) as f64 / total as f64)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if this fraction represents full completion.
    pub fn is_complete(&self) -> bool {
        self.0 >= 1.0
    }
}

impl Default for ProgressFraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for ProgressFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}
