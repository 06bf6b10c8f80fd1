//! Walk parameters shared by the update step and the convergence check.

use crate::error::{RankError, Result};

/// Restart probability used when none is configured.
pub const DEFAULT_ALPHA: f64 = 0.85;

/// Convergence tolerance used when none is configured.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Damping factor and convergence tolerance for a personalized walk.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWalkParams"))]
pub struct WalkParams {
    alpha: f64,
    epsilon: f64,
}

impl WalkParams {
    /// Create validated walk parameters.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Restart probability, in `[0, 1]`
    /// * `epsilon` - Convergence tolerance, non-negative
    pub fn new(alpha: f64, epsilon: f64) -> Result<Self> {
        Ok(Self {
            alpha: check_alpha(alpha)?,
            epsilon: check_epsilon(epsilon)?,
        })
    }

    /// Replace the restart probability.
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        Self::new(alpha, self.epsilon)
    }

    /// Replace the convergence tolerance.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self> {
        Self::new(self.alpha, epsilon)
    }

    /// Restart probability.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Convergence tolerance.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Unvalidated wire form of [`WalkParams`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWalkParams {
    alpha: f64,
    epsilon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWalkParams> for WalkParams {
    type Error = RankError;

    fn try_from(raw: RawWalkParams) -> Result<Self> {
        Self::new(raw.alpha, raw.epsilon)
    }
}

pub(crate) fn check_alpha(alpha: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(RankError::InvalidAlpha(alpha))
    }
}

pub(crate) fn check_epsilon(epsilon: f64) -> Result<f64> {
    // NaN fails the comparison
    if epsilon >= 0.0 {
        Ok(epsilon)
    } else {
        Err(RankError::InvalidEpsilon(epsilon))
    }
}
