//! Convergence test between successive rank vectors.

use log::debug;
use rayon::prelude::*;

use crate::config::{check_epsilon, WalkParams};
use crate::error::{RankError, Result};

/// Outcome of comparing two rank vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    /// Whether `max_delta` is strictly below the tolerance.
    pub converged: bool,
    /// Largest absolute per-entry difference (L∞ distance).
    pub max_delta: f64,
}

impl From<Convergence> for (bool, f64) {
    fn from(c: Convergence) -> Self {
        (c.converged, c.max_delta)
    }
}

/// Compare two rank vectors under tolerance `epsilon`.
///
/// The vectors have converged when their largest absolute per-entry
/// difference is strictly less than `epsilon`; a difference equal to
/// `epsilon` does not count. Any NaN difference makes `max_delta` NaN and
/// the result non-converged.
///
/// # Errors
///
/// Fails if the vectors differ in length or `epsilon` is negative or NaN.
pub fn check_convergence(x1: &[f64], x2: &[f64], epsilon: f64) -> Result<Convergence> {
    if x1.len() != x2.len() {
        return Err(RankError::VectorLengthMismatch {
            left: x1.len(),
            right: x2.len(),
        });
    }
    let epsilon = check_epsilon(epsilon)?;

    let max_delta = x1
        .par_iter()
        .zip(x2.par_iter())
        .map(|(a, b)| (a - b).abs())
        .reduce(|| 0.0, nan_max);

    let converged = max_delta < epsilon;
    debug!(
        "convergence check: max_delta={}, epsilon={}, converged={}",
        max_delta, epsilon, converged
    );

    Ok(Convergence {
        converged,
        max_delta,
    })
}

/// Compare two rank vectors under the tolerance of `params`.
pub fn check_convergence_with(
    x1: &[f64],
    x2: &[f64],
    params: &WalkParams,
) -> Result<Convergence> {
    check_convergence(x1, x2, params.epsilon())
}

/// `f64::max` that propagates NaN instead of discarding it.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
