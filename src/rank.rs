//! Personalized random-walk rank update over an edge-list graph.
//!
//! One step moves the mass of every vertex along its outgoing edges,
//! damps the result by `1 - alpha` and injects `alpha` at the restart
//! vertex:
//!
//! ```text
//! next[b] = (1 - alpha) * sum over edges a -> b of rank[a] * w / deg[a]
//! next[u] += alpha
//! ```
//!
//! The divisor is the literal out-degree of the source, not the total
//! weight leaving it, so weights are expected to average to one per vertex
//! for the result to stay stochastic.

use log::debug;
use rayon::prelude::*;

use crate::config::{check_alpha, WalkParams};
use crate::error::{RankError, Result};

/// Validated transition of a personalized random walk.
///
/// Holds the parts of the update that stay fixed across iterations, so a
/// caller driving the walk validates the graph once and then calls
/// [`Transition::apply`] repeatedly.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    degrees: &'a [usize],
    row: &'a [usize],
    col: &'a [usize],
    weights: &'a [f64],
    alpha: f64,
}

impl<'a> Transition<'a> {
    /// Create a transition from an edge list.
    ///
    /// # Arguments
    ///
    /// * `degrees` - Out-degree of each vertex; its length is the vertex count
    /// * `row` - Source vertex of each edge
    /// * `col` - Destination vertex of each edge
    /// * `weights` - Weight of each edge, aligned with `row` and `col`
    /// * `alpha` - Restart probability in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Fails if the edge arrays differ in length, if an edge endpoint is not
    /// a vertex, or if an edge leaves a vertex whose out-degree is zero.
    pub fn new(
        degrees: &'a [usize],
        row: &'a [usize],
        col: &'a [usize],
        weights: &'a [f64],
        alpha: f64,
    ) -> Result<Self> {
        if row.len() != col.len() {
            return Err(RankError::EdgeLengthMismatch {
                rows: row.len(),
                cols: col.len(),
            });
        }
        if weights.len() != row.len() {
            return Err(RankError::WeightLengthMismatch {
                edges: row.len(),
                weights: weights.len(),
            });
        }
        let alpha = check_alpha(alpha)?;

        let num_vertices = degrees.len();
        for (edge, (&src, &dst)) in row.iter().zip(col).enumerate() {
            for vertex in [src, dst] {
                if vertex >= num_vertices {
                    return Err(RankError::VertexOutOfRange {
                        vertex,
                        num_vertices,
                    });
                }
            }
            if degrees[src] == 0 {
                return Err(RankError::ZeroOutDegree { vertex: src, edge });
            }
        }

        Ok(Self {
            degrees,
            row,
            col,
            weights,
            alpha,
        })
    }

    /// Create a transition using the restart probability of `params`.
    pub fn from_params(
        degrees: &'a [usize],
        row: &'a [usize],
        col: &'a [usize],
        weights: &'a [f64],
        params: &WalkParams,
    ) -> Result<Self> {
        Self::new(degrees, row, col, weights, params.alpha())
    }

    /// Number of vertices the transition acts on.
    pub fn num_vertices(&self) -> usize {
        self.degrees.len()
    }

    /// Number of edges in the transition.
    pub fn num_edges(&self) -> usize {
        self.row.len()
    }

    /// Restart probability injected at the restart vertex.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Apply one walk step to `rank`, restarting at vertex `restart`.
    ///
    /// Returns a freshly allocated rank vector of the same length; `rank`
    /// itself is left untouched.
    pub fn apply(&self, rank: &[f64], restart: usize) -> Result<Vec<f64>> {
        let num_vertices = self.num_vertices();
        if rank.len() != num_vertices {
            return Err(RankError::RankLengthMismatch {
                expected: num_vertices,
                actual: rank.len(),
            });
        }
        if restart >= num_vertices {
            return Err(RankError::VertexOutOfRange {
                vertex: restart,
                num_vertices,
            });
        }

        debug!(
            "rank update: {} vertices, {} edges, alpha={}, restart={}",
            num_vertices,
            self.num_edges(),
            self.alpha,
            restart
        );

        // Sequential scatter keeps the summation in edge order
        let mut next = vec![0.0; num_vertices];
        for ((&src, &dst), &weight) in self.row.iter().zip(self.col).zip(self.weights) {
            next[dst] += rank[src] * weight / self.degrees[src] as f64;
        }

        let damping = 1.0 - self.alpha;
        next.par_iter_mut().for_each(|r| *r *= damping);
        next[restart] += self.alpha;

        Ok(next)
    }
}

/// Compute the next rank vector of a personalized random walk.
///
/// # Arguments
///
/// * `rank` - Current rank vector, one entry per vertex
/// * `restart` - Vertex receiving the restart mass `alpha`
/// * `degrees` - Out-degree of each vertex
/// * `row` - Source vertex of each edge
/// * `col` - Destination vertex of each edge
/// * `weights` - Weight of each edge
/// * `alpha` - Restart probability in `[0, 1]`
///
/// # Example
///
/// ```
/// let next = srw_core::rank_update(
///     &[1.0, 0.0, 0.0],
///     0,
///     &[1, 1, 0],
///     &[0, 1],
///     &[1, 2],
///     &[1.0, 1.0],
///     0.15,
/// )?;
/// assert_eq!(next, vec![0.15, 0.85, 0.0]);
/// # Ok::<(), srw_core::RankError>(())
/// ```
pub fn rank_update(
    rank: &[f64],
    restart: usize,
    degrees: &[usize],
    row: &[usize],
    col: &[usize],
    weights: &[f64],
    alpha: f64,
) -> Result<Vec<f64>> {
    Transition::new(degrees, row, col, weights, alpha)?.apply(rank, restart)
}

/// Uniform starting distribution over `n` vertices.
pub fn uniform_rank(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_chain_step() {
        // 0 -> 1 -> 2, vertex 2 is dangling
        let next = rank_update(
            &[1.0, 0.0, 0.0],
            0,
            &[1, 1, 0],
            &[0, 1],
            &[1, 2],
            &[1.0, 1.0],
            0.15,
        )
        .unwrap();

        assert_close(&next, &[0.15, 0.85, 0.0]);
    }

    #[test]
    fn test_divides_by_degree_not_weight() {
        // Vertex 0 has two edges with weights 3 and 1, degree 2
        let next = rank_update(
            &[1.0, 0.0, 0.0],
            2,
            &[2, 0, 0],
            &[0, 0],
            &[1, 2],
            &[3.0, 1.0],
            0.0,
        )
        .unwrap();

        assert_close(&next, &[0.0, 1.5, 0.5]);
    }

    #[test]
    fn test_parallel_edges_accumulate() {
        let next = rank_update(
            &[0.5, 0.5],
            1,
            &[2, 1],
            &[0, 0, 1],
            &[1, 1, 0],
            &[1.0, 1.0, 1.0],
            0.5,
        )
        .unwrap();

        // acc = [0.5, 0.5] -> damped [0.25, 0.25] -> restart at 1
        assert_close(&next, &[0.25, 0.75]);
    }

    #[test]
    fn test_alpha_one_is_pure_restart() {
        let next = rank_update(
            &[0.2, 0.3, 0.5],
            1,
            &[1, 1, 1],
            &[0, 1, 2],
            &[1, 2, 0],
            &[1.0, 1.0, 1.0],
            1.0,
        )
        .unwrap();

        assert_close(&next, &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_no_edges() {
        let next = rank_update(&[0.5, 0.5], 0, &[0, 0], &[], &[], &[], 0.3).unwrap();
        assert_close(&next, &[0.3, 0.0]);
    }

    #[test]
    fn test_closed_graph_mass() {
        // Cycle 0 -> 1 -> 2 -> 0 with an extra chord 0 -> 2
        let degrees = [2, 1, 1];
        let row = [0, 0, 1, 2];
        let col = [1, 2, 2, 0];
        let weights = [1.0, 1.0, 1.0, 1.0];
        let rank = [0.2, 0.3, 0.5];
        let alpha = 0.15;

        let next = rank_update(&rank, 2, &degrees, &row, &col, &weights, alpha).unwrap();
        let total: f64 = next.iter().sum();
        assert!((total - ((1.0 - alpha) * 1.0 + alpha)).abs() < 1e-12);
    }

    #[test]
    fn test_transition_reuse() {
        let degrees = [1, 1];
        let row = [0, 1];
        let col = [1, 0];
        let weights = [1.0, 1.0];
        let transition = Transition::new(&degrees, &row, &col, &weights, 0.5).unwrap();

        assert_eq!(transition.num_vertices(), 2);
        assert_eq!(transition.num_edges(), 2);
        assert_eq!(transition.alpha(), 0.5);

        let first = transition.apply(&[1.0, 0.0], 0).unwrap();
        assert_close(&first, &[0.5, 0.5]);
        let second = transition.apply(&first, 0).unwrap();
        assert_close(&second, &[0.75, 0.25]);
    }

    #[test]
    fn test_inputs_untouched() {
        let rank = vec![0.25, 0.25, 0.5];
        let degrees = vec![1, 1, 1];
        let row = vec![0, 1, 2];
        let col = vec![1, 2, 0];
        let weights = vec![1.0, 1.0, 1.0];
        let snapshot = (
            rank.clone(),
            degrees.clone(),
            row.clone(),
            col.clone(),
            weights.clone(),
        );

        let next = rank_update(&rank, 0, &degrees, &row, &col, &weights, 0.15).unwrap();

        assert_ne!(next, rank);
        assert_eq!((rank, degrees, row, col, weights), snapshot);
    }

    #[test]
    fn test_zero_degree_source_rejected() {
        let err = rank_update(
            &[1.0, 0.0, 0.0],
            0,
            &[1, 0, 0],
            &[0, 1],
            &[1, 2],
            &[1.0, 1.0],
            0.15,
        )
        .unwrap_err();

        assert_eq!(err, RankError::ZeroOutDegree { vertex: 1, edge: 1 });
    }

    #[test]
    fn test_edge_length_mismatch_rejected() {
        let err = rank_update(&[1.0, 0.0], 0, &[1, 1], &[0, 1], &[1], &[1.0, 1.0], 0.15)
            .unwrap_err();
        assert_eq!(err, RankError::EdgeLengthMismatch { rows: 2, cols: 1 });
    }

    #[test]
    fn test_weight_length_mismatch_rejected() {
        let err = rank_update(&[1.0, 0.0], 0, &[1, 1], &[0], &[1], &[1.0, 1.0], 0.15)
            .unwrap_err();
        assert_eq!(
            err,
            RankError::WeightLengthMismatch {
                edges: 1,
                weights: 2
            }
        );
    }

    #[test]
    fn test_out_of_range_ids_rejected() {
        let err = rank_update(&[1.0, 0.0], 0, &[1, 1], &[0], &[2], &[1.0], 0.15).unwrap_err();
        assert_eq!(
            err,
            RankError::VertexOutOfRange {
                vertex: 2,
                num_vertices: 2
            }
        );

        let err = rank_update(&[1.0, 0.0], 0, &[1, 1], &[3], &[1], &[1.0], 0.15).unwrap_err();
        assert_eq!(
            err,
            RankError::VertexOutOfRange {
                vertex: 3,
                num_vertices: 2
            }
        );

        let err = rank_update(&[1.0, 0.0], 5, &[1, 1], &[0], &[1], &[1.0], 0.15).unwrap_err();
        assert!(err.is_index_error());
    }

    #[test]
    fn test_rank_length_rejected() {
        let err = rank_update(&[1.0], 0, &[1, 1], &[0], &[1], &[1.0], 0.15).unwrap_err();
        assert_eq!(
            err,
            RankError::RankLengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        let err = rank_update(&[1.0], 0, &[0], &[], &[], &[], 1.01).unwrap_err();
        assert_eq!(err, RankError::InvalidAlpha(1.01));

        let err = rank_update(&[1.0], 0, &[0], &[], &[], &[], -0.5).unwrap_err();
        assert_eq!(err, RankError::InvalidAlpha(-0.5));

        // NaN never compares equal, so match on the variant
        let err = rank_update(&[1.0], 0, &[0], &[], &[], &[], f64::NAN).unwrap_err();
        assert!(matches!(err, RankError::InvalidAlpha(a) if a.is_nan()));
    }

    #[test]
    fn test_transition_from_params() {
        let degrees = [1, 1];
        let row = [0, 1];
        let col = [1, 0];
        let weights = [1.0, 1.0];
        let params = WalkParams::new(0.5, 1e-3).unwrap();

        let transition =
            Transition::from_params(&degrees, &row, &col, &weights, &params).unwrap();
        assert_eq!(transition.alpha(), 0.5);
        assert_close(&transition.apply(&[1.0, 0.0], 0).unwrap(), &[0.5, 0.5]);

        let defaults = WalkParams::default();
        let default = Transition::from_params(&degrees, &row, &col, &weights, &defaults).unwrap();
        assert_eq!(default.alpha(), crate::config::DEFAULT_ALPHA);
    }

    #[test]
    fn test_uniform_rank() {
        assert!(uniform_rank(0).is_empty());
        assert_close(&uniform_rank(4), &[0.25; 4]);
    }
}
