//! Out-degree helpers for edge-list graphs.
//!
//! The rank update divides by the literal number of edges leaving each
//! vertex; these helpers derive that array from the source ids of an edge
//! list and report the vertices that have no outgoing edges.

use crate::error::{RankError, Result};

/// Count outgoing edges per vertex.
///
/// # Arguments
///
/// * `num_nodes` - Total number of vertices
/// * `row` - Source vertex of each edge
///
/// # Returns
///
/// Vector of out-degrees indexed by vertex id.
pub fn out_degrees(num_nodes: usize, row: &[usize]) -> Result<Vec<usize>> {
    let mut degrees = vec![0usize; num_nodes];

    for &src in row {
        let slot = degrees.get_mut(src).ok_or(RankError::VertexOutOfRange {
            vertex: src,
            num_vertices: num_nodes,
        })?;
        *slot += 1;
    }

    Ok(degrees)
}

/// Vertices with no outgoing edges, in ascending order.
pub fn dangling_vertices(degrees: &[usize]) -> Vec<usize> {
    degrees
        .iter()
        .enumerate()
        .filter(|(_, &deg)| deg == 0)
        .map(|(i, _)| i)
        .collect()
}
