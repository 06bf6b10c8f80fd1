//! # SRW Core
//!
//! Building blocks for personalized random-walk ranking (personalized
//! PageRank) over weighted directed graphs stored as edge lists.
//!
//! The crate computes a single walk step and the convergence test between
//! two successive rank vectors. Driving the iteration, choosing the
//! iteration cap and building the graph are left to the caller.
//!
//! ## Features
//!
//! - **Rank update**: one damped transition with restart at a chosen vertex
//! - **Convergence check**: L∞ distance against a strict tolerance
//! - **Degree helpers**: out-degree array from an edge list
//! - **Python bindings**: enabled with the `python` feature
//!
//! ## Usage
//!
//! ```
//! use srw_core::{check_convergence_with, out_degrees, uniform_rank, Transition, WalkParams};
//!
//! let row = [0, 1, 2];
//! let col = [1, 2, 0];
//! let weights = [1.0, 1.0, 1.0];
//! let degrees = out_degrees(3, &row)?;
//! let params = WalkParams::new(0.15, 1e-6)?;
//! let transition = Transition::from_params(&degrees, &row, &col, &weights, &params)?;
//!
//! let mut rank = uniform_rank(3);
//! for _ in 0..100 {
//!     let next = transition.apply(&rank, 0)?;
//!     let done = check_convergence_with(&rank, &next, &params)?.converged;
//!     rank = next;
//!     if done {
//!         break;
//!     }
//! }
//! assert!(rank[0] > rank[2]);
//! # Ok::<(), srw_core::RankError>(())
//! ```

pub mod config;
pub mod convergence;
pub mod degree;
pub mod error;
pub mod rank;

#[cfg(feature = "python")]
mod python;


pub use config::WalkParams;
pub use convergence::{check_convergence, check_convergence_with, Convergence};
pub use degree::{dangling_vertices, out_degrees};
pub use error::{RankError, Result};
pub use rank::{rank_update, uniform_rank, Transition};
